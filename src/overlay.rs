use crate::constants::*;
use crate::dom;
use crate::style;
use crt_core::TextOverlay;
use web_sys as web;

/// DOM nodes of the typed-text layer.
pub struct TextNodes {
    container: web::Element,
    phrase: web::Element,
    headline: web::Element,
    cursor: web::Element,
}

impl TextNodes {
    pub fn build(document: &web::Document, root: &web::Element) -> anyhow::Result<Self> {
        let container = dom::append_element(document, root, "div", TEXT_CONTAINER_CLASS)?;
        let phrase = dom::append_element(document, &container, "div", TEXT_PHRASE_CLASS)?;
        let headline = dom::append_element(document, &container, "div", TEXT_HEADLINE_CLASS)?;
        let cursor = dom::append_element(document, &headline, "span", TEXT_CURSOR_CLASS)?;
        cursor.set_text_content(Some(CURSOR_GLYPH));
        let nodes = Self {
            container,
            phrase,
            headline,
            cursor,
        };
        nodes.hide();
        Ok(nodes)
    }

    /// Show the overlay when present, hide the whole layer otherwise.
    pub fn apply(&self, overlay: Option<&TextOverlay>) {
        let Some(overlay) = overlay else {
            self.hide();
            return;
        };
        dom::set_style(&self.container, "");
        dom::set_style(&self.phrase, &style::text_css(&overlay.style));
        self.phrase.set_text_content(Some(&overlay.phrase));

        // Setting text content drops children, so re-attach the cursor after the text
        self.headline.set_text_content(Some(&overlay.headline));
        _ = self.headline.append_child(&self.cursor);
        dom::set_style(
            &self.cursor,
            if overlay.cursor_visible {
                "visibility:visible"
            } else {
                "visibility:hidden"
            },
        );
    }

    pub fn hide(&self) {
        dom::set_style(&self.container, HIDDEN_STYLE);
    }
}
