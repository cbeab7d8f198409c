use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create `<tag class="...">` and append it to `parent`.
pub fn append_element(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

pub fn append_canvas(
    document: &web::Document,
    parent: &web::Element,
    class: &str,
    width: u32,
    height: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = append_element(document, parent, "canvas", class)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

/// 2D context of a canvas, or `None` when the browser refuses one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<web::CanvasRenderingContext2d>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::warn!("[dom] getContext(2d) failed: {:?}", e);
            None
        }
    }
}

#[inline]
pub fn set_style(el: &web::Element, css: &str) {
    _ = el.set_attribute("style", css);
}
