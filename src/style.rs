// CSS text for layer and text styles.
// Kept free of `web_sys` so it can be exercised on the host.

use crt_core::{LayerStyle, TearBand, TextShadow, TextStyle};

// Negative zero prints as "-0" in Rust; the browser never sees that form.
#[inline]
fn num(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Opacity as the browser would apply it: clamped to `[0, 1]`, NaN as 0.
#[inline]
pub fn opacity(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        num(v.clamp(0.0, 1.0))
    }
}

pub fn layer_filter(style: &LayerStyle) -> String {
    if style.blur == 0.0 && style.brightness == 1.0 {
        return "none".to_string();
    }
    format!(
        "blur({}px) brightness({})",
        num(style.blur),
        num(style.brightness)
    )
}

pub fn layer_transform(style: &LayerStyle) -> String {
    format!(
        "translate({}px, {}px)",
        num(style.translate.x),
        num(style.translate.y)
    )
}

/// Full inline `style` attribute for a screen layer.
pub fn layer_css(style: &LayerStyle) -> String {
    format!(
        "filter: {}; transform: {}; opacity: {}",
        layer_filter(style),
        layer_transform(style),
        opacity(style.opacity)
    )
}

pub fn tear_band_css(band: &TearBand) -> String {
    format!(
        "top: {}%; opacity: {}",
        num(band.top_percent),
        opacity(band.opacity)
    )
}

pub fn text_filter(style: &TextStyle) -> String {
    format!(
        "blur({}px) drop-shadow(0 0 {}px rgba(255, 255, 255, 0.5))",
        num(style.blur),
        num(style.glow_radius)
    )
}

fn text_shadow(shadow: &TextShadow) -> String {
    let [r, g, b] = shadow.rgb;
    format!(
        "{}vw {}vw {}px rgba({}, {}, {}, {})",
        num(shadow.offset_vw.x),
        num(shadow.offset_vw.y),
        num(shadow.blur),
        r,
        g,
        b,
        num(shadow.alpha)
    )
}

pub fn text_shadows(style: &TextStyle) -> String {
    style
        .shadows
        .iter()
        .map(text_shadow)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn text_css(style: &TextStyle) -> String {
    format!(
        "filter: {}; text-shadow: {}; opacity: {}",
        text_filter(style),
        text_shadows(style),
        opacity(style.opacity)
    )
}
