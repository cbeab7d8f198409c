// Host-side tests for the inline CSS emitted by the front-end.
// The front-end crate is wasm-only, so its style module is included directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use crt_core::*;
use glam::DVec2;
use style::*;

#[test]
fn identity_layer_has_no_filter() {
    assert_eq!(layer_filter(&LayerStyle::IDENTITY), "none");
    assert_eq!(
        layer_css(&LayerStyle::IDENTITY),
        "filter: none; transform: translate(0px, 0px); opacity: 1"
    );
}

#[test]
fn channel_layer_css() {
    let style = LayerStyle {
        blur: 12.0,
        brightness: 1.2,
        translate: DVec2::new(-3.0, -50.0),
        opacity: 0.7,
    };
    assert_eq!(
        layer_css(&style),
        "filter: blur(12px) brightness(1.2); transform: translate(-3px, -50px); opacity: 0.7"
    );
}

#[test]
fn negative_zero_is_printed_as_zero() {
    let style = LayerStyle {
        translate: DVec2::new(-0.0, -0.0),
        ..LayerStyle::IDENTITY
    };
    assert_eq!(layer_transform(&style), "translate(0px, 0px)");
    assert_eq!(opacity(-0.0), 0.0);
    assert_eq!(format!("{}", opacity(-0.0)), "0");
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(opacity(35.0), 1.0);
    assert_eq!(opacity(-1.0), 0.0);
    assert_eq!(opacity(f64::NAN), 0.0);
    assert_eq!(opacity(0.25), 0.25);
}

#[test]
fn tear_band_css_clamps_opacity_only() {
    let band = TearBand {
        top_percent: 42.5,
        opacity: 35.0,
    };
    assert_eq!(tear_band_css(&band), "top: 42.5%; opacity: 1");

    let band = TearBand {
        top_percent: 0.0,
        opacity: 0.0,
    };
    assert_eq!(tear_band_css(&band), "top: 0%; opacity: 0");
}

#[test]
fn text_css_without_chromatic_offset() {
    let style = blurred_text_style(5.0, 0.0);
    assert_eq!(
        text_shadows(&style),
        "0vw 0vw 15px rgba(255, 0, 0, 0.5), 0vw 0vw 15px rgba(0, 255, 255, 0.5)"
    );
    assert!(text_filter(&style).ends_with("drop-shadow(0 0 20px rgba(255, 255, 255, 0.5))"));
    assert!(text_css(&style).ends_with("opacity: 0.6"));
}

#[test]
fn text_shadows_follow_offset() {
    let style = blurred_text_style(10.0, 3.0);
    assert_eq!(
        text_shadows(&style),
        "0.3vw 0.2vw 15px rgba(255, 0, 0, 0.5), -0.2vw -0.1vw 15px rgba(0, 255, 255, 0.5)"
    );
    assert!(text_css(&style).ends_with("opacity: 1"));
}
