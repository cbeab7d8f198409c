//! The CRT frame on the page: three test-card canvases, the grain canvas,
//! decorative layers, the tear bands and the text layer.

use crate::constants::*;
use crate::dom;
use crate::overlay::TextNodes;
use crate::style;
use crt_core::{LayerKind, PixelBuffer, Scene, TextOverlay, LAYER_ORDER};
use wasm_bindgen::{Clamped, JsValue};
use web_sys as web;

pub struct Surface {
    // In back-to-front order
    layers: Vec<(LayerKind, web::Element)>,
    channel_ctxs: Vec<web::CanvasRenderingContext2d>,
    noise_ctx: Option<web::CanvasRenderingContext2d>,
    tear_band: web::Element,
    tear_scanline: web::Element,
    text: TextNodes,
}

impl Surface {
    pub fn build(
        document: &web::Document,
        root: &web::Element,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let frame = dom::append_element(document, root, "div", FRAME_CLASS)?;
        let mut layers = Vec::with_capacity(LAYER_ORDER.len());
        let mut channel_ctxs = Vec::new();
        let mut noise_ctx = None;
        let mut tear = None;

        for kind in LAYER_ORDER {
            let class = format!("{}{}", LAYER_CLASS_PREFIX, kind.name());
            let el: web::Element = match kind {
                LayerKind::Channel(_) | LayerKind::Noise => {
                    let canvas = dom::append_canvas(
                        document,
                        &frame,
                        &format!("{} {}", CANVAS_CLASS, class),
                        width,
                        height,
                    )?;
                    let ctx = dom::context_2d(&canvas);
                    if ctx.is_none() {
                        log::warn!("[surface] no 2d context for {} layer", kind.name());
                    }
                    match (kind, ctx) {
                        (LayerKind::Noise, ctx) => noise_ctx = ctx,
                        (_, Some(ctx)) => channel_ctxs.push(ctx),
                        (_, None) => {}
                    }
                    canvas.into()
                }
                LayerKind::Tear => {
                    let el = dom::append_element(document, &frame, "div", &class)?;
                    let band = dom::append_element(document, &el, "div", TEAR_BAND_CLASS)?;
                    let scanline = dom::append_element(document, &el, "div", TEAR_SCANLINE_CLASS)?;
                    tear = Some((band, scanline));
                    el
                }
                _ => dom::append_element(document, &frame, "div", &class)?,
            };
            layers.push((kind, el));
        }

        let (tear_band, tear_scanline) =
            tear.ok_or_else(|| anyhow::anyhow!("layer order has no tear layer"))?;
        let text = TextNodes::build(document, root)?;

        Ok(Self {
            layers,
            channel_ctxs,
            noise_ctx,
            tear_band,
            tear_scanline,
            text,
        })
    }

    /// Copy the test card into every channel canvas. Canvases without a
    /// context are skipped.
    pub fn draw_pattern(&self, pattern: &PixelBuffer) {
        for ctx in &self.channel_ctxs {
            if let Err(e) = put_pixels(ctx, pattern) {
                log::error!("[surface] pattern upload failed: {:?}", e);
            }
        }
    }

    pub fn draw_noise(&self, noise: &PixelBuffer) {
        let Some(ctx) = &self.noise_ctx else {
            return;
        };
        if let Err(e) = put_pixels(ctx, noise) {
            log::error!("[surface] noise upload failed: {:?}", e);
        }
    }

    /// Apply the dynamic layer styles. Decorative layers keep their page CSS.
    pub fn apply_scene(&self, scene: &Scene) {
        for (layer, (kind, el)) in scene.layers.iter().zip(&self.layers) {
            debug_assert_eq!(layer.kind, *kind);
            match kind {
                LayerKind::Channel(_) | LayerKind::Noise | LayerKind::Tear => {
                    dom::set_style(el, &style::layer_css(&layer.style));
                }
                _ => {}
            }
        }
        dom::set_style(&self.tear_band, &style::tear_band_css(&scene.tear.band));
        dom::set_style(
            &self.tear_scanline,
            &style::tear_band_css(&scene.tear.scanline),
        );
    }

    pub fn apply_text(&self, overlay: Option<&TextOverlay>) {
        self.text.apply(overlay);
    }
}

fn put_pixels(ctx: &web::CanvasRenderingContext2d, buffer: &PixelBuffer) -> Result<(), JsValue> {
    let image = web::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(buffer.as_bytes()),
        buffer.width(),
        buffer.height(),
    )?;
    ctx.put_image_data(&image, 0.0, 0.0)
}
