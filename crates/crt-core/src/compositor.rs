//! Layer stack for one render pass.
//!
//! [`compose`] is a pure function of the latest parameter snapshot and the
//! tear rolled for this pass. The order and the per-channel constants are
//! fixed; nothing here is configurable.

use crate::modulator::AnimationParameters;
use crate::tear::TearOverlay;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Channel(Channel),
    Noise,
    Scanlines,
    Curvature,
    Vignette,
    Glare,
    Tear,
}

impl LayerKind {
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Channel(Channel::Red) => "red",
            LayerKind::Channel(Channel::Green) => "green",
            LayerKind::Channel(Channel::Blue) => "blue",
            LayerKind::Noise => "noise",
            LayerKind::Scanlines => "scanlines",
            LayerKind::Curvature => "curvature",
            LayerKind::Vignette => "vignette",
            LayerKind::Glare => "glare",
            LayerKind::Tear => "vhs-tear",
        }
    }
}

/// Back to front.
pub const LAYER_ORDER: [LayerKind; 9] = [
    LayerKind::Channel(Channel::Red),
    LayerKind::Channel(Channel::Green),
    LayerKind::Channel(Channel::Blue),
    LayerKind::Noise,
    LayerKind::Scanlines,
    LayerKind::Curvature,
    LayerKind::Vignette,
    LayerKind::Glare,
    LayerKind::Tear,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// Gaussian blur radius in px.
    pub blur: f64,
    pub brightness: f64,
    /// Translation in px.
    pub translate: DVec2,
    pub opacity: f64,
}

impl LayerStyle {
    /// Untransformed, fully opaque.
    pub const IDENTITY: LayerStyle = LayerStyle {
        blur: 0.0,
        brightness: 1.0,
        translate: DVec2::ZERO,
        opacity: 1.0,
    };

    pub fn with_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
    }
}

/// How one chromatic copy of the test card is derived from the parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelTransform {
    pub channel: Channel,
    pub blur_scale: f64,
    pub brightness: f64,
    // multiplies chromatic_offset
    pub x_scale: f64,
    // multiplies layer_offset
    pub y_scale: f64,
    pub opacity: f64,
}

impl ChannelTransform {
    pub fn style(&self, params: &AnimationParameters) -> LayerStyle {
        LayerStyle {
            blur: params.blur * self.blur_scale,
            brightness: self.brightness,
            translate: DVec2::new(
                params.chromatic_offset * self.x_scale,
                params.layer_offset * self.y_scale,
            ),
            opacity: self.opacity,
        }
    }
}

pub const CHANNEL_TRANSFORMS: [ChannelTransform; 3] = [
    ChannelTransform {
        channel: Channel::Red,
        blur_scale: 1.2,
        brightness: 1.2,
        x_scale: -1.0,
        y_scale: -0.5,
        opacity: 0.7,
    },
    ChannelTransform {
        channel: Channel::Green,
        blur_scale: 1.0,
        brightness: 1.1,
        x_scale: 0.0,
        y_scale: 1.0,
        opacity: 0.8,
    },
    ChannelTransform {
        channel: Channel::Blue,
        blur_scale: 0.8,
        brightness: 1.15,
        x_scale: 1.0,
        y_scale: 0.7,
        opacity: 0.75,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub style: LayerStyle,
}

/// Everything a display needs to draw one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    /// In [`LAYER_ORDER`].
    pub layers: [Layer; 9],
    pub tear: TearOverlay,
}

impl Scene {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }
}

pub fn compose(params: &AnimationParameters, tear: TearOverlay) -> Scene {
    let layers = LAYER_ORDER.map(|kind| Layer {
        kind,
        style: layer_style(kind, params, &tear),
    });
    Scene { layers, tear }
}

fn layer_style(kind: LayerKind, params: &AnimationParameters, tear: &TearOverlay) -> LayerStyle {
    match kind {
        LayerKind::Channel(channel) => CHANNEL_TRANSFORMS
            .iter()
            .find(|t| t.channel == channel)
            .map(|t| t.style(params))
            .unwrap_or(LayerStyle::IDENTITY),
        LayerKind::Noise => LayerStyle::with_opacity(params.noise_opacity),
        LayerKind::Tear => LayerStyle::with_opacity(tear.opacity),
        LayerKind::Scanlines | LayerKind::Curvature | LayerKind::Vignette | LayerKind::Glare => {
            LayerStyle::IDENTITY
        }
    }
}
