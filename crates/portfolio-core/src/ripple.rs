//! Ripple entities and the drawing surface they are rendered onto.
//!
//! A ripple is born at [`RIPPLE_START_RADIUS`], grows by `speed` every frame,
//! fades linearly as it approaches `max_radius` and is retired on the frame
//! its radius reaches `max_radius`. Nothing here touches a browser API; the
//! web frontend implements [`RippleSurface`] on top of a 2D canvas context.

use crate::bands::BandKind;
use crate::constants::*;
use glam::Vec2;
use std::fmt;

/// Which rule produced a ripple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleOrigin {
    Band(BandKind),
    Burst,
    Passive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
    pub line_width: f32,
    pub speed: f32,
    pub hue: f32,
    pub origin: RippleOrigin,
}

impl Ripple {
    /// Fraction of the way from the centre to `max_radius`.
    #[inline]
    fn progress(&self) -> f32 {
        self.radius / self.max_radius
    }

    /// Stroke alpha at the current radius: `opacity * (1 - r/max)`, never negative.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.opacity * (1.0 - self.progress())).max(0.0)
    }

    /// Stroke width at the current radius; the ring thins as it grows.
    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.line_width * (1.0 - self.progress() * RIPPLE_THINNING)
    }

    #[inline]
    pub fn is_retired(&self) -> bool {
        self.radius >= self.max_radius
    }

    /// Grow by one frame. Returns true once the ripple should be retired.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.radius += self.speed;
        self.is_retired()
    }

    pub fn stroke(&self, center: Vec2) -> CircleStroke {
        CircleStroke {
            center,
            radius: self.radius,
            line_width: self.stroke_width(),
            color: Color::hsla(self.hue, self.alpha()),
            glow_blur: RIPPLE_GLOW_BLUR,
            glow_color: Color::hsla(self.hue, RIPPLE_GLOW_ALPHA),
        }
    }
}

/// CSS colour; `Display` renders the exact string a canvas style expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hsla { h: f32, s: f32, l: f32, a: f32 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Color {
    /// Ripple palette colour: fixed saturation/lightness, variable hue and alpha.
    #[inline]
    pub fn hsla(hue: f32, alpha: f32) -> Self {
        Color::Hsla {
            h: hue,
            s: RIPPLE_COLOR_SATURATION,
            l: RIPPLE_COLOR_LIGHTNESS,
            a: alpha,
        }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Hsla { a, .. } | Color::Rgba { a, .. } => a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsla { h, s, l, a } => write!(f, "hsla({:.1}, {}%, {}%, {:.3})", h, s, l, a),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

/// One stroked circle with a soft glow.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleStroke {
    pub center: Vec2,
    pub radius: f32,
    pub line_width: f32,
    pub color: Color,
    pub glow_blur: f32,
    pub glow_color: Color,
}

/// Where ripples get drawn. Implemented by the canvas context on the web and
/// by recording surfaces in tests.
pub trait RippleSurface {
    fn clear(&mut self);
    fn stroke_circle(&mut self, circle: &CircleStroke);
}
