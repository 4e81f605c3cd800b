use crate::foundation::error::{StarglassError, StarglassResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};

/// Viewport dimensions in pixels.
///
/// A zero-area viewport is legal input everywhere and paints nothing
/// deterministically; [`Viewport::is_degenerate`] is the single guard scenes
/// consult before dividing by a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel area as `f64`.
    pub fn area(self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    /// The smaller of the two dimensions as `f64`.
    pub fn min_dim(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Screen diagonal length in pixels.
    pub fn diagonal(self) -> f64 {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        (w * w + h * h).sqrt()
    }

    /// Viewport center point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Dimensions narrowed to the `u16` range `vello_cpu` surfaces require.
    pub fn as_u16(self) -> StarglassResult<(u16, u16)> {
        let w = u16::try_from(self.width)
            .map_err(|_| StarglassError::render("viewport width exceeds u16"))?;
        let h = u16::try_from(self.height)
            .map_err(|_| StarglassError::render("viewport height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Straight-alpha RGBA8 color used by scene code.
///
/// Premultiplication happens once, at the painter boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from straight-alpha channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale this color's alpha by `factor` in `[0, 1]`.
    pub fn with_alpha(self, factor: f64) -> Self {
        let a = (f64::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Build a color from hue (degrees), saturation, lightness and alpha, all
    /// but hue in `[0, 1]`.
    pub fn from_hsla(hue_deg: f64, sat: f64, light: f64, alpha: f64) -> Self {
        let h = hue_deg.rem_euclid(360.0) / 60.0;
        let sat = sat.clamp(0.0, 1.0);
        let light = light.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * light - 1.0).abs()) * sat;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = light - c / 2.0;
        let to_u8 = |v: f64| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
