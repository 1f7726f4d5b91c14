//! Plot area: unit extents derived from a system, plus the pixel mapping.
//!
//! The unit box is `[0, max_units_x] × [0, max_units_y]`. Pixel y grows downward,
//! so unit y is flipped against the bottom edge of the drawable rectangle.

use nalgebra::Vector2;

use super::cfg::{GRID_DIVISIONS, MARGIN, MIN_AXIS_UNITS};
use super::equation::System;

/// Pixel coordinate on the host surface.
pub type Pixel = Vector2<i32>;

/// Drawable rectangle inside the host window, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Left gutter reserved for Y-axis labels.
    pub const LABEL_GUTTER_X: i32 = 60;
    /// Bottom gutter reserved for X-axis labels.
    pub const LABEL_GUTTER_Y: i32 = 30;

    /// Extents are clamped to at least one pixel.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Window-sized plot area with the label gutters removed.
    pub fn from_window(width: i32, height: i32) -> Self {
        Self::new(
            Self::LABEL_GUTTER_X,
            0,
            width - Self::LABEL_GUTTER_X,
            height - Self::LABEL_GUTTER_Y,
        )
    }
}

/// Grid tick: pixel position along its axis plus the unit value it labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub pixel: i32,
    pub value: f64,
}

/// Bounded, margin-padded coordinate system for one `System`.
///
/// Invariants:
/// - `max_units_x, max_units_y >= 1.0`.
/// - `pixels_per_unit = pixel extent / unit extent` on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    rect: PixelRect,
    max_units_x: f64,
    max_units_y: f64,
    pixels_per_unit_x: f64,
    pixels_per_unit_y: f64,
}

impl Viewport {
    /// Fit the unit box to the positive axis intercepts of the constraints.
    ///
    /// Each axis takes the largest positive intercept, floored at `MIN_AXIS_UNITS`,
    /// then padded by `MARGIN`. The objective row is ignored.
    pub fn build(system: &System, rect: PixelRect) -> Self {
        let (xs, ys): (Vec<f64>, Vec<f64>) =
            system.constraints().iter().map(|e| e.intercepts()).unzip();
        let max_units_x = axis_extent(&xs);
        let max_units_y = axis_extent(&ys);
        Self {
            rect,
            max_units_x,
            max_units_y,
            pixels_per_unit_x: f64::from(rect.width) / max_units_x,
            pixels_per_unit_y: f64::from(rect.height) / max_units_y,
        }
    }

    #[inline]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }
    #[inline]
    pub fn origin_x(&self) -> i32 {
        self.rect.x
    }
    #[inline]
    pub fn origin_y(&self) -> i32 {
        self.rect.y
    }
    #[inline]
    pub fn width_px(&self) -> i32 {
        self.rect.width
    }
    #[inline]
    pub fn height_px(&self) -> i32 {
        self.rect.height
    }
    #[inline]
    pub fn max_units_x(&self) -> f64 {
        self.max_units_x
    }
    #[inline]
    pub fn max_units_y(&self) -> f64 {
        self.max_units_y
    }
    #[inline]
    pub fn pixels_per_unit_x(&self) -> f64 {
        self.pixels_per_unit_x
    }
    #[inline]
    pub fn pixels_per_unit_y(&self) -> f64 {
        self.pixels_per_unit_y
    }
    #[inline]
    pub fn units_per_pixel_x(&self) -> f64 {
        self.max_units_x / f64::from(self.rect.width)
    }
    #[inline]
    pub fn units_per_pixel_y(&self) -> f64 {
        self.max_units_y / f64::from(self.rect.height)
    }
    #[inline]
    pub fn units_per_division_x(&self) -> f64 {
        self.max_units_x / f64::from(GRID_DIVISIONS)
    }
    #[inline]
    pub fn units_per_division_y(&self) -> f64 {
        self.max_units_y / f64::from(GRID_DIVISIONS)
    }

    /// Inclusive membership in the unit box.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (0.0..=self.max_units_x).contains(&p.x) && (0.0..=self.max_units_y).contains(&p.y)
    }

    /// Unit point → pixel (truncating, y flipped).
    pub fn to_pixel(&self, p: Vector2<f64>) -> Pixel {
        let px = self.rect.x + (p.x * self.pixels_per_unit_x) as i32;
        let py = self.rect.y + self.rect.height - (p.y * self.pixels_per_unit_y) as i32;
        Pixel::new(px, py)
    }

    /// Pixel → unit point; inverse of `to_pixel` up to truncation.
    pub fn to_units(&self, px: Pixel) -> Vector2<f64> {
        let x = f64::from(px.x - self.rect.x) / self.pixels_per_unit_x;
        let y = self.max_units_y - f64::from(px.y - self.rect.y) / self.pixels_per_unit_y;
        Vector2::new(x, y)
    }

    /// `GRID_DIVISIONS + 1` ticks along the X axis, left to right.
    pub fn ticks_x(&self) -> Vec<Tick> {
        let step = self.units_per_division_x();
        (0..=GRID_DIVISIONS)
            .map(|i| {
                let value = f64::from(i) * step;
                Tick {
                    pixel: self.rect.x + (value * self.pixels_per_unit_x) as i32,
                    value,
                }
            })
            .collect()
    }

    /// `GRID_DIVISIONS + 1` ticks along the Y axis, bottom to top.
    pub fn ticks_y(&self) -> Vec<Tick> {
        let step = self.units_per_division_y();
        (0..=GRID_DIVISIONS)
            .map(|i| {
                let value = f64::from(i) * step;
                Tick {
                    pixel: self.rect.y + self.rect.height - (value * self.pixels_per_unit_y) as i32,
                    value,
                }
            })
            .collect()
    }
}

fn axis_extent(intercepts: &[f64]) -> f64 {
    let largest = intercepts
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    largest.max(MIN_AXIS_UNITS) * MARGIN
}
