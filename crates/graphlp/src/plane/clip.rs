//! Visible part of a constraint line inside the viewport's unit box.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::cfg::EPS_DEDUP;
use super::equation::Equation;
use super::viewport::{Pixel, Viewport};

/// Line segment in problem-space units, endpoints sorted by `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Segment {
    /// Endpoints mapped through `Viewport::to_pixel`.
    pub fn to_pixels(&self, vp: &Viewport) -> (Pixel, Pixel) {
        (vp.to_pixel(self.start), vp.to_pixel(self.end))
    }
}

/// Clip `a·x + b·y = c` against `x=0`, `y=0`, `x=max_x`, `y=max_y`.
///
/// Returns `None` when fewer than two distinct boundary hits lie on the box:
/// both coefficients zero, or the line misses the visible region.
pub fn segment_for(eq: &Equation, vp: &Viewport) -> Option<Segment> {
    let (a, b, c) = (eq.a, eq.b, eq.c);
    let max_x = vp.max_units_x();
    let max_y = vp.max_units_y();
    let mut hits: Vec<Vector2<f64>> = Vec::with_capacity(4);
    if a != 0.0 {
        let x = c / a;
        if within(x, max_x) {
            hits.push(Vector2::new(x, 0.0));
        }
    }
    if b != 0.0 {
        let y = c / b;
        if within(y, max_y) {
            hits.push(Vector2::new(0.0, y));
        }
    }
    if a != 0.0 {
        let x = (c - b * max_y) / a;
        if within(x, max_x) {
            hits.push(Vector2::new(x, max_y));
        }
    }
    if b != 0.0 {
        let y = (c - a * max_x) / b;
        if within(y, max_y) {
            hits.push(Vector2::new(max_x, y));
        }
    }
    hits.sort_by(|p, q| match p.x.partial_cmp(&q.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => p.y.partial_cmp(&q.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    // corner hits show up twice
    hits.dedup_by(|p, q| (p.x - q.x).abs() < EPS_DEDUP && (p.y - q.y).abs() < EPS_DEDUP);
    match hits.as_slice() {
        [start, end, ..] => Some(Segment {
            start: *start,
            end: *end,
        }),
        _ => None,
    }
}

#[inline]
fn within(v: f64, max: f64) -> bool {
    (0.0..=max).contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::equation::{Relation, System};
    use crate::plane::viewport::PixelRect;

    fn viewport_10() -> Viewport {
        let s = System::from_rows(&[
            (1.0, 1.0, '=', 0.0),
            (1.0, 0.0, '<', 10.0),
            (0.0, 1.0, '<', 10.0),
        ])
        .unwrap();
        Viewport::build(&s, PixelRect::new(0, 0, 110, 110))
    }

    #[test]
    fn diagonal_hits_both_axes() {
        let vp = viewport_10();
        let seg = segment_for(&Equation::new(1.0, 1.0, Relation::Le, 4.0), &vp).unwrap();
        assert!((seg.start - Vector2::new(0.0, 4.0)).norm() < 1e-12);
        assert!((seg.end - Vector2::new(4.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn vertical_line_spans_full_height() {
        let vp = viewport_10();
        let seg = segment_for(&Equation::new(2.0, 0.0, Relation::Le, 8.0), &vp).unwrap();
        assert!((seg.start - Vector2::new(4.0, 0.0)).norm() < 1e-12);
        assert!((seg.end - Vector2::new(4.0, vp.max_units_y())).norm() < 1e-12);
    }

    #[test]
    fn line_through_origin_corner_is_deduplicated() {
        let vp = viewport_10();
        // x - y = 0 passes through (0,0) twice and (max,max) twice.
        let seg = segment_for(&Equation::new(1.0, -1.0, Relation::Eq, 0.0), &vp).unwrap();
        assert!(seg.start.norm() < 1e-12);
        assert!((seg.end.x - vp.max_units_x()).abs() < 1e-9);
        assert!((seg.end.y - vp.max_units_y()).abs() < 1e-9);
    }

    #[test]
    fn outside_and_degenerate_lines_are_not_drawable() {
        let vp = viewport_10();
        assert!(segment_for(&Equation::new(1.0, 0.0, Relation::Le, 50.0), &vp).is_none());
        assert!(segment_for(&Equation::new(1.0, 1.0, Relation::Ge, -3.0), &vp).is_none());
        assert!(segment_for(&Equation::new(0.0, 0.0, Relation::Eq, 5.0), &vp).is_none());
    }
}
