//! Half-plane membership tests and the sampled shading mask.
//!
//! Two predicates on purpose:
//! - `is_infeasible`: exact comparison, drives per-pixel shading.
//! - `satisfies_eps`: tolerant comparison, drives vertex filtering where
//!   intersection arithmetic lands points on boundaries only up to rounding.

use nalgebra::Vector2;

use super::cfg::EPS_FEAS;
use super::equation::{Equation, Relation};
use super::viewport::{Pixel, Viewport};

impl Equation {
    /// Exact violation test: `<` fails on `lhs > c`, `>` on `lhs < c`, `=` on `lhs != c`.
    #[inline]
    pub fn is_infeasible(&self, p: Vector2<f64>) -> bool {
        let lhs = self.lhs(p);
        match self.op {
            Relation::Le => lhs > self.c,
            Relation::Ge => lhs < self.c,
            Relation::Eq => lhs != self.c,
        }
    }

    /// Membership with slack `eps` on the right-hand side.
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let lhs = self.lhs(p);
        match self.op {
            Relation::Le => lhs <= self.c + eps,
            Relation::Ge => lhs >= self.c - eps,
            Relation::Eq => (lhs - self.c).abs() <= eps,
        }
    }

    /// `satisfies_eps` with the default `EPS_FEAS`.
    #[inline]
    pub fn satisfies(&self, p: Vector2<f64>) -> bool {
        self.satisfies_eps(p, EPS_FEAS)
    }
}

/// Pixels of a `step`-spaced grid over the viewport where `eq` is violated.
///
/// Samples run from the origin to origin + extent inclusive, row by row from the top.
/// A `step` of 0 is treated as 1.
pub fn shade_mask(eq: &Equation, vp: &Viewport, step: u32) -> Vec<Pixel> {
    let step = step.max(1) as usize;
    let x0 = vp.origin_x();
    let y0 = vp.origin_y();
    let mut mask = Vec::new();
    for py in (y0..=y0 + vp.height_px()).step_by(step) {
        for px in (x0..=x0 + vp.width_px()).step_by(step) {
            let pixel = Pixel::new(px, py);
            if eq.is_infeasible(vp.to_units(pixel)) {
                mask.push(pixel);
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::equation::System;
    use crate::plane::viewport::PixelRect;

    #[test]
    fn boundary_point_is_feasible_under_tolerance() {
        let p = Vector2::new(1.5, 2.5);
        for op in [Relation::Le, Relation::Ge, Relation::Eq] {
            let eq = Equation::new(2.0, 2.0, op, 8.0);
            assert!(eq.satisfies(p), "{op:?}");
            assert!(eq.satisfies(p + Vector2::new(1e-9, 0.0)), "{op:?}");
        }
    }

    #[test]
    fn exact_predicate_has_no_slack() {
        let le = Equation::new(1.0, 0.0, Relation::Le, 1.0);
        assert!(!le.is_infeasible(Vector2::new(1.0, 0.0)));
        assert!(le.is_infeasible(Vector2::new(1.0 + 1e-9, 0.0)));
        assert!(le.satisfies(Vector2::new(1.0 + 1e-9, 0.0)));

        let ge = Equation::new(0.0, 1.0, Relation::Ge, 2.0);
        assert!(ge.is_infeasible(Vector2::new(0.0, 1.9)));
        assert!(!ge.is_infeasible(Vector2::new(0.0, 2.0)));

        let eq = Equation::new(1.0, 1.0, Relation::Eq, 1.0);
        assert!(eq.is_infeasible(Vector2::new(0.5, 0.5 + 1e-12)));
        assert!(!eq.is_infeasible(Vector2::new(0.5, 0.5)));
    }

    #[test]
    fn mask_covers_violated_half() {
        let s = System::from_rows(&[
            (1.0, 1.0, '=', 0.0),
            (1.0, 0.0, '<', 10.0),
            (0.0, 1.0, '<', 10.0),
        ])
        .unwrap();
        let vp = Viewport::build(&s, PixelRect::new(0, 0, 110, 110));
        // ~10 px per unit: x <= 5.5 is violated from pixel column 60 on.
        let eq = Equation::new(1.0, 0.0, Relation::Le, 5.5);
        let mask = shade_mask(&eq, &vp, 10);
        assert!(mask.iter().all(|px| px.x >= 60));
        // 12 columns × 12 rows sampled, columns 60..=110 are violated.
        assert_eq!(mask.len(), 6 * 12);
        let nonneg = Equation::new(1.0, 0.0, Relation::Ge, 0.0);
        assert!(shade_mask(&nonneg, &vp, 10).is_empty());
        assert!(shade_mask(&nonneg, &vp, 0).is_empty());
    }
}
