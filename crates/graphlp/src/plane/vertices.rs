//! Pairwise line intersections over a whole system (objective included),
//! plus the crossings of every row with the quadrant axes.

use std::iter::FusedIterator;

use nalgebra::{Matrix2, Vector2};
use tracing::trace;

use super::cfg::EPS_DET;
use super::equation::{Equation, Relation, System};

/// `x2 = 0`.
const X_AXIS: Equation = Equation {
    a: 0.0,
    b: 1.0,
    c: 0.0,
    op: Relation::Eq,
};
/// `x1 = 0`.
const Y_AXIS: Equation = Equation {
    a: 1.0,
    b: 0.0,
    c: 0.0,
    op: Relation::Eq,
};

/// Lines that produced a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Rows `i < j` of the system.
    Pair(usize, usize),
    /// A row against the axis `x2 = 0`.
    XAxis(usize),
    /// A row against the axis `x1 = 0`.
    YAxis(usize),
    /// Both axes.
    Origin,
}

/// Intersection point before any feasibility filtering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub point: Vector2<f64>,
    pub source: Source,
}

impl Candidate {
    /// Row pair, if the point comes from two system rows.
    #[inline]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.source {
            Source::Pair(i, j) => Some((i, j)),
            _ => None,
        }
    }
}

/// Crossing point of two equation lines, `None` if they are (near) parallel.
pub fn intersect(e1: &Equation, e2: &Equation) -> Option<Vector2<f64>> {
    let det = Matrix2::new(e1.a, e1.b, e2.a, e2.b).determinant();
    if det.abs() < EPS_DET {
        return None;
    }
    let x = (e1.c * e2.b - e2.c * e1.b) / det;
    let y = (e1.a * e2.c - e2.a * e1.c) / det;
    Some(Vector2::new(x, y))
}

/// Lazy walk over the pairs `(0,1), (0,2), …, (1,2), …` of a system.
///
/// Single pass; parallel pairs are skipped without being reported.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    equations: &'a [Equation],
    i: usize,
    j: usize,
}

/// Start enumerating all intersections of `system`.
pub fn candidates(system: &System) -> Candidates<'_> {
    Candidates {
        equations: system.equations(),
        i: 0,
        j: 1,
    }
}

impl Candidates<'_> {
    fn remaining_pairs(&self) -> usize {
        let n = self.equations.len();
        if self.i >= n {
            return 0;
        }
        let rest = n.saturating_sub(self.i + 1);
        n.saturating_sub(self.j) + rest * rest.saturating_sub(1) / 2
    }
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let n = self.equations.len();
        while self.i < n {
            if self.j >= n {
                self.i += 1;
                self.j = self.i + 1;
                continue;
            }
            let (i, j) = (self.i, self.j);
            self.j += 1;
            if let Some(point) = intersect(&self.equations[i], &self.equations[j]) {
                trace!(i, j, x = point.x, y = point.y, "intersection");
                return Some(Candidate {
                    point,
                    source: Source::Pair(i, j),
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_pairs()))
    }
}

impl FusedIterator for Candidates<'_> {}

/// Crossings of every constraint row with `x2 = 0` then `x1 = 0`, followed by the origin.
///
/// The graphical method works in the first quadrant, so these corners bound the
/// feasible region alongside the pairwise intersections. The objective row passes
/// through the origin and is skipped; the origin is emitted once at the end.
pub fn axis_candidates(system: &System) -> impl Iterator<Item = Candidate> + '_ {
    system
        .equations()
        .iter()
        .enumerate()
        .skip(1)
        .flat_map(|(row, eq)| {
            let on_x = intersect(eq, &X_AXIS).map(|point| Candidate {
                point,
                source: Source::XAxis(row),
            });
            let on_y = intersect(eq, &Y_AXIS).map(|point| Candidate {
                point,
                source: Source::YAxis(row),
            });
            on_x.into_iter().chain(on_y)
        })
        .chain(std::iter::once(Candidate {
            point: Vector2::zeros(),
            source: Source::Origin,
        }))
}
