//! Graphical method for two-variable linear programs.
//!
//! Purpose
//! - Turn a `System` (row 0 objective, rows 1.. constraints) into drawable geometry:
//!   a padded `Viewport`, one clipped `Segment` and shading mask per constraint,
//!   the feasible intersection vertices, and the extreme vertices.
//! - Stay pure: no component mutates another's state and no display surface is
//!   touched. Callers recompute a `Frame` whenever they redraw.
//!
//! Numerics
//! - Tolerances live in `cfg`. Shading uses the exact predicate
//!   (`Equation::is_infeasible`); vertex filtering uses the tolerant one
//!   (`Equation::satisfies_eps`).

pub mod cfg;
pub mod rand;

mod clip;
mod equation;
mod feasibility;
mod frame;
mod optimum;
mod vertices;
mod viewport;

pub use clip::{segment_for, Segment};
pub use equation::{Equation, EquationError, Relation, System};
pub use feasibility::shade_mask;
pub use frame::{Frame, FrameCfg};
pub use optimum::{
    feasible_vertices, first_violated, is_feasible_vertex, rank, select, select_by,
    NoFeasibleRegion, Optimum, Ranking,
};
pub use vertices::{axis_candidates, candidates, intersect, Candidate, Candidates, Source};
pub use viewport::{Pixel, PixelRect, Tick, Viewport};

#[cfg(test)]
mod tests;
