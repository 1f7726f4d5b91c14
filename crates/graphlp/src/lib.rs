//! Graphical solver for two-variable linear programs.
//!
//! A `System` (objective row plus constraints) goes in; drawable geometry comes
//! out: viewport scale, clipped constraint segments, shading masks, feasible
//! vertices and the extreme vertices. Rendering stays with the caller.
//!
//! Layout
//! - `plane`: the geometry core (see its module docs).
//! - `text`: line-oriented system format used by the CLI.
//! - `api`: curated re-exports and one-call helpers.

pub mod api;
pub mod plane;
pub mod text;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use plane::{Equation, Frame, FrameCfg, Relation, System, Viewport};

/// Problem-space point in units.
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{draw_system, SystemCfg};
    pub use crate::plane::{
        axis_candidates, candidates, segment_for, select, shade_mask, Candidate, Equation,
        Frame, FrameCfg, NoFeasibleRegion, Optimum, Pixel, PixelRect, Ranking, Relation,
        Segment, System, Viewport,
    };
    pub use crate::text::{parse_system, ParseError};
    pub use nalgebra::Vector2 as Vec2;
}
