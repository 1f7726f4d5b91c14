//! Tolerances and fixed layout constants for the 2D solver.
//!
//! Policy
//! - Defaults are fixed constants so every frame is computed with the same
//!   numerics. Per-call tunables (shading step, ranking) live in `FrameCfg`.

/// Pair determinant below which two lines count as parallel or coincident.
pub const EPS_DET: f64 = 1e-6;
/// Slack for the tolerant membership test used when filtering vertices.
pub const EPS_FEAS: f64 = 1e-6;
/// Per-axis distance under which two clip points are the same point.
pub const EPS_DEDUP: f64 = 1e-6;
/// Padding factor applied to the largest intercept on each axis.
pub const MARGIN: f64 = 1.1;
/// Smallest axis extent (before margin) so scales never divide by zero.
pub const MIN_AXIS_UNITS: f64 = 1.0;
/// Grid divisions per axis for ticks and labels.
pub const GRID_DIVISIONS: u32 = 20;
/// Default spacing in pixels between shading samples.
pub const SHADE_STEP_PX: u32 = 10;
