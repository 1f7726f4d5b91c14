//! Curated surface for hosts that only want "text in, frame out".
//!
//! Prefer these helpers over wiring `plane` pieces by hand when the host owns a
//! plain window of a given size.

pub use crate::plane::{
    candidates, segment_for, select, shade_mask, Frame, FrameCfg, NoFeasibleRegion, Optimum,
    PixelRect, Ranking, Segment, System, Viewport,
};
pub use crate::text::{parse_system, ParseError};

/// Everything derived from one system for one window size.
#[derive(Clone, Debug)]
pub struct Solved {
    pub system: System,
    pub viewport: Viewport,
    pub frame: Frame,
}

/// Lay out a viewport for a `width × height` window (label gutters removed).
pub fn layout(system: &System, width: i32, height: i32) -> Viewport {
    Viewport::build(system, PixelRect::from_window(width, height))
}

/// Build viewport and frame for an already assembled system.
pub fn solve_system(system: System, width: i32, height: i32, cfg: &FrameCfg) -> Solved {
    let viewport = layout(&system, width, height);
    let frame = Frame::compute(&system, &viewport, cfg);
    Solved {
        system,
        viewport,
        frame,
    }
}

/// Parse the text format, then `solve_system`.
pub fn solve_text(
    src: &str,
    width: i32,
    height: i32,
    cfg: &FrameCfg,
) -> Result<Solved, ParseError> {
    let system = parse_system(src)?;
    Ok(solve_system(system, width, height, cfg))
}
