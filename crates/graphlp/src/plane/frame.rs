//! One frame of the solver: everything a renderer needs for a system.
//!
//! Recomputed from scratch every time; nothing is cached between frames.

use super::cfg::SHADE_STEP_PX;
use super::clip::{segment_for, Segment};
use super::equation::System;
use super::feasibility::shade_mask;
use super::optimum::{feasible_vertices, rank, NoFeasibleRegion, Optimum, Ranking};
use super::vertices::{axis_candidates, candidates, Candidate};
use super::viewport::{Pixel, Viewport};

/// Per-frame tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCfg {
    /// Pixel spacing of shading samples.
    pub shade_step: u32,
    pub ranking: Ranking,
}

impl Default for FrameCfg {
    fn default() -> Self {
        Self {
            shade_step: SHADE_STEP_PX,
            ranking: Ranking::default(),
        }
    }
}

/// Drawable geometry for one system and viewport.
///
/// `segments[k]` and `masks[k]` belong to constraint `k + 1` of the system.
#[derive(Clone, Debug)]
pub struct Frame {
    pub segments: Vec<Option<Segment>>,
    pub masks: Vec<Vec<Pixel>>,
    /// Feasible vertices: pairwise intersections first, then axis crossings.
    pub vertices: Vec<Candidate>,
    pub optimum: Result<Optimum, NoFeasibleRegion>,
}

impl Frame {
    pub fn compute(system: &System, vp: &Viewport, cfg: &FrameCfg) -> Self {
        let constraints = system.constraints();
        let segments = constraints.iter().map(|eq| segment_for(eq, vp)).collect();
        let masks = constraints
            .iter()
            .map(|eq| shade_mask(eq, vp, cfg.shade_step))
            .collect();
        let pool = candidates(system).chain(axis_candidates(system));
        let vertices = feasible_vertices(system, vp, pool);
        let optimum = rank(system.objective(), vertices.iter().copied(), cfg.ranking);
        Self {
            segments,
            masks,
            vertices,
            optimum,
        }
    }

    /// Segments mapped to pixels, `None` where a constraint is not drawable.
    pub fn pixel_segments(&self, vp: &Viewport) -> Vec<Option<(Pixel, Pixel)>> {
        self.segments
            .iter()
            .map(|seg| seg.map(|s| s.to_pixels(vp)))
            .collect()
    }
}
