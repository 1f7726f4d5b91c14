//! JSON shape of a solved frame (what `solve --out` writes).

use graphlp::plane::{Frame, Optimum, Segment, System, Tick, Viewport};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FrameDoc {
    pub viewport: ViewportDoc,
    pub objective: RowDoc,
    pub constraints: Vec<ConstraintDoc>,
    pub vertices: Vec<[f64; 2]>,
    pub optimum: Option<OptimumDoc>,
}

#[derive(Debug, Serialize)]
pub struct ViewportDoc {
    pub origin: [i32; 2],
    pub size_px: [i32; 2],
    pub max_units: [f64; 2],
    pub pixels_per_unit: [f64; 2],
    pub ticks_x: Vec<TickDoc>,
    pub ticks_y: Vec<TickDoc>,
}

#[derive(Debug, Serialize)]
pub struct TickDoc {
    pub pixel: i32,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct RowDoc {
    pub a: f64,
    pub b: f64,
    pub op: char,
    pub c: f64,
}

#[derive(Debug, Serialize)]
pub struct ConstraintDoc {
    pub row: RowDoc,
    /// Endpoints in units; absent when the line misses the viewport.
    pub segment: Option<[[f64; 2]; 2]>,
    pub segment_px: Option<[[i32; 2]; 2]>,
    pub shaded_px: Vec<[i32; 2]>,
}

#[derive(Debug, Serialize)]
pub struct OptimumDoc {
    pub max: [f64; 2],
    pub max_value: f64,
    pub min: [f64; 2],
    pub min_value: f64,
}

impl From<&Optimum> for OptimumDoc {
    fn from(opt: &Optimum) -> Self {
        Self {
            max: [opt.max.x, opt.max.y],
            max_value: opt.max_value,
            min: [opt.min.x, opt.min.y],
            min_value: opt.min_value,
        }
    }
}

fn ticks(ticks: Vec<Tick>) -> Vec<TickDoc> {
    ticks
        .into_iter()
        .map(|t| TickDoc {
            pixel: t.pixel,
            value: t.value,
        })
        .collect()
}

fn row(eq: &graphlp::Equation) -> RowDoc {
    RowDoc {
        a: eq.a,
        b: eq.b,
        op: eq.op.symbol(),
        c: eq.c,
    }
}

fn segment_units(seg: &Segment) -> [[f64; 2]; 2] {
    [[seg.start.x, seg.start.y], [seg.end.x, seg.end.y]]
}

pub fn frame_doc(system: &System, vp: &Viewport, frame: &Frame) -> FrameDoc {
    let constraints = system
        .constraints()
        .iter()
        .enumerate()
        .map(|(k, eq)| {
            let seg = frame.segments[k];
            ConstraintDoc {
                row: row(eq),
                segment: seg.as_ref().map(segment_units),
                segment_px: seg.map(|s| {
                    let (p, q) = s.to_pixels(vp);
                    [[p.x, p.y], [q.x, q.y]]
                }),
                shaded_px: frame.masks[k].iter().map(|px| [px.x, px.y]).collect(),
            }
        })
        .collect();
    FrameDoc {
        viewport: ViewportDoc {
            origin: [vp.origin_x(), vp.origin_y()],
            size_px: [vp.width_px(), vp.height_px()],
            max_units: [vp.max_units_x(), vp.max_units_y()],
            pixels_per_unit: [vp.pixels_per_unit_x(), vp.pixels_per_unit_y()],
            ticks_x: ticks(vp.ticks_x()),
            ticks_y: ticks(vp.ticks_y()),
        },
        objective: row(system.objective()),
        constraints,
        vertices: frame
            .vertices
            .iter()
            .map(|c| [c.point.x, c.point.y])
            .collect(),
        optimum: frame.optimum.as_ref().ok().map(OptimumDoc::from),
    }
}
