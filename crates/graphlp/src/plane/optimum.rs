//! Extreme feasible vertices under a scalar ranking.

use std::fmt;

use nalgebra::Vector2;
use tracing::debug;

use super::cfg::EPS_FEAS;
use super::equation::{Equation, System};
use super::vertices::{axis_candidates, Candidate};
use super::viewport::Viewport;

/// Scalar used to order feasible vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ranking {
    /// `x + y`, independent of the objective coefficients.
    #[default]
    CoordinateSum,
    /// `a₀·x + b₀·y` with the objective row's coefficients.
    Objective,
}

impl Ranking {
    #[inline]
    pub fn score(self, objective: &Equation, p: Vector2<f64>) -> f64 {
        match self {
            Ranking::CoordinateSum => p.x + p.y,
            Ranking::Objective => objective.lhs(p),
        }
    }
}

/// Best and worst feasible vertex with their scores.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Optimum {
    pub max: Vector2<f64>,
    pub max_value: f64,
    pub min: Vector2<f64>,
    pub min_value: f64,
}

impl Optimum {
    fn at(p: Vector2<f64>, score: f64) -> Self {
        Self {
            max: p,
            max_value: score,
            min: p,
            min_value: score,
        }
    }

    // Strict comparisons keep the first point on ties.
    fn consider(mut self, p: Vector2<f64>, score: f64) -> Self {
        if score > self.max_value {
            self.max = p;
            self.max_value = score;
        }
        if score < self.min_value {
            self.min = p;
            self.min_value = score;
        }
        self
    }
}

/// No candidate vertex survived the feasibility filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoFeasibleRegion;

impl fmt::Display for NoFeasibleRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no feasible vertex inside the viewport")
    }
}

impl std::error::Error for NoFeasibleRegion {}

/// Index (into the system) of the first constraint `p` violates, tolerant test.
pub fn first_violated(system: &System, p: Vector2<f64>) -> Option<usize> {
    system
        .constraints()
        .iter()
        .position(|eq| !eq.satisfies_eps(p, EPS_FEAS))
        .map(|k| k + 1)
}

/// Feasible for every constraint (objective excluded) and inside the unit box.
#[inline]
pub fn is_feasible_vertex(system: &System, vp: &Viewport, p: Vector2<f64>) -> bool {
    first_violated(system, p).is_none() && vp.contains(p)
}

/// Keep the candidates that pass `is_feasible_vertex`, in input order.
pub fn feasible_vertices<I>(system: &System, vp: &Viewport, candidates: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates
        .into_iter()
        .filter(|cand| {
            let p = cand.point;
            if let Some(k) = first_violated(system, p) {
                debug!(source = ?cand.source, x = p.x, y = p.y, constraint = k, "vertex violates constraint");
                return false;
            }
            if !vp.contains(p) {
                debug!(source = ?cand.source, x = p.x, y = p.y, "vertex outside viewport");
                return false;
            }
            true
        })
        .collect()
}

/// Pick `(argmax, argmin)` of `ranking` over already-feasible vertices.
pub fn rank<I>(objective: &Equation, feasible: I, ranking: Ranking) -> Result<Optimum, NoFeasibleRegion>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut best: Option<Optimum> = None;
    for cand in feasible {
        let score = ranking.score(objective, cand.point);
        best = Some(match best {
            None => Optimum::at(cand.point, score),
            Some(current) => current.consider(cand.point, score),
        });
    }
    match best {
        Some(opt) => {
            debug!(
                max_x = opt.max.x,
                max_y = opt.max.y,
                min_x = opt.min.x,
                min_y = opt.min.y,
                ?ranking,
                "optimum"
            );
            Ok(opt)
        }
        None => {
            debug!("no feasible vertices");
            Err(NoFeasibleRegion)
        }
    }
}

/// Filter `candidates` plus the axis crossings and rank the survivors by `x + y`.
pub fn select<I>(system: &System, vp: &Viewport, candidates: I) -> Result<Optimum, NoFeasibleRegion>
where
    I: IntoIterator<Item = Candidate>,
{
    let pool = candidates.into_iter().chain(axis_candidates(system));
    select_by(system, vp, pool, Ranking::CoordinateSum)
}

/// Filter and rank exactly the given pool; no axis crossings are added.
pub fn select_by<I>(
    system: &System,
    vp: &Viewport,
    candidates: I,
    ranking: Ranking,
) -> Result<Optimum, NoFeasibleRegion>
where
    I: IntoIterator<Item = Candidate>,
{
    let feasible = feasible_vertices(system, vp, candidates);
    rank(system.objective(), feasible, ranking)
}
