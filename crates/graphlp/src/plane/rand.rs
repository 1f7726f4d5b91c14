//! Reproducible random systems for tests, benchmarks and the CLI.
//!
//! Every constraint is the line through `(p, 0)` and `(0, q)` with `p, q` drawn
//! from the intercept range, so all lines cross the positive quadrant.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::equation::{Equation, Relation, System};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SystemCfg {
    pub constraints: usize,
    /// Intercept range; the lower end is clamped above zero.
    pub intercept_min: f64,
    pub intercept_max: f64,
    /// Share of `>` constraints; the rest are `<`. Clamped to [0, 1].
    pub ge_fraction: f64,
}

impl Default for SystemCfg {
    fn default() -> Self {
        Self {
            constraints: 4,
            intercept_min: 1.0,
            intercept_max: 10.0,
            ge_fraction: 0.25,
        }
    }
}

/// Draw a system with a random objective and `cfg.constraints` constraints.
pub fn draw_system(cfg: &SystemCfg, seed: u64) -> System {
    let mut rng = StdRng::seed_from_u64(seed);
    let lo = cfg.intercept_min.max(1e-3);
    let hi = cfg.intercept_max.max(lo + 1e-3);
    let ge = cfg.ge_fraction.clamp(0.0, 1.0);
    let objective = Equation::objective(rng.gen_range(0.5..5.0), rng.gen_range(0.5..5.0));
    let constraints: Vec<Equation> = (0..cfg.constraints)
        .map(|_| {
            let p: f64 = rng.gen_range(lo..=hi);
            let q: f64 = rng.gen_range(lo..=hi);
            let op = if rng.gen_bool(ge) {
                Relation::Ge
            } else {
                Relation::Le
            };
            // q·x + p·y = p·q crosses the axes at x = p and y = q.
            Equation::new(q, p, op, p * q)
        })
        .collect();
    System::new(objective, constraints)
}
