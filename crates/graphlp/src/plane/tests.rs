use super::rand::{draw_system, SystemCfg};
use super::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use nalgebra::Vector2;
use proptest::prelude::*;

fn textbook() -> System {
    System::from_rows(&[
        (1.0, 1.0, '=', 0.0),
        (1.0, 0.0, '<', 4.0),
        (0.0, 1.0, '<', 4.0),
        (1.0, 1.0, '>', 0.0),
    ])
    .unwrap()
}

fn near(p: Vector2<f64>, x: f64, y: f64) -> bool {
    (p - Vector2::new(x, y)).norm() < 1e-9
}

#[test]
fn textbook_optimum() {
    let sys = textbook();
    let vp = Viewport::build(&sys, PixelRect::from_window(1000, 800));
    let pool = candidates(&sys).chain(axis_candidates(&sys));
    let feasible = feasible_vertices(&sys, &vp, pool);
    for (x, y) in [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 4.0)] {
        assert!(
            feasible.iter().any(|c| near(c.point, x, y)),
            "missing vertex ({x}, {y})"
        );
    }
    let opt = select(&sys, &vp, candidates(&sys)).unwrap();
    assert!(near(opt.max, 4.0, 4.0));
    assert!(near(opt.min, 0.0, 0.0));
    assert!((opt.max_value - 8.0).abs() < 1e-9);
    assert!(opt.min_value.abs() < 1e-9);
}

#[test]
fn contradictory_bounds_have_no_feasible_region() {
    let sys = System::from_rows(&[
        (1.0, 1.0, '=', 0.0),
        (1.0, 0.0, '>', 10.0),
        (1.0, 0.0, '<', 0.0),
    ])
    .unwrap();
    let vp = Viewport::build(&sys, PixelRect::from_window(1000, 800));
    assert_eq!(select(&sys, &vp, candidates(&sys)), Err(NoFeasibleRegion));
    let frame = Frame::compute(&sys, &vp, &FrameCfg::default());
    assert!(frame.vertices.is_empty());
    assert_eq!(frame.optimum, Err(NoFeasibleRegion));
    // x >= 10 sits inside the 11-unit box, so it is still drawn.
    assert!(frame.segments[0].is_some());
}

#[test]
fn vertices_outside_viewport_are_dropped() {
    // 20x - y >= 7 has a negative y-intercept, so it does not stretch max_y.
    let sys = System::from_rows(&[
        (2.0, 1.0, '=', 0.0),
        (1.0, 1.0, '>', 2.0),
        (1.0, 0.0, '<', 3.0),
        (20.0, -1.0, '>', 7.0),
    ])
    .unwrap();
    let vp = Viewport::build(&sys, PixelRect::new(0, 0, 400, 400));
    assert!((vp.max_units_y() - 2.2).abs() < 1e-9);
    let far = candidates(&sys)
        .find(|c| c.pair() == Some((2, 3)))
        .unwrap();
    assert!(near(far.point, 3.0, 53.0));
    assert_eq!(first_violated(&sys, far.point), None);
    assert!(!is_feasible_vertex(&sys, &vp, far.point));

    let frame = Frame::compute(&sys, &vp, &FrameCfg::default());
    assert!(frame.vertices.iter().all(|c| vp.contains(c.point)));
    assert!(!frame.vertices.iter().any(|c| near(c.point, 3.0, 53.0)));
}

#[test]
fn frame_lines_up_with_constraints() {
    let sys = textbook();
    let vp = Viewport::build(&sys, PixelRect::from_window(1000, 800));
    let frame = Frame::compute(&sys, &vp, &FrameCfg::default());
    assert_eq!(frame.segments.len(), 3);
    assert_eq!(frame.masks.len(), 3);
    // x + y >= 0 touches the box only at the origin.
    assert!(frame.segments[2].is_none());
    assert!(frame.masks[2].is_empty());
    let px = frame.pixel_segments(&vp);
    let (a, b) = px[0].unwrap();
    assert_eq!(a.x, b.x, "x <= 4 is vertical on screen");
    assert!(!frame.masks[0].is_empty());
    let opt = frame.optimum.unwrap();
    assert!(frame.vertices.iter().any(|c| c.point == opt.max));
    assert!(near(opt.min, 0.0, 0.0));
}

#[test]
fn objective_ranking_can_be_selected() {
    let sys = System::from_rows(&[
        (3.0, 2.0, '=', 0.0),
        (1.0, 1.0, '<', 4.0),
        (1.0, 0.0, '<', 3.0),
        (0.0, 1.0, '<', 3.0),
        (1.0, 0.0, '>', 0.0),
        (0.0, 1.0, '>', 0.0),
    ])
    .unwrap();
    let vp = Viewport::build(&sys, PixelRect::from_window(1000, 800));
    let cfg = FrameCfg {
        ranking: Ranking::Objective,
        ..FrameCfg::default()
    };
    let opt = Frame::compute(&sys, &vp, &cfg).optimum.unwrap();
    assert!(near(opt.max, 3.0, 1.0));
    assert!((opt.max_value - 11.0).abs() < 1e-9);
    // By coordinate sum, (1,3) and (3,1) tie at 4; (1,3) comes first in pair order.
    let by_sum = select(&sys, &vp, candidates(&sys)).unwrap();
    assert!((by_sum.max_value - 4.0).abs() < 1e-9);
}

#[test]
fn degenerate_equation_never_draws() {
    let degenerate = Equation::new(0.0, 0.0, Relation::Eq, 5.0);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let sys = draw_system(&SystemCfg::default(), rng.gen());
        let vp = Viewport::build(&sys, PixelRect::new(0, 0, rng.gen_range(1..2000), 600));
        assert!(segment_for(&degenerate, &vp).is_none());
    }
}

#[test]
fn random_systems_keep_vertices_feasible() {
    let cfg = SystemCfg {
        constraints: 8,
        ..SystemCfg::default()
    };
    for seed in 0..25 {
        let sys = draw_system(&cfg, seed);
        let vp = Viewport::build(&sys, PixelRect::from_window(800, 600));
        let frame = Frame::compute(&sys, &vp, &FrameCfg::default());
        for c in &frame.vertices {
            assert!(is_feasible_vertex(&sys, &vp, c.point));
        }
        match frame.optimum {
            Ok(opt) => assert!(opt.max_value >= opt.min_value),
            Err(NoFeasibleRegion) => assert!(frame.vertices.is_empty()),
        }
    }
}

fn coef() -> impl Strategy<Value = f64> {
    -20.0..20.0f64
}

fn relation() -> impl Strategy<Value = Relation> {
    prop_oneof![Just(Relation::Le), Just(Relation::Ge), Just(Relation::Eq)]
}

fn equation() -> impl Strategy<Value = Equation> {
    (coef(), coef(), relation(), coef()).prop_map(|(a, b, op, c)| Equation::new(a, b, op, c))
}

fn system() -> impl Strategy<Value = System> {
    (equation(), prop::collection::vec(equation(), 0..8))
        .prop_map(|(obj, cons)| System::new(obj, cons))
}

proptest! {
    #[test]
    fn viewport_never_collapses(
        cons in prop::collection::vec((-20.0..=0.0f64, -20.0..=0.0f64), 0..6),
        signs in prop::collection::vec(any::<bool>(), 6),
    ) {
        // Positive coefficients with non-positive rhs: every intercept is <= 0.
        let eqs = cons.iter().zip(&signs).map(|(&(c, k), &flip)| {
            let a = if flip { 1.0 } else { 0.0 };
            Equation::new(a, 1.0 + k.abs(), Relation::Le, c)
        });
        let sys = System::new(Equation::objective(1.0, 1.0), eqs);
        let vp = Viewport::build(&sys, PixelRect::new(0, 0, 640, 480));
        prop_assert!(vp.max_units_x() >= 1.0);
        prop_assert!(vp.max_units_y() >= 1.0);
        prop_assert!((vp.max_units_x() - 1.1).abs() < 1e-12);
        prop_assert!(vp.pixels_per_unit_x().is_finite());
    }

    #[test]
    fn margin_is_ten_percent_of_largest_intercept(sys in system()) {
        let vp = Viewport::build(&sys, PixelRect::new(0, 0, 640, 480));
        let largest_x = sys
            .constraints()
            .iter()
            .map(|e| e.intercepts().0)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max)
            .max(1.0);
        prop_assert!((vp.max_units_x() - 1.1 * largest_x).abs() <= 1e-9 * largest_x);
    }

    #[test]
    fn segment_is_deterministic_and_inside(sys in system(), eq in equation()) {
        let vp = Viewport::build(&sys, PixelRect::new(0, 0, 640, 480));
        let first = segment_for(&eq, &vp);
        prop_assert_eq!(first, segment_for(&eq, &vp));
        if let Some(seg) = first {
            prop_assert!(vp.contains(seg.start) && vp.contains(seg.end));
            prop_assert!(
                seg.start.x < seg.end.x || (seg.start.x == seg.end.x && seg.start.y <= seg.end.y)
            );
        }
    }

    #[test]
    fn boundary_points_pass_tolerant_test(a in coef(), b in coef(), x in coef(), y in coef()) {
        let p = Vector2::new(x, y);
        let c = a * x + b * y;
        for op in [Relation::Le, Relation::Ge, Relation::Eq] {
            prop_assert!(Equation::new(a, b, op, c).satisfies(p));
        }
    }

    #[test]
    fn vertex_count_is_bounded(sys in system()) {
        let n = sys.equations().len();
        prop_assert!(candidates(&sys).count() <= n * (n - 1) / 2);
    }

    #[test]
    fn generic_lines_give_every_pair(angles in prop::collection::btree_set(0u32..180, 1..8)) {
        // Distinct directions at least one degree apart are never parallel.
        let eqs: Vec<Equation> = angles
            .iter()
            .map(|&deg| {
                let t = f64::from(deg).to_radians();
                Equation::new(t.cos(), t.sin(), Relation::Le, 1.0)
            })
            .collect();
        let n = eqs.len();
        let sys = System::from_equations(eqs).unwrap();
        prop_assert_eq!(candidates(&sys).count(), n * (n - 1) / 2);
    }
}
