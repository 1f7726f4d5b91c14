//! Print one frame for a small textbook problem.
//!
//! Usage:
//!   cargo run -p graphlp --example textbook
//!   cargo run -p graphlp --example textbook -- objective
//!
//! The optional argument switches the ranking from `x + y` to the objective row.

use graphlp::api::solve_text;
use graphlp::plane::{FrameCfg, Ranking};

const SRC: &str = "\
# maximize 3x1 + 2x2
3 2
1 1 < 4
1 0 < 3
0 1 < 3
";

fn main() {
    let ranking = match std::env::args().nth(1).as_deref() {
        Some("objective") => Ranking::Objective,
        _ => Ranking::CoordinateSum,
    };
    let cfg = FrameCfg {
        ranking,
        ..FrameCfg::default()
    };
    let solved = solve_text(SRC, 1000, 800, &cfg).expect("built-in system parses");
    let vp = solved.viewport;
    println!(
        "viewport: {:.2} x {:.2} units, {:.2} x {:.2} px/unit",
        vp.max_units_x(),
        vp.max_units_y(),
        vp.pixels_per_unit_x(),
        vp.pixels_per_unit_y()
    );
    for (k, eq) in solved.system.constraints().iter().enumerate() {
        let seg = solved.frame.segments[k];
        let shaded = solved.frame.masks[k].len();
        match seg {
            Some(s) => println!(
                "{eq}: ({:.2}, {:.2}) -> ({:.2}, {:.2}), {shaded} shaded samples",
                s.start.x, s.start.y, s.end.x, s.end.y
            ),
            None => println!("{eq}: not drawable, {shaded} shaded samples"),
        }
    }
    match solved.frame.optimum {
        Ok(opt) => {
            println!("max ({:.2}, {:.2}) = {:.2}", opt.max.x, opt.max.y, opt.max_value);
            println!("min ({:.2}, {:.2}) = {:.2}", opt.min.x, opt.min.y, opt.min_value);
        }
        Err(e) => println!("{e}"),
    }
}
