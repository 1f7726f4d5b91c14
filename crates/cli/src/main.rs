use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graphlp::api::{solve_text, Solved};
use graphlp::plane::rand::{draw_system, SystemCfg};
use graphlp::plane::Ranking;
use graphlp::text::write_system;
use graphlp::FrameCfg;
use serde_json::json;
use std::fmt::{self, Write as _};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

#[derive(Parser)]
#[command(name = "graphlp-cli")]
#[command(about = "Graphical solver for two-variable linear programs")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rank {
    /// x + y of the vertex
    Sum,
    /// Objective row evaluated at the vertex
    Objective,
}

impl From<Rank> for Ranking {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Sum => Ranking::CoordinateSum,
            Rank::Objective => Ranking::Objective,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Solve one system and print segments, vertices and the optimum
    Solve {
        /// System file in text format, `-` for stdin
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 1000)]
        width: i32,
        #[arg(long, default_value_t = 800)]
        height: i32,
        /// Shading sample step in pixels
        #[arg(long, default_value_t = graphlp::plane::cfg::SHADE_STEP_PX)]
        step: u32,
        #[arg(long, value_enum, default_value_t = Rank::Sum)]
        rank: Rank,
        /// Write the frame as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit a random system in text format
    Random {
        #[arg(long, default_value_t = 4)]
        constraints: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            width,
            height,
            step,
            rank,
            out,
        } => {
            let cfg = FrameCfg {
                shade_step: step,
                ranking: rank.into(),
            };
            let summary = solve(&input, width, height, &cfg, out.as_deref())?;
            print!("{summary}");
            Ok(())
        }
        Action::Random {
            constraints,
            seed,
            out,
        } => random(constraints, seed, out.as_deref()),
        Action::Report => report(),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading system from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))
    }
}

fn solve(
    input: &str,
    width: i32,
    height: i32,
    cfg: &FrameCfg,
    out: Option<&Path>,
) -> Result<String> {
    let src = read_input(input)?;
    let solved = solve_text(&src, width, height, cfg).with_context(|| format!("parsing {input}"))?;
    tracing::info!(
        input,
        constraints = solved.system.num_constraints(),
        vertices = solved.frame.vertices.len(),
        feasible = solved.frame.optimum.is_ok(),
        "solve"
    );
    if let Some(out) = out {
        write_frame(out, &solved)?;
        let payload = provenance::Payload::new(json!({
            "width": width,
            "height": height,
            "shade_step": cfg.shade_step,
            "ranking": format!("{:?}", cfg.ranking),
        }))
        .with_input(input);
        let sidecar = provenance::write_sidecar(out, &payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "frame written");
    }
    Ok(summary(&solved)?)
}

fn write_frame(out: &Path, solved: &Solved) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let doc = export::frame_doc(&solved.system, &solved.viewport, &solved.frame);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn summary(solved: &Solved) -> Result<String, fmt::Error> {
    let vp = &solved.viewport;
    let frame = &solved.frame;
    let mut s = String::new();
    writeln!(
        s,
        "viewport: x in [0, {:.2}], y in [0, {:.2}], {:.2} x {:.2} units/division",
        vp.max_units_x(),
        vp.max_units_y(),
        vp.units_per_division_x(),
        vp.units_per_division_y()
    )?;
    writeln!(s, "objective: {}", solved.system.objective())?;
    for (k, eq) in solved.system.constraints().iter().enumerate() {
        match frame.segments[k] {
            Some(seg) => {
                let (p, q) = seg.to_pixels(vp);
                writeln!(
                    s,
                    "R{}: {eq}  segment ({:.2}, {:.2}) -> ({:.2}, {:.2})  px ({}, {}) -> ({}, {})",
                    k + 1,
                    seg.start.x,
                    seg.start.y,
                    seg.end.x,
                    seg.end.y,
                    p.x,
                    p.y,
                    q.x,
                    q.y
                )?;
            }
            None => writeln!(s, "R{}: {eq}  not visible", k + 1)?,
        }
    }
    writeln!(s, "feasible vertices: {}", frame.vertices.len())?;
    for v in &frame.vertices {
        writeln!(s, "  ({:.2}, {:.2})", v.point.x, v.point.y)?;
    }
    match &frame.optimum {
        Ok(opt) => {
            writeln!(s, "max: ({:.2}, {:.2}) = {:.2}", opt.max.x, opt.max.y, opt.max_value)?;
            writeln!(s, "min: ({:.2}, {:.2}) = {:.2}", opt.min.x, opt.min.y, opt.min_value)?;
        }
        Err(err) => writeln!(s, "{err}")?,
    }
    Ok(s)
}

fn random(constraints: usize, seed: u64, out: Option<&Path>) -> Result<()> {
    let cfg = SystemCfg {
        constraints,
        ..SystemCfg::default()
    };
    let text = write_system(&draw_system(&cfg, seed));
    tracing::info!(constraints, seed, "random");
    match out {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

fn report() -> Result<()> {
    let doc = provenance::document(&provenance::Payload::new(json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
