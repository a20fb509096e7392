// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use room_planner::config::{Glyphs, RenderConfig, SolverConfig};
use room_planner::split::DEFAULT_SPIRAL_SEARCH_LIMIT;
use room_planner::{BatchRunner, ProblemVariant};
use tracing_subscriber::EnvFilter;

const RULE_WIDTH: usize = 80;

/// Place the maximum number of desks in every room of a level directory.
#[derive(Parser, Debug)]
#[command(name = "roomplan")]
#[command(about = "Place fixed-length desks in rectangular rooms")]
struct Args {
    /// Problem variant to solve
    #[arg(value_enum)]
    level: ProblemVariant,

    /// Level directory holding the .in files (defaults to ./<level>)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Delay per animation frame in milliseconds; 0 disables animation
    #[arg(long, value_name = "MS", default_value_t = 0)]
    animate: u64,

    /// Print every solved room with emoji glyphs
    #[arg(long)]
    emoji: bool,

    /// Largest dimension for which spiral splits are searched exhaustively
    #[arg(long, default_value_t = DEFAULT_SPIRAL_SEARCH_LIMIT)]
    spiral_limit: i32,

    /// Solve and validate without writing .out files
    #[arg(long)]
    no_write: bool,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn enable_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn banner(level: ProblemVariant) {
    let rule = "-".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("{:^width$}", format!("Roomplaner {level}"), width = RULE_WIDTH);
    println!("{rule}");
}

fn main() -> Result<()> {
    let args = Args::parse();
    enable_tracing(args.verbose);

    let started = Instant::now();
    banner(args.level);

    let dir = args
        .dir
        .unwrap_or_else(|| PathBuf::from(args.level.to_string()));
    let solver = SolverConfig {
        spiral_search_limit: args.spiral_limit,
    };
    let render = RenderConfig {
        animation: Duration::from_millis(args.animate),
        show_grids: args.emoji,
        glyphs: Glyphs::default(),
        ..RenderConfig::default()
    };

    let mut runner =
        BatchRunner::new(args.level, &solver, render, io::stdout()).write_outputs(!args.no_write);
    let reports = runner
        .run_dir(&dir)
        .with_context(|| format!("solving {} in {}", args.level, dir.display()))?;

    let rooms: usize = reports.iter().map(|report| report.rooms).sum();
    let written = reports.iter().filter(|report| report.output.is_some()).count();
    println!(
        "solved {} rooms in {} files, wrote {} solutions",
        rooms,
        reports.len(),
        written
    );
    println!("elapsed time: {:.3?}", started.elapsed());
    Ok(())
}
