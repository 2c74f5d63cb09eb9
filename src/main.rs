//! # u-tour CLI
//!
//! Solves a closed tour over a point set read from a JSON file, generated
//! at random, or the built-in post office demo.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::error;

use u_tour::format::format_tour;
use u_tour::input::{demo_points, load_points, random_points};
use u_tour::models::PointSet;
use u_tour::solver::{compare, solve, Method, SolverConfig};

/// Command-line interface for u-tour
#[derive(Parser)]
#[command(name = "u-tour")]
#[command(about = "Shortest closed tour through a small set of labeled points")]
#[command(long_about = "Finds a closed tour that starts and ends at the first point:
  u-tour                              # Solve the built-in demo instance
  u-tour --input points.json          # JSON array of {x, y, label}
  u-tour --random 9 --seed 3          # Random instance on a 100x100 grid
  u-tour --method both                # Compare exhaustive and reduction")]
#[command(version)]
struct Cli {
    /// JSON file with an array of {x, y, label} objects; the first is the depot
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many random points instead of reading a file
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Grid size for --random
    #[arg(long, default_value_t = 100)]
    extent: u32,

    /// Tour-finding method
    #[arg(short, long, value_enum, default_value_t = MethodArg::Exhaustive)]
    method: MethodArg,

    /// Report a failed reduction instead of falling back to the exhaustive search
    #[arg(long)]
    no_fallback: bool,

    /// Largest instance the exhaustive search accepts
    #[arg(long, default_value_t = SolverConfig::default().max_exhaustive_points)]
    max_exhaustive: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Exhaustive,
    Reduction,
    Both,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        let method = match self.method {
            MethodArg::Reduction => Method::Reduction,
            MethodArg::Exhaustive | MethodArg::Both => Method::Exhaustive,
        };
        SolverConfig {
            method,
            fallback_to_exhaustive: !self.no_fallback,
            max_exhaustive_points: self.max_exhaustive,
        }
    }

    fn points(&self) -> anyhow::Result<PointSet> {
        if let Some(path) = &self.input {
            return load_points(path)
                .with_context(|| format!("failed to load points from {}", path.display()));
        }
        if let Some(n) = self.random {
            return random_points(n, self.extent, self.seed)
                .context("failed to generate random points");
        }
        Ok(demo_points())
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let points = cli.points()?;
    let config = cli.config();

    if cli.method == MethodArg::Both {
        let cmp = compare(&points, &config)?;
        println!("exhaustive: {}", format_tour(&cmp.exact, &points));
        match (&cmp.heuristic, cmp.gap()) {
            (Some(tour), Some(gap)) => {
                println!("reduction:  {}", format_tour(tour, &points));
                println!("gap: {:.2}%", gap * 100.0);
            }
            _ => println!("reduction:  edges do not form a single tour"),
        }
        return Ok(());
    }

    let solution = solve(&points, &config)?;
    if solution.fell_back {
        log::warn!("reduction did not form a single tour; showing the exhaustive result");
    }
    println!("{}", format_tour(&solution.tour, &points));
    Ok(())
}
