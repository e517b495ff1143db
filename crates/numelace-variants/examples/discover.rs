//! Example listing the variant constraints a completed grid satisfies.
//!
//! This example shows how to:
//! - Parse completed grids from the command line or standard input
//! - Restrict discovery to some kinds and bound it with a time limit
//! - Print per-kind counts and a few instances of each kind
//!
//! # Usage
//!
//! ```sh
//! cargo run --example discover -- 534678912672195348198342567859761423426853791713924856961537284287419635345286179
//! ```
//!
//! Only look for some kinds (slug or display name, case-insensitive):
//!
//! ```sh
//! cargo run --example discover -- --kind thermometer --kind "German whisper" <GRID>
//! ```
//!
//! Read one grid per line from standard input and stop searching after two
//! seconds per grid:
//!
//! ```sh
//! cat grids.txt | cargo run --example discover -- --time-limit 2
//! ```
//!
//! Set `RUST_LOG=debug` to see per-kind timings.

use std::{
    io::{self, BufRead as _},
    process,
    time::Duration,
};

use clap::Parser;
use numelace_core::Grid;
use numelace_variants::{Discovery, DiscoveryConfig, VariantKind, discover};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Completed grids, 81 digits each (whitespace ignored). Read from
    /// standard input, one per line, when omitted.
    #[arg(value_name = "GRID")]
    grids: Vec<String>,

    /// Variant kind to look for. Repeatable; all kinds when omitted.
    #[arg(short, long = "kind", value_name = "KIND")]
    kinds: Vec<VariantKind>,

    /// Stop starting new searches after this many seconds per grid.
    #[arg(long, value_name = "SECONDS")]
    time_limit: Option<f64>,

    /// Number of instances to print per kind.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    show: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let inputs = if args.grids.is_empty() {
        read_stdin()
    } else {
        args.grids.clone()
    };
    let grids = inputs
        .iter()
        .map(|input| {
            input.parse::<Grid>().unwrap_or_else(|err| {
                eprintln!("Invalid grid {input:?}: {err}");
                process::exit(2);
            })
        })
        .collect::<Vec<_>>();
    if grids.is_empty() {
        eprintln!("No grid given.");
        process::exit(2);
    }

    let mut config = DiscoveryConfig::default();
    if !args.kinds.is_empty() {
        config = config.with_kinds(args.kinds.iter().copied());
    }
    if let Some(seconds) = args.time_limit {
        let Ok(limit) = Duration::try_from_secs_f64(seconds) else {
            eprintln!("--time-limit must be a non-negative number of seconds.");
            process::exit(1);
        };
        config = config.with_time_limit(limit);
    }

    let results = grids
        .par_iter()
        .map(|grid| discover(grid, &config))
        .collect::<Vec<_>>();

    for (grid, discovery) in grids.iter().zip(&results) {
        print_discovery(grid, discovery, &config, args.show);
    }
}

fn read_stdin() -> Vec<String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn print_discovery(grid: &Grid, discovery: &Discovery, config: &DiscoveryConfig, show: usize) {
    println!("Grid:");
    for row in grid.to_string().lines() {
        println!("  {row}");
    }
    if !grid.is_sudoku_solution() {
        println!("  (not a valid Sudoku solution)");
    }
    println!();

    println!("Instances:");
    for &kind in config.kinds() {
        let marker = if discovery.truncated.contains(&kind) {
            " (truncated)"
        } else {
            ""
        };
        println!("  {kind}: {}{marker}", discovery.count(kind));
        for constraint in discovery.by_kind(kind).take(show) {
            println!("    {constraint}");
        }
    }
    println!("  total: {}", discovery.constraints.len());
    println!();
}
