//! Benchmarks for variant constraint discovery.
//!
//! # Benchmarks
//!
//! - **`path_search`**: the four line generators (thermometer, palindrome,
//!   German whisper and capped line), each run over the whole grid.
//! - **`snowball`**: region-pair discovery over every seed pair.
//! - **`discover_all`**: [`discover`] with the default configuration.
//!
//! # Test Data
//!
//! Two fixed completed grids, so runs are comparable.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench discovery
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use numelace_core::Grid;
use numelace_variants::{
    CappedLine, DiscoveryConfig, GermanWhisper, Palindrome, Snowball, Thermometer, discover,
};

const GRIDS: [&str; 2] = [
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    "812753649943682175675491283154237896369845721287169534521974368438526917796318452",
];

fn grids() -> Vec<Grid> {
    GRIDS
        .into_iter()
        .map(|grid| Grid::from_str(grid).unwrap())
        .collect()
}

fn bench_path_search(c: &mut Criterion) {
    let generators: [(&str, fn(&Grid) -> usize); 4] = [
        ("thermometer", |grid| Thermometer::generate(grid).len()),
        ("palindrome", |grid| Palindrome::generate(grid).len()),
        ("german_whisper", |grid| GermanWhisper::generate(grid).len()),
        ("capped_line", |grid| CappedLine::generate(grid).len()),
    ];
    for (i, grid) in grids().iter().enumerate() {
        for (name, generate) in generators {
            c.bench_with_input(
                BenchmarkId::new(format!("path_search/{name}"), format!("grid_{i}")),
                grid,
                |b, grid| b.iter(|| generate(hint::black_box(grid))),
            );
        }
    }
}

fn bench_snowball(c: &mut Criterion) {
    for (i, grid) in grids().iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("snowball", format!("grid_{i}")),
            grid,
            |b, grid| b.iter(|| Snowball::generate(hint::black_box(grid))),
        );
    }
}

fn bench_discover_all(c: &mut Criterion) {
    let config = DiscoveryConfig::default();
    for (i, grid) in grids().iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("discover_all", format!("grid_{i}")),
            grid,
            |b, grid| b.iter(|| discover(hint::black_box(grid), &config)),
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_path_search,
        bench_snowball,
        bench_discover_all
);
criterion_main!(benches);
