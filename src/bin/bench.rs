//! Pure Rust core benchmarks for the wellfield engine.
//!
//! Uses std::time::Instant for timing, a deterministic LCG PRNG for well
//! generation, and std::hint::black_box to prevent dead-code elimination.

use std::hint::black_box;
use std::time::{Duration, Instant};

use wellfield::calibration::calibrate;
use wellfield::evaluate::evaluate;
use wellfield::interpolation::{estimate, SamplePoint, DEFAULT_POWER};
use wellfield::well::{Well, WellKind};

const REPEATS: usize = 7;

/// Generate a deterministic well field: three pumping wells per observation
/// well, scattered over a 3 km square.
fn make_wells(n: usize, seed: u64) -> Vec<Well> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..n)
        .map(|i| {
            let kind = if i % 4 == 3 {
                WellKind::Observation
            } else {
                WellKind::Pumping
            };
            let mut w = Well::new(i as u32, format!("W-{i}"), kind);
            w.easting = next_f64() * 3_000.0;
            w.northing = next_f64() * 3_000.0;
            w.depth = 40.0 + next_f64() * 40.0;
            w.ground_elevation = 90.0 + next_f64() * 20.0;
            w.bedrock_elevation = 20.0 + next_f64() * 10.0;
            w.conductivity = 1.0 + next_f64() * 49.0;
            w.flow = if kind == WellKind::Pumping {
                2.0 + next_f64() * 18.0
            } else {
                0.0
            };
            w.static_level = 3.0 + next_f64() * 7.0;
            // Every fifth pumping well gets an unknown dynamic level so the
            // implicit solver is part of the measured work.
            w.dynamic_level = if kind == WellKind::Pumping && i % 5 == 0 {
                0.0
            } else {
                w.static_level + 1.0 + next_f64() * 7.0
            };
            w
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_evaluate(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let wells = make_wells(n, 42);

        // Warmup
        black_box(evaluate(&wells));

        let dur = median_time(|| {
            black_box(evaluate(&wells));
        });
        results.push(("evaluate", n, dur));
    }
    results
}

fn bench_calibrate(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let wells = make_wells(n, 42);

        // Warmup
        black_box(calibrate(&wells));

        let dur = median_time(|| {
            black_box(calibrate(&wells));
        });
        results.push(("calibrate", n, dur));
    }
    results
}

fn bench_idw_grid(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let wells = make_wells(n, 42);
        let eval = evaluate(&wells);
        let points: Vec<SamplePoint> = wells
            .iter()
            .zip(&eval.levels)
            .map(|(w, level)| SamplePoint {
                x: w.easting,
                y: w.northing,
                value: level.max_dynamic_level_elevation,
            })
            .collect();

        // A 40×40 heatmap grid, the visualization layer's typical query load.
        let query = || {
            for gy in 0..40 {
                for gx in 0..40 {
                    black_box(estimate(
                        gx as f64 * 75.0,
                        gy as f64 * 75.0,
                        &points,
                        DEFAULT_POWER,
                    ));
                }
            }
        };

        query();
        let dur = median_time(query);
        results.push(("idw 40x40", n, dur));
    }
    results
}

fn main() {
    println!("wellfield Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Stage", "Wells", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_evaluate(&[10, 50, 200]));
    all_results.extend(bench_calibrate(&[10, 50, 200]));
    all_results.extend(bench_idw_grid(&[10, 50, 200]));

    for (stage, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>6}      {:>8.2}", stage, n, ms);
    }

    println!("============================================================");
}
