//! Performance profiling example for insertion and reset
//!
//! Repeatedly fills a tree with the same random points and resets it, so the pool
//! pages are allocated once and reused by every later run.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf_insert
//! ```

use prquad::prelude::*;
use std::time::{Duration, Instant};

fn main() -> Result<(), QuadTreeError> {
    println!("Quadtree Insert Performance Benchmark");
    println!("=====================================\n");

    println!("Generating 1,000,000 random points...");
    let mut points = Vec::with_capacity(1_000_000);
    let mut rng = 12345u64; // Simple LCG random number generator
    for _ in 0..1_000_000 {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let x = rng;
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let y = rng;
        points.push(Coordinate::new(x, y));
    }

    println!("Running insert phase 20 times for profiling...\n");

    let num_runs = 20;
    let mut tree = QuadTree::<u64>::new(32_768)?;
    let mut total_insert_time = Duration::ZERO;
    let mut total_reset_time = Duration::ZERO;
    let overall_start = Instant::now();

    for run in 1..=num_runs {
        let insert_start = Instant::now();
        for p in &points {
            let _ = tree.insert(*p)?;
        }
        let insert_duration = insert_start.elapsed();
        total_insert_time += insert_duration;

        let reset_start = Instant::now();
        tree.reset();
        total_reset_time += reset_start.elapsed();

        if run % 5 == 0 {
            println!(
                "Run {:>2}/{}: insert={:.2}ms, pages={}",
                run,
                num_runs,
                insert_duration.as_secs_f64() * 1000.0,
                tree.page_count()
            );
        }
    }

    let overall = overall_start.elapsed();
    println!("\nResults:");
    println!(
        "  Average insert time: {:.2}ms",
        total_insert_time.as_secs_f64() * 1000.0 / f64::from(num_runs)
    );
    println!(
        "  Average reset time:  {:.3}us",
        total_reset_time.as_secs_f64() * 1_000_000.0 / f64::from(num_runs)
    );
    println!("  Total time:          {:.2}s", overall.as_secs_f64());
    Ok(())
}
