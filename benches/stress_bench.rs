//! Stress driver: for every round `i`, reset the tree, insert `i` random points and
//! verify every structural invariant.
//!
//! The number of rounds defaults to 8192 and can be lowered with `STRESS_ROUNDS`.
//! Pool growth is logged at debug level:
//!
//! ```bash
//! RUST_LOG=prquad=debug cargo bench --bench stress_bench
//! ```

use prquad::prelude::*;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const PAGE_SIZE: usize = 32_768;
const DEFAULT_ROUNDS: usize = 8192;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Quadtree Stress Benchmark");
    println!("=========================\n");

    let rounds = std::env::var("STRESS_ROUNDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);

    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
    let mut tree = QuadTree::<u64>::new(PAGE_SIZE).expect("page size is non-zero");

    let mut insert_time = Duration::ZERO;
    let mut check_time = Duration::ZERO;
    let mut inserted = 0_usize;
    let overall_start = Instant::now();

    for i in 1..rounds {
        tree.reset();

        let start = Instant::now();
        for _ in 0..i {
            let p = Coordinate::new(rng.random::<u64>(), rng.random::<u64>());
            let _ = tree.insert(p).expect("full domain accepts every point");
        }
        insert_time += start.elapsed();
        inserted += i;

        let start = Instant::now();
        if let Err(violation) = tree.sanity_check() {
            panic!("round {i}: {violation}");
        }
        check_time += start.elapsed();

        if i % 1024 == 0 {
            println!(
                "Round {:>5}/{}: {} nodes, {} pages, depth {}",
                i,
                rounds,
                tree.node_count(),
                tree.page_count(),
                tree.depth()
            );
        }
    }

    println!("\nResults:");
    println!("  Points inserted:   {inserted}");
    println!("  Insert time:       {:.2}ms", insert_time.as_secs_f64() * 1000.0);
    println!("  Sanity check time: {:.2}ms", check_time.as_secs_f64() * 1000.0);
    println!("  Pool capacity:     {} nodes", tree.capacity());
    println!("  Total time:        {:.2}s", overall_start.elapsed().as_secs_f64());
}
