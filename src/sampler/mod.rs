pub mod counters;
pub mod estimate;
pub mod progress;

pub use counters::{SampleCounters, SampleTotals};
pub use estimate::estimate;

use std::thread;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::config::RunConfig;
use crate::domain::Polygon;
use crate::geometry::{Bounds, exterior_ray_x, point_in_polygon};

/// Failures that stop a run before any sampling happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
    #[error("polygon has {vertices} vertices, need at least 3")]
    InvalidPolygon { vertices: usize },
}

/// How often the reporter thread reads the counters.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Samples a worker classifies between commits to the shared counters. Keeps
/// the hot loop free of shared writes while progress still sees live counts.
const FLUSH_EVERY: u64 = 4096;

/// Per-worker seed stride (64-bit golden ratio), decorrelating the streams
/// without any shared generator.
const STREAM_SPLIT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Classify `config.total_points` uniform random points against `polygon`,
/// spread across `config.worker_count` threads.
///
/// Validation happens up front: a zero sample count, zero worker count,
/// empty domain, or a polygon below 3 vertices fails here and nothing is
/// spawned. Each worker gets an equal share of the points (the remainder
/// lands on the last worker) and its own seeded generator. A reporter
/// thread feeds `on_progress` with the live `checked` count on a fixed
/// interval, including a final tick at completion.
///
/// Blocks until every worker finishes; the returned totals always satisfy
/// `checked == total_points` and `inside <= checked`.
pub fn run<F>(
    polygon: &Polygon,
    config: &RunConfig,
    on_progress: F,
) -> Result<SampleTotals, RunError>
where
    F: FnMut(u64) + Send,
{
    validate(polygon, config)?;

    let counters = SampleCounters::new();
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let ray_x = exterior_ray_x(polygon);
    let shares = partition(config.total_points, config.worker_count);

    thread::scope(|scope| {
        let counters = &counters;
        for (worker, share) in shares.iter().copied().enumerate() {
            let seed = base_seed.wrapping_add((worker as u64).wrapping_mul(STREAM_SPLIT));
            let domain = config.domain;
            scope.spawn(move || sample_share(polygon, share, domain, ray_x, seed, counters));
        }
        scope.spawn(move || {
            progress::watch(counters, config.total_points, PROGRESS_INTERVAL, on_progress)
        });
    });

    Ok(counters.snapshot())
}

/// Equal per-worker shares; the division remainder goes to the last worker.
fn partition(total: u64, workers: usize) -> Vec<u64> {
    let workers_u64 = workers as u64;
    let base = total / workers_u64;
    let mut shares = vec![base; workers];
    if let Some(last) = shares.last_mut() {
        *last += total % workers_u64;
    }
    shares
}

fn validate(polygon: &Polygon, config: &RunConfig) -> Result<(), RunError> {
    if config.total_points == 0 {
        return Err(RunError::InvalidConfig {
            reason: "sample count must be positive",
        });
    }
    if config.worker_count == 0 {
        return Err(RunError::InvalidConfig {
            reason: "worker count must be positive",
        });
    }
    if !(config.domain.area() > 0.0) {
        return Err(RunError::InvalidConfig {
            reason: "sampling domain must have positive area",
        });
    }
    if !polygon.is_valid() {
        return Err(RunError::InvalidPolygon {
            vertices: polygon.len(),
        });
    }
    Ok(())
}

/// One worker's loop: draw, classify, tally locally, flush in batches.
fn sample_share(
    polygon: &Polygon,
    share: u64,
    domain: Bounds,
    ray_x: f64,
    seed: u64,
    counters: &SampleCounters,
) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut checked = 0u64;
    let mut inside = 0u64;

    for _ in 0..share {
        let p = domain.sample(&mut rng);
        checked += 1;
        if point_in_polygon(polygon, p, ray_x) {
            inside += 1;
        }
        if checked == FLUSH_EVERY {
            counters.commit(checked, inside);
            checked = 0;
            inside = 0;
        }
    }
    if checked > 0 {
        counters.commit(checked, inside);
    }
}
