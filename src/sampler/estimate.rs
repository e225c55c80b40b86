use crate::config::RunConfig;
use crate::sampler::counters::SampleTotals;

/// Scale the observed inside-ratio by the sampling domain's area.
///
/// Pure arithmetic; `run` guarantees `total_points > 0` before totals exist.
pub fn estimate(totals: &SampleTotals, config: &RunConfig) -> f64 {
    (totals.inside as f64 / config.total_points as f64) * config.domain.area()
}
