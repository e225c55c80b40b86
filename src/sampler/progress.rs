use std::time::Duration;

use crate::sampler::counters::SampleCounters;

/// Periodically report `checked` to the caller until every sample is in.
///
/// Read-only against the shared counters; workers never wait on it. Each
/// tick hands the latest `checked` value to `on_progress` (the binary feeds
/// this into its progress bar). The loop always delivers one final tick with
/// `checked >= total` before returning, so observers see a 100% state even
/// when the run outpaces the first sleep.
///
/// Values may be stale but are monotone, matching the counters themselves.
pub fn watch<F>(counters: &SampleCounters, total: u64, interval: Duration, mut on_progress: F)
where
    F: FnMut(u64),
{
    loop {
        std::thread::sleep(interval);

        let checked = counters.checked();
        on_progress(checked);

        if checked >= total {
            break;
        }
    }
}

/// Percent complete as the reporter displays it.
pub fn percent(checked: u64, total: u64) -> u64 {
    if total == 0 {
        return 100;
    }
    (checked.min(total)) * 100 / total
}
