use std::sync::atomic::{AtomicU64, Ordering};

/// Shared tallies for one sampling run: samples classified so far and how
/// many of them fell inside the polygon.
///
/// Workers commit in batches; the progress reporter reads concurrently. The
/// ordering contract is that every observer sees `inside <= checked`:
/// commits add to `checked` before `inside`, snapshots read `inside` before
/// `checked`, and both sides use SeqCst so those orders hold globally. Both
/// counters are monotone for the lifetime of the run.
#[derive(Debug, Default)]
pub struct SampleCounters {
    checked: AtomicU64,
    inside: AtomicU64,
}

impl SampleCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a worker's local tally into the shared counters.
    pub fn commit(&self, checked: u64, inside: u64) {
        debug_assert!(inside <= checked);
        self.checked.fetch_add(checked, Ordering::SeqCst);
        self.inside.fetch_add(inside, Ordering::SeqCst);
    }

    /// Samples classified so far. May lag the workers slightly; never
    /// overshoots the committed total.
    pub fn checked(&self) -> u64 {
        self.checked.load(Ordering::SeqCst)
    }

    /// Consistent `(checked, inside)` pair with `inside <= checked`.
    pub fn snapshot(&self) -> SampleTotals {
        let inside = self.inside.load(Ordering::SeqCst);
        let checked = self.checked.load(Ordering::SeqCst);
        SampleTotals { checked, inside }
    }
}

/// Final (or observed) counter values as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleTotals {
    pub checked: u64,
    pub inside: u64,
}
