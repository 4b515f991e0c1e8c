//! Fixed-width sliding-sum peak detection over small histograms.

use serde::Serialize;

/// The best contiguous window found by [`peak_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakWindow {
    /// Index of the first bucket in the window.
    pub start: usize,
    /// Index of the last bucket in the window (inclusive).
    pub end: usize,
    /// Summed count over the window.
    pub uploads: u64,
}

/// Finds the `width`-bucket window with the largest summed count.
///
/// Windows never wrap around the end of `counts`. Ties resolve to the
/// earliest start, so an all-zero histogram yields the first window.
/// `width` is clamped to `1..=counts.len()`.
#[must_use]
pub fn peak_window(counts: &[u64], width: usize) -> PeakWindow {
    if counts.is_empty() {
        return PeakWindow {
            start: 0,
            end: 0,
            uploads: 0,
        };
    }

    let width = width.clamp(1, counts.len());
    let mut sum: u64 = counts[..width].iter().sum();
    let mut best = (0, sum);

    for start in 1..=counts.len() - width {
        sum = sum - counts[start - 1] + counts[start + width - 1];
        if sum > best.1 {
            best = (start, sum);
        }
    }

    PeakWindow {
        start: best.0,
        end: best.0 + width - 1,
        uploads: best.1,
    }
}
