//! Binning - nice-step histogram bins
//!
//! Step sizes are powers of ten, optionally divided by 5 or 2, chosen so the
//! extent fits in at most `max_bins` bins; the start is snapped down and the
//! stop snapped up to a multiple of the step. This is the default binning the
//! dashboard's charting layer applied, so histograms line up with what the
//! operators are used to.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_BINS;

const BASE: f64 = 10.0;
const DIVISORS: [f64; 2] = [5.0, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinPolicy {
    pub max_bins: usize,
    /// Snap bounds outward to multiples of the step
    pub nice: bool,
}

impl Default for BinPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Step and bounds chosen for an extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinLayout {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl BinLayout {
    pub fn bin_count(&self) -> usize {
        (((self.stop - self.start) / self.step).round() as usize).max(1)
    }

    /// Bin index for a value; values at `stop` fall into the last bin
    pub fn index_of(&self, value: f64) -> usize {
        let last = self.bin_count() - 1;
        if value <= self.start {
            return 0;
        }
        (((value - self.start) / self.step).floor() as usize).min(last)
    }
}

/// One histogram bar `[start, end)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl BinPolicy {
    pub const DEFAULT: BinPolicy = BinPolicy {
        max_bins: DEFAULT_MAX_BINS,
        nice: true,
    };

    /// Choose step and bounds for `[min, max]`
    pub fn layout(&self, min: f64, max: f64) -> BinLayout {
        let max_bins = self.max_bins.max(1) as f64;
        let logb = BASE.ln();

        let span = if max > min {
            max - min
        } else if min != 0.0 {
            min.abs()
        } else {
            1.0
        };

        let level = (max_bins.ln() / logb).ceil();
        let mut step = BASE.powf((span.ln() / logb).round() - level);

        // Increase step until it fits
        while (span / step).ceil() > max_bins {
            step *= BASE;
        }

        // Refine with divisors
        for divisor in DIVISORS {
            let candidate = step / divisor;
            if span / candidate <= max_bins {
                step = candidate;
            }
        }

        let (mut start, mut stop) = (min, max);
        if self.nice {
            let v = step.ln();
            let precision = if v >= 0.0 { 0 } else { (-v / logb).floor() as i32 + 1 };
            let eps = BASE.powi(-precision - 1);

            let snapped = ((min / step) + eps).floor() * step;
            start = if min < snapped { snapped - step } else { snapped };
            stop = (max / step).ceil() * step;
        }

        if stop <= start {
            stop = start + step;
        }

        BinLayout { start, stop, step }
    }

    /// Histogram of `values`; empty input gives no bins
    pub fn bins(&self, values: &[f64]) -> Vec<HistogramBin> {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min > max {
            return Vec::new();
        }

        let layout = self.layout(min, max);
        let mut bins: Vec<HistogramBin> = (0..layout.bin_count())
            .map(|i| HistogramBin {
                start: layout.start + i as f64 * layout.step,
                end: layout.start + (i + 1) as f64 * layout.step,
                count: 0,
            })
            .collect();

        for value in values.iter().copied().filter(|v| v.is_finite()) {
            bins[layout.index_of(value)].count += 1;
        }

        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_air_temperature_extent() {
        let layout = BinPolicy::DEFAULT.layout(295.3, 304.5);
        assert!(close(layout.step, 1.0));
        assert!(close(layout.start, 295.0));
        assert!(close(layout.stop, 305.0));
        assert_eq!(layout.bin_count(), 10);
    }

    #[test]
    fn test_tool_wear_extent() {
        let layout = BinPolicy::DEFAULT.layout(0.0, 253.0);
        assert!(close(layout.step, 50.0));
        assert!(close(layout.start, 0.0));
        assert!(close(layout.stop, 300.0));
        assert_eq!(layout.bin_count(), 6);
    }

    #[test]
    fn test_rotational_speed_extent() {
        let layout = BinPolicy::DEFAULT.layout(1168.0, 2886.0);
        assert!(close(layout.step, 200.0));
        assert!(close(layout.start, 1000.0));
        assert!(close(layout.stop, 3000.0));
        assert_eq!(layout.bin_count(), 10);
    }

    #[test]
    fn test_single_value() {
        let bins = BinPolicy::DEFAULT.bins(&[5.0, 5.0]);
        assert_eq!(bins.len(), 1);
        assert!(close(bins[0].start, 5.0));
        assert!(close(bins[0].end, 5.5));
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn test_counts_and_edges() {
        let bins = BinPolicy::DEFAULT.bins(&[295.3, 300.0, 304.5]);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        assert_eq!(bins[9].count, 1);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn test_value_on_stop_goes_to_last_bin() {
        let bins = BinPolicy::DEFAULT.bins(&[0.0, 100.0]);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn test_empty_values() {
        assert!(BinPolicy::DEFAULT.bins(&[]).is_empty());
        assert!(BinPolicy::DEFAULT.bins(&[f64::NAN]).is_empty());
    }

    #[test]
    fn test_never_exceeds_max_bins() {
        let policy = BinPolicy { max_bins: 5, nice: true };
        for (lo, hi) in [(3.5, 77.0), (0.0, 1.0), (305.0, 314.0), (-12.0, 1234.5)] {
            let layout = policy.layout(lo, hi);
            assert!(layout.start <= lo && layout.stop >= hi);
            // Nice snapping may add one partial bin at each end
            assert!(layout.bin_count() <= policy.max_bins + 1, "{:?}", layout);
        }
    }
}
