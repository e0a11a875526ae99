//! Short-term trend classification: the last few games against everything before.

use crate::constants::{TREND_BAND_PCT, TREND_MIN_GAMES, TREND_RECENT_GAMES};
use crate::summary::mean;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    /// Classify a signed change against a symmetric band
    pub fn from_change(change: f64, band: f64) -> Self {
        if change > band {
            Trend::Increasing
        } else if change < -band {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Percent change of the last 3 samples' average over the earlier samples' average.
///
/// `None` below 4 samples. A zero earlier average yields +100% when the recent
/// average is positive and 0% otherwise.
pub fn recent_change_pct(samples: &[f64]) -> Option<f64> {
    if samples.len() < TREND_MIN_GAMES {
        return None;
    }
    let split = samples.len() - TREND_RECENT_GAMES;
    let earlier = mean(&samples[..split]);
    let latest = mean(&samples[split..]);

    if earlier == 0.0 {
        return Some(if latest > 0.0 { 100.0 } else { 0.0 });
    }
    Some((latest - earlier) * 100.0 / earlier)
}

/// Direction of the most recent games. Samples are read in the caller's order,
/// so the last entries are taken as the most recent.
pub fn trend(samples: &[f64]) -> Trend {
    match recent_change_pct(samples) {
        Some(change) => Trend::from_change(change, TREND_BAND_PCT),
        None => Trend::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_is_stable() {
        assert_eq!(trend(&[]), Trend::Stable);
        assert_eq!(trend(&[10.0, 50.0, 90.0]), Trend::Stable);
        assert!(recent_change_pct(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_increasing() {
        // earlier avg 50, recent avg 60 -> +20%
        assert_eq!(trend(&[50.0, 50.0, 60.0, 60.0, 60.0]), Trend::Increasing);
    }

    #[test]
    fn test_decreasing() {
        // earlier avg 100, recent avg 80 -> -20%
        assert_eq!(trend(&[100.0, 80.0, 80.0, 80.0]), Trend::Decreasing);
    }

    #[test]
    fn test_band_edges_are_stable() {
        // exactly +15% and -15% stay inside the band
        assert_eq!(trend(&[100.0, 115.0, 115.0, 115.0]), Trend::Stable);
        assert_eq!(trend(&[100.0, 85.0, 85.0, 85.0]), Trend::Stable);
        assert_eq!(trend(&[100.0, 110.0, 95.0, 105.0]), Trend::Stable);
    }

    #[test]
    fn test_zero_baseline() {
        assert_eq!(trend(&[0.0, 0.0, 3.0, 4.0, 5.0]), Trend::Increasing);
        assert_eq!(trend(&[0.0, 0.0, 0.0, 0.0]), Trend::Stable);
    }

    #[test]
    fn test_order_matters() {
        let rising = [20.0, 30.0, 40.0, 60.0, 70.0, 80.0];
        let mut falling = rising;
        falling.reverse();
        assert_eq!(trend(&rising), Trend::Increasing);
        assert_eq!(trend(&falling), Trend::Decreasing);
    }

    #[test]
    fn test_from_change() {
        assert_eq!(Trend::from_change(0.11, 0.1), Trend::Increasing);
        assert_eq!(Trend::from_change(-0.11, 0.1), Trend::Decreasing);
        assert_eq!(Trend::from_change(0.1, 0.1), Trend::Stable);
    }
}
