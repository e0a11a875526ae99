//! Descriptive statistics shared by the estimators.
//!
//! All deviations are population (N-denominator) deviations: a game log is the
//! complete history being described, not a sample drawn from a larger one.
//! `statrs` returns NaN for empty input; these wrappers report 0 instead.

use statrs::statistics::{Data, Median, Statistics};

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// Population standard deviation, 0 for an empty slice.
///
/// Identical values give exactly 0; the running-sum variance can leave rounding
/// residue for fractional inputs.
pub fn std_dev(values: &[f64]) -> f64 {
    match values.first() {
        None => 0.0,
        Some(first) if values.iter().all(|value| value == first) => 0.0,
        Some(_) => values.iter().population_std_dev(),
    }
}

/// Median; even-length inputs average the two middle values
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Data::new(values.to_vec()).median()
}
