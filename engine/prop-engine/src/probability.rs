//! Threshold probability estimation.
//!
//! A player's own game log is treated as a normal distribution and the
//! probability of meeting or exceeding a threshold is read off the upper tail.

use crate::constants::{HIGH_CONFIDENCE_MIN_GAMES, MEDIUM_CONFIDENCE_MIN_GAMES};
use crate::summary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reliability of an estimate, a step function of the sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// >= 8 games is high, >= 5 medium, anything else low
    pub fn from_sample_size(games: usize) -> Self {
        if games >= HIGH_CONFIDENCE_MIN_GAMES {
            ConfidenceTier::High
        } else if games >= MEDIUM_CONFIDENCE_MIN_GAMES {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of a threshold probability estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    /// Estimated chance (0-100) of meeting or exceeding the threshold
    pub probability: u8,
    pub mean: f64,
    pub std_dev: f64,
    /// Number of samples the estimate was built from
    pub games: usize,
    pub confidence: ConfidenceTier,
    /// Share (0-100) of the historical games that met the threshold
    pub hit_rate: u8,
    /// Only present when the normal approximation was used
    pub z_score: Option<f64>,
}

impl ProbabilityResult {
    fn empty() -> Self {
        Self {
            probability: 0,
            mean: 0.0,
            std_dev: 0.0,
            games: 0,
            confidence: ConfidenceTier::Low,
            hit_rate: 0,
            z_score: None,
        }
    }
}

/// Estimate the probability that the next value meets or exceeds `threshold`.
///
/// Degenerate inputs short-circuit before any division:
/// - no samples: probability 0, low confidence
/// - threshold <= 0: probability 100 (stat values are never negative)
/// - one sample or zero variance: 100 if `threshold <= mean`, else 0
pub fn estimate_probability(samples: &[f64], threshold: f64) -> ProbabilityResult {
    if samples.is_empty() {
        return ProbabilityResult::empty();
    }

    let games = samples.len();
    let mean = summary::mean(samples);
    let std_dev = summary::std_dev(samples);
    let confidence = ConfidenceTier::from_sample_size(games);
    let hits = samples.iter().filter(|value| **value >= threshold).count();
    let hit_rate = to_percent(hits as f64 / games as f64 * 100.0);

    let mut result = ProbabilityResult {
        probability: 0,
        mean,
        std_dev,
        games,
        confidence,
        hit_rate,
        z_score: None,
    };

    if threshold <= 0.0 {
        result.probability = 100;
    } else if games == 1 || std_dev == 0.0 {
        result.probability = if threshold <= mean { 100 } else { 0 };
    } else {
        let z = (threshold - mean) / std_dev;
        result.z_score = Some(z);
        result.probability = to_percent((1.0 - normal_cdf(z)) * 100.0);
    }

    result
}

/// Standard normal CDF, Zelen & Severo polynomial approximation
/// (Abramowitz & Stegun 26.2.17, |error| < 7.5e-8).
pub fn normal_cdf(z: f64) -> f64 {
    const P: f64 = 0.231_641_9;
    const B1: f64 = 0.319_381_530;
    const B2: f64 = -0.356_563_782;
    const B3: f64 = 1.781_477_937;
    const B4: f64 = -1.821_255_978;
    const B5: f64 = 1.330_274_429;
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

    let x = z.abs();
    let t = 1.0 / (1.0 + P * x);
    let density = INV_SQRT_2PI * (-0.5 * x * x).exp();
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let upper_tail = density * poly;

    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

fn to_percent(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}
