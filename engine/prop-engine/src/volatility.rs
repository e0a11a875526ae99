//! Volatility analysis.
//!
//! Each of a position's key statistics gets a consistency score built from how
//! much it swings week to week and how often it falls well short of its own
//! average ("off games"). The weighted consistency is inverted into a 0-100
//! volatility score.

use crate::constants::{
    LOW_VOLATILITY_BELOW, MEDIUM_VOLATILITY_BELOW, NEUTRAL_VOLATILITY_SCORE, OFF_GAME_PENALTY,
    OFF_GAME_RATIO, OFF_GAME_WEIGHT, VOLATILITY_MIN_GAMES, WEEK_CHANGE_WEIGHT,
};
use crate::stats::{stat_series, GameStatRecord, Position, StatKey};
use crate::summary;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

static QB_WEIGHTS: [(StatKey, f64); 3] = [
    (StatKey::PassingYards, 0.5),
    (StatKey::PassingTouchdowns, 0.3),
    (StatKey::RushingYards, 0.2),
];

static RB_WEIGHTS: [(StatKey, f64); 3] = [
    (StatKey::RushingYards, 0.5),
    (StatKey::RushingAttempts, 0.3),
    (StatKey::ReceivingYards, 0.2),
];

static RECEIVER_WEIGHTS: [(StatKey, f64); 3] = [
    (StatKey::ReceivingYards, 0.5),
    (StatKey::Receptions, 0.3),
    (StatKey::ReceivingTouchdowns, 0.2),
];

static DEFAULT_WEIGHTS: [(StatKey, f64); 2] =
    [(StatKey::ReceivingYards, 0.5), (StatKey::RushingYards, 0.5)];

/// Statistics that drive a position's volatility, primary statistic first
pub fn volatility_weights(position: &Position) -> &'static [(StatKey, f64)] {
    match position {
        Position::QB => &QB_WEIGHTS,
        Position::RB => &RB_WEIGHTS,
        Position::WR | Position::TE => &RECEIVER_WEIGHTS,
        Position::Other(_) => &DEFAULT_WEIGHTS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VolatilityRating {
    Low,
    Medium,
    High,
}

impl VolatilityRating {
    /// < 35 is low, < 65 medium, everything else high
    pub fn from_score(score: u8) -> Self {
        if score < LOW_VOLATILITY_BELOW {
            VolatilityRating::Low
        } else if score < MEDIUM_VOLATILITY_BELOW {
            VolatilityRating::Medium
        } else {
            VolatilityRating::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityRating::Low => "Low",
            VolatilityRating::Medium => "Medium",
            VolatilityRating::High => "High",
        }
    }
}

impl fmt::Display for VolatilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A game well below the statistic's average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffGame {
    /// Position in the input series
    pub index: usize,
    pub value: f64,
    /// How far below the mean, in percent of the mean
    pub shortfall_pct: f64,
}

/// Consistency breakdown for one statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatConsistency {
    pub games: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Mean absolute week-over-week change in percent, zero-valued weeks excluded as a base
    pub avg_week_change_pct: f64,
    pub off_games: Vec<OffGame>,
    /// Share of games that were off games, in percent
    pub off_game_pct: f64,
    /// Average shortfall across the off games, in percent
    pub avg_shortfall_pct: f64,
    /// 0-100, higher is steadier
    pub consistency: f64,
}

/// A statistic's consistency together with the weight it carried
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedConsistency {
    pub stat: StatKey,
    pub weight: f64,
    pub detail: StatConsistency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityResult {
    /// 0-100, `100 - round(consistency)`
    pub score: u8,
    pub rating: VolatilityRating,
    /// Primary statistic's `std_dev / mean * 100`
    pub coefficient_of_variation: f64,
    /// Primary statistic's mean
    pub mean: f64,
    /// Primary statistic's standard deviation
    pub std_dev: f64,
    /// Weighted consistency the score was derived from
    pub consistency: f64,
    pub breakdown: Vec<WeightedConsistency>,
}

impl VolatilityResult {
    /// Returned when there is not enough history to say anything
    pub fn neutral() -> Self {
        let score = NEUTRAL_VOLATILITY_SCORE;
        Self {
            score,
            rating: VolatilityRating::from_score(score),
            coefficient_of_variation: 0.0,
            mean: 0.0,
            std_dev: 0.0,
            consistency: f64::from(100 - score),
            breakdown: Vec::new(),
        }
    }
}

/// Signed week-over-week change in percent for each consecutive pair.
/// `None` where the earlier value is zero.
pub fn week_over_week_changes(values: &[f64]) -> Vec<Option<f64>> {
    values
        .windows(2)
        .map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            if prev == 0.0 {
                None
            } else {
                Some((cur - prev) / prev * 100.0)
            }
        })
        .collect()
}

/// Games below 70% of the series mean
pub fn off_games(values: &[f64]) -> Vec<OffGame> {
    off_games_about(values, summary::mean(values))
}

fn off_games_about(values: &[f64], mean: f64) -> Vec<OffGame> {
    if mean <= 0.0 {
        return Vec::new();
    }
    let cutoff = mean * OFF_GAME_RATIO;
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value < cutoff)
        .map(|(index, value)| OffGame {
            index,
            value: *value,
            shortfall_pct: (mean - value) / mean * 100.0,
        })
        .collect()
}

/// Consistency breakdown for one statistic's series. `None` below 2 values.
pub fn stat_consistency(values: &[f64]) -> Option<StatConsistency> {
    if values.len() < VOLATILITY_MIN_GAMES {
        return None;
    }

    let mean = summary::mean(values);
    let std_dev = summary::std_dev(values);

    let changes: Vec<f64> =
        week_over_week_changes(values).into_iter().flatten().map(f64::abs).collect();
    let avg_week_change_pct = summary::mean(&changes);

    let off_games = off_games_about(values, mean);
    let off_game_pct = off_games.len() as f64 / values.len() as f64 * 100.0;
    let shortfalls: Vec<f64> = off_games.iter().map(|game| game.shortfall_pct).collect();
    let avg_shortfall_pct = summary::mean(&shortfalls);

    let consistency = WEEK_CHANGE_WEIGHT * (100.0 - avg_week_change_pct).max(0.0)
        + OFF_GAME_WEIGHT * (100.0 - OFF_GAME_PENALTY * off_game_pct).max(0.0);

    Some(StatConsistency {
        games: values.len(),
        mean,
        std_dev,
        avg_week_change_pct,
        off_games,
        off_game_pct,
        avg_shortfall_pct,
        consistency,
    })
}

/// Weighted volatility rating of a player's game log for `position`.
pub fn volatility(game_log: &[GameStatRecord], position: &Position) -> VolatilityResult {
    if game_log.len() < VOLATILITY_MIN_GAMES {
        return VolatilityResult::neutral();
    }

    let weights = volatility_weights(position);
    let mut breakdown = Vec::with_capacity(weights.len());
    for &(stat, weight) in weights {
        let series = stat_series(game_log, stat);
        match stat_consistency(&series) {
            Some(detail) => breakdown.push(WeightedConsistency { stat, weight, detail }),
            None => trace!(%stat, games = series.len(), "Not enough data for volatility"),
        }
    }

    let total_weight: f64 = breakdown.iter().map(|entry| entry.weight).sum();
    if breakdown.is_empty() || total_weight <= 0.0 {
        return VolatilityResult::neutral();
    }
    let consistency = breakdown
        .iter()
        .map(|entry| entry.weight * entry.detail.consistency)
        .sum::<f64>()
        / total_weight;

    let score = (100.0 - consistency.round()).clamp(0.0, 100.0) as u8;

    let primary = stat_series(game_log, weights[0].0);
    let mean = summary::mean(&primary);
    let std_dev = summary::std_dev(&primary);
    let coefficient_of_variation = if mean > 0.0 { std_dev / mean * 100.0 } else { 0.0 };

    VolatilityResult {
        score,
        rating: VolatilityRating::from_score(score),
        coefficient_of_variation,
        mean,
        std_dev,
        consistency,
        breakdown,
    }
}
