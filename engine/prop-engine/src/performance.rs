//! Per-statistic performance summary for a player.

use crate::catalog::{stats_for_position, StatDefinition};
use crate::constants::{
    CONSISTENCY_CONFIDENCE_WEIGHT, HEADLINE_STATS, HIGH_CONSISTENCY, HIGH_CONSISTENCY_LINE,
    LOW_CONSISTENCY_LINE, MAX_STAT_CONFIDENCE, MEDIUM_CONSISTENCY, MEDIUM_CONSISTENCY_LINE,
    PERFORMANCE_RECENT_GAMES, PERFORMANCE_TREND_BAND, SAMPLE_BONUS_MAX_GAMES,
    SAMPLE_BONUS_PER_GAME,
};
use crate::stats::{GameStatRecord, Position, StatKey};
use crate::summary;
use crate::trend::Trend;
use serde::{Deserialize, Serialize};

/// Descriptive summary of one statistic over the games where it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatAnalysis {
    pub stat: StatKey,
    pub label: String,
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    /// 0-100
    pub consistency: f64,
    /// Fractional change of the last 3 games over the earlier ones (0.2 = +20%)
    pub recent_trend: f64,
    /// Suggested over/under line
    pub suggested_threshold: f64,
    /// 0-95
    pub confidence: f64,
    /// Games with a positive value for this statistic
    pub games_with_data: usize,
    pub total_games: usize,
}

impl StatAnalysis {
    fn empty(def: &StatDefinition, total_games: usize) -> Self {
        Self {
            stat: def.key,
            label: def.label.to_string(),
            average: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
            consistency: 0.0,
            recent_trend: 0.0,
            suggested_threshold: 0.0,
            confidence: 0.0,
            games_with_data: 0,
            total_games,
        }
    }

    pub fn has_data(&self) -> bool {
        self.games_with_data > 0
    }
}

/// Ranked headline statistics plus an overall read on the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub position: Position,
    /// Highest confidence first, at most 6 entries
    pub stats: Vec<StatAnalysis>,
    pub overall_confidence: f64,
    pub overall_volatility: f64,
    pub overall_trend: Trend,
}

/// Analyze every statistic the catalog lists for `position`.
///
/// Only strictly positive values count as data for a statistic. Overall figures
/// average every catalog statistic, so one without data pulls confidence down
/// and volatility up.
pub fn analyze_performance(position: &Position, game_log: &[GameStatRecord]) -> PerformanceAnalysis {
    let mut analyses: Vec<StatAnalysis> = stats_for_position(position)
        .iter()
        .map(|def| analyze_stat(def, game_log))
        .collect();

    let (overall_confidence, overall_volatility, overall_trend) = if analyses.is_empty() {
        (0.0, 0.0, Trend::Stable)
    } else {
        let confidences: Vec<f64> = analyses.iter().map(|a| a.confidence).collect();
        let volatilities: Vec<f64> = analyses.iter().map(|a| 100.0 - a.consistency).collect();
        let trends: Vec<f64> = analyses.iter().map(|a| a.recent_trend).collect();
        (
            summary::mean(&confidences),
            summary::mean(&volatilities),
            Trend::from_change(summary::mean(&trends), PERFORMANCE_TREND_BAND),
        )
    };

    analyses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    analyses.truncate(HEADLINE_STATS);

    PerformanceAnalysis {
        position: position.clone(),
        stats: analyses,
        overall_confidence,
        overall_volatility,
        overall_trend,
    }
}

/// Summarize one statistic across the game log
pub fn analyze_stat(def: &StatDefinition, game_log: &[GameStatRecord]) -> StatAnalysis {
    let values: Vec<f64> = game_log
        .iter()
        .filter_map(|record| record.get(def.key))
        .filter(|value| *value > 0.0)
        .collect();

    if values.is_empty() {
        return StatAnalysis::empty(def, game_log.len());
    }

    let average = summary::mean(&values);
    let median = summary::median(&values);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let std_dev = summary::std_dev(&values);
    let consistency = (100.0 - std_dev / average * 100.0).clamp(0.0, 100.0);
    let games = values.len();
    let confidence = (consistency * CONSISTENCY_CONFIDENCE_WEIGHT
        + games.min(SAMPLE_BONUS_MAX_GAMES) as f64 * SAMPLE_BONUS_PER_GAME)
        .min(MAX_STAT_CONFIDENCE);

    StatAnalysis {
        stat: def.key,
        label: def.label.to_string(),
        average,
        median,
        min,
        max,
        std_dev,
        consistency,
        recent_trend: recent_trend(&values),
        suggested_threshold: suggested_threshold(average, median, consistency),
        confidence,
        games_with_data: games,
        total_games: game_log.len(),
    }
}

/// Fractional change of the last (up to) 3 values over the rest; 0 with nothing earlier
fn recent_trend(values: &[f64]) -> f64 {
    let split = values.len().saturating_sub(PERFORMANCE_RECENT_GAMES);
    if split == 0 {
        return 0.0;
    }
    let earlier = summary::mean(&values[..split]);
    if earlier == 0.0 {
        return 0.0;
    }
    (summary::mean(&values[split..]) - earlier) / earlier
}

/// Less consistent players get a lower, more conservative "over" line
pub fn suggested_threshold(average: f64, median: f64, consistency: f64) -> f64 {
    if consistency > HIGH_CONSISTENCY {
        (average * HIGH_CONSISTENCY_LINE).round()
    } else if consistency > MEDIUM_CONSISTENCY {
        (median * MEDIUM_CONSISTENCY_LINE).round()
    } else {
        (average * LOW_CONSISTENCY_LINE).round()
    }
}
