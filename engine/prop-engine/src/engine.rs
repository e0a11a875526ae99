use crate::catalog::{self, StatDefinition};
use crate::config::PropConfig;
use crate::performance::{self, PerformanceAnalysis};
use crate::probability::{self, ProbabilityResult};
use crate::stats::{self, GameStatRecord, Position, StatKey};
use crate::trend::{self, Trend};
use crate::volatility::{self, VolatilityResult};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Probability and trend for one statistic at one threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub stat: StatKey,
    pub label: String,
    pub threshold: f64,
    /// True when the threshold came from the suggested line rather than the caller
    pub suggested: bool,
    pub probability: ProbabilityResult,
    pub trend: Trend,
}

/// Everything the player page shows, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub position: Position,
    pub games: usize,
    pub volatility: VolatilityResult,
    pub performance: PerformanceAnalysis,
    pub lines: Vec<StatLine>,
}

/// Entry point for callers holding a configuration.
///
/// The engine keeps no state between calls; it only carries the configured
/// recent window used when estimating probabilities from a game log.
#[derive(Debug, Clone, Default)]
pub struct PropEngine {
    config: PropConfig,
}

impl PropEngine {
    pub fn new(config: PropConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PropConfig {
        &self.config
    }

    pub fn stats_for_position(&self, position: &Position) -> &'static [StatDefinition] {
        catalog::stats_for_position(position)
    }

    pub fn estimate_probability(&self, samples: &[f64], threshold: f64) -> ProbabilityResult {
        let result = probability::estimate_probability(samples, threshold);
        debug!(
            threshold,
            games = result.games,
            probability = result.probability,
            confidence = %result.confidence,
            "Estimated threshold probability"
        );
        result
    }

    /// Probability for one statistic of a game log, limited to the configured recent window
    pub fn estimate_for_stat(
        &self,
        game_log: &[GameStatRecord],
        stat: StatKey,
        threshold: f64,
    ) -> ProbabilityResult {
        let series = stats::stat_series(game_log, stat);
        let samples = self.windowed(&series);
        debug!(%stat, available = series.len(), used = samples.len(), "Selected samples");
        self.estimate_probability(samples, threshold)
    }

    pub fn trend(&self, samples: &[f64]) -> Trend {
        trend::trend(samples)
    }

    pub fn trend_for_stat(&self, game_log: &[GameStatRecord], stat: StatKey) -> Trend {
        trend::trend(&stats::stat_series(game_log, stat))
    }

    pub fn volatility(&self, game_log: &[GameStatRecord], position: &Position) -> VolatilityResult {
        let result = volatility::volatility(game_log, position);
        debug!(
            %position,
            games = game_log.len(),
            score = result.score,
            rating = %result.rating,
            "Computed volatility"
        );
        result
    }

    pub fn analyze_performance(
        &self,
        position: &Position,
        game_log: &[GameStatRecord],
    ) -> PerformanceAnalysis {
        let analysis = performance::analyze_performance(position, game_log);
        debug!(
            %position,
            games = game_log.len(),
            overall_confidence = analysis.overall_confidence,
            overall_trend = %analysis.overall_trend,
            "Analyzed performance"
        );
        analysis
    }

    /// Full report for a player. Statistics without a caller threshold are priced
    /// at their suggested line.
    pub fn player_report(
        &self,
        position: &Position,
        game_log: &[GameStatRecord],
        thresholds: &HashMap<StatKey, f64>,
    ) -> PlayerReport {
        let lines = self
            .stats_for_position(position)
            .iter()
            .map(|def| {
                let (threshold, suggested) = match thresholds.get(&def.key) {
                    Some(threshold) => (*threshold, false),
                    None => (performance::analyze_stat(def, game_log).suggested_threshold, true),
                };
                StatLine {
                    stat: def.key,
                    label: def.label.to_string(),
                    threshold,
                    suggested,
                    probability: self.estimate_for_stat(game_log, def.key, threshold),
                    trend: self.trend_for_stat(game_log, def.key),
                }
            })
            .collect();

        PlayerReport {
            position: position.clone(),
            games: game_log.len(),
            volatility: self.volatility(game_log, position),
            performance: self.analyze_performance(position, game_log),
            lines,
        }
    }

    fn windowed<'a>(&self, series: &'a [f64]) -> &'a [f64] {
        match self.config.analysis.recent_window {
            Some(window) => stats::recent(series, window),
            None => series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::ConfidenceTier;

    fn receiver_log() -> Vec<GameStatRecord> {
        [40.0, 45.0, 50.0, 90.0, 95.0, 100.0]
            .iter()
            .enumerate()
            .map(|(week, yds)| {
                GameStatRecord::new(Some(week as u32 + 1))
                    .with(StatKey::ReceivingYards, *yds)
                    .with(StatKey::Receptions, (*yds / 10.0).round())
            })
            .collect()
    }

    #[test]
    fn test_whole_history_by_default() {
        let engine = PropEngine::default();
        let result = engine.estimate_for_stat(&receiver_log(), StatKey::ReceivingYards, 70.0);
        assert_eq!(result.games, 6);
        assert_eq!(result.confidence, ConfidenceTier::Medium);
        assert_eq!(result.probability, 50);
    }

    #[test]
    fn test_recent_window_limits_samples() {
        let mut config = PropConfig::default();
        config.analysis.recent_window = Some(3);
        let engine = PropEngine::new(config);

        let result = engine.estimate_for_stat(&receiver_log(), StatKey::ReceivingYards, 70.0);
        assert_eq!(result.games, 3);
        assert_eq!(result.mean, 95.0);
        assert_eq!(result.probability, 100);
        assert_eq!(result.confidence, ConfidenceTier::Low);
    }

    #[test]
    fn test_missing_stat_gives_empty_result() {
        let engine = PropEngine::default();
        let result = engine.estimate_for_stat(&receiver_log(), StatKey::PassingYards, 200.0);
        assert_eq!(result.games, 0);
        assert_eq!(result.probability, 0);
    }

    #[test]
    fn test_player_report() {
        let engine = PropEngine::default();
        let log = receiver_log();
        let thresholds = HashMap::from([(StatKey::ReceivingYards, 60.0)]);
        let report = engine.player_report(&Position::WR, &log, &thresholds);

        assert_eq!(report.games, 6);
        assert_eq!(report.lines.len(), engine.stats_for_position(&Position::WR).len());

        let yards = &report.lines[0];
        assert_eq!(yards.stat, StatKey::ReceivingYards);
        assert_eq!(yards.threshold, 60.0);
        assert!(!yards.suggested);
        assert_eq!(yards.trend, Trend::Increasing);

        let receptions = report.lines.iter().find(|l| l.stat == StatKey::Receptions).unwrap();
        assert!(receptions.suggested);
        assert!(receptions.threshold > 0.0);
        assert_eq!(report.performance.overall_trend, Trend::Increasing);
    }
}
