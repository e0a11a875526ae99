//! Scenario and property tests across the estimators

use crate::probability::ConfidenceTier;
use crate::volatility::VolatilityRating;
use crate::{
    analyze_performance, estimate_probability, stats_for_position, trend, volatility,
    GameStatRecord, Position, StatKey, Trend,
};
use proptest::prelude::*;

fn wr_game(week: u32, yards: f64, receptions: f64) -> GameStatRecord {
    GameStatRecord::new(Some(week))
        .with(StatKey::ReceivingYards, yards)
        .with(StatKey::Receptions, receptions)
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_threshold_at_mean_is_fifty_percent() {
        let result = estimate_probability(&[200.0, 220.0, 240.0, 260.0, 280.0], 240.0);
        assert_eq!(result.probability, 50);
        assert!((result.std_dev - 28.28).abs() < 0.01);
    }

    #[test]
    fn test_constant_history_is_a_step() {
        let samples = [10.0, 10.0, 10.0, 10.0];
        assert_eq!(estimate_probability(&samples, 5.0).probability, 100);
        assert_eq!(estimate_probability(&samples, 15.0).probability, 0);
    }

    #[test]
    fn test_empty_history() {
        for threshold in [0.0, 1.0, 250.0] {
            let result = estimate_probability(&[], threshold);
            assert_eq!(result.probability, 0);
            assert_eq!(result.games, 0);
            assert_eq!(result.confidence, ConfidenceTier::Low);
        }
    }

    #[test]
    fn test_confidence_tiers_by_count() {
        let tier = |n: usize| estimate_probability(&vec![50.0; n], 40.0).confidence;
        assert_eq!(tier(8), ConfidenceTier::High);
        assert_eq!(tier(5), ConfidenceTier::Medium);
        assert_eq!(tier(2), ConfidenceTier::Low);
    }

    #[test]
    fn test_steady_receiver_has_low_volatility() {
        let log = vec![
            wr_game(1, 82.0, 6.0),
            wr_game(2, 78.0, 6.0),
            wr_game(3, 85.0, 7.0),
            wr_game(4, 80.0, 6.0),
            wr_game(5, 84.0, 6.0),
            wr_game(6, 81.0, 6.0),
        ];
        let result = volatility(&log, &Position::WR);
        assert_eq!(result.rating, VolatilityRating::Low);
    }

    #[test]
    fn test_kicker_gets_fallback_catalog() {
        let stats = stats_for_position(&Position::parse("KICKER"));
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].key, StatKey::ReceivingYards);
        assert_eq!(stats[1].key, StatKey::RushingYards);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let log: Vec<GameStatRecord> = (1..=9)
            .map(|week| wr_game(week, 50.0 + f64::from(week * 7 % 40), f64::from(week % 5 + 2)))
            .collect();
        let first = analyze_performance(&Position::TE, &log);
        let second = analyze_performance(&Position::TE, &log);
        assert_eq!(first, second);
        assert_eq!(volatility(&log, &Position::TE), volatility(&log, &Position::TE));
    }

    #[test]
    fn test_short_series_trend_is_stable() {
        assert_eq!(trend(&[1.0, 100.0, 1000.0]), Trend::Stable);
    }
}

fn samples_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..400.0, 1..18)
}

proptest! {
    #[test]
    fn prop_non_positive_threshold_is_certain(
        samples in samples_strategy(),
        threshold in -500.0f64..=0.0,
    ) {
        prop_assert_eq!(estimate_probability(&samples, threshold).probability, 100);
    }

    #[test]
    fn prop_zero_variance_is_step(value in 0.5f64..300.0, count in 1usize..17, threshold in 0.1f64..600.0) {
        let samples = vec![value; count];
        let expected = if threshold <= value { 100 } else { 0 };
        prop_assert_eq!(estimate_probability(&samples, threshold).probability, expected);
    }

    #[test]
    fn prop_monotone_in_threshold(
        samples in samples_strategy(),
        a in 0.0f64..500.0,
        b in 0.0f64..500.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let p_low = estimate_probability(&samples, low).probability;
        let p_high = estimate_probability(&samples, high).probability;
        prop_assert!(p_low >= p_high, "p({}) = {} < p({}) = {}", low, p_low, high, p_high);
    }

    #[test]
    fn prop_probability_in_range(samples in prop::collection::vec(0.0f64..400.0, 0..18), threshold in -50.0f64..500.0) {
        let result = estimate_probability(&samples, threshold);
        prop_assert!(result.probability <= 100);
        prop_assert!(result.hit_rate <= 100);
        prop_assert_eq!(result.games, samples.len());
        prop_assert_eq!(result.confidence, ConfidenceTier::from_sample_size(samples.len()));
    }

    #[test]
    fn prop_volatility_score_matches_rating(
        games in prop::collection::vec((0.0f64..200.0, 0.0f64..15.0), 0..17),
    ) {
        let log: Vec<GameStatRecord> = games
            .iter()
            .enumerate()
            .map(|(week, (yards, rec))| wr_game(week as u32 + 1, *yards, *rec))
            .collect();
        let result = volatility(&log, &Position::WR);
        prop_assert!(result.score <= 100);
        prop_assert_eq!(result.rating, VolatilityRating::from_score(result.score));
        prop_assert_eq!(result.score as f64, 100.0 - result.consistency.round());
    }

    #[test]
    fn prop_stat_analysis_bounds(
        games in prop::collection::vec((0.0f64..200.0, 0.0f64..15.0), 0..17),
    ) {
        let log: Vec<GameStatRecord> = games
            .iter()
            .enumerate()
            .map(|(week, (yards, rec))| wr_game(week as u32 + 1, *yards, *rec))
            .collect();
        let analysis = analyze_performance(&Position::WR, &log);
        for stat in &analysis.stats {
            prop_assert!(stat.games_with_data <= stat.total_games);
            prop_assert!((0.0..=100.0).contains(&stat.consistency));
            prop_assert!((0.0..=95.0).contains(&stat.confidence));
        }
    }
}
