//! Stat catalog: which statistics matter for each position, with the display
//! metadata the prop sliders need.

use crate::stats::{Position, StatKey};
use serde::Serialize;

/// Display metadata for one statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatDefinition {
    pub key: StatKey,
    pub label: &'static str,
    /// Smallest plausible single-game value
    pub min: f64,
    /// Largest plausible single-game value
    pub max: f64,
    /// Slider step
    pub step: f64,
    pub icon: &'static str,
}

const fn def(
    key: StatKey,
    label: &'static str,
    max: f64,
    step: f64,
    icon: &'static str,
) -> StatDefinition {
    StatDefinition { key, label, min: 0.0, max, step, icon }
}

static QB_STATS: [StatDefinition; 6] = [
    def(StatKey::PassingYards, "Passing Yards", 500.0, 5.0, "🎯"),
    def(StatKey::PassingTouchdowns, "Passing TDs", 6.0, 1.0, "🏈"),
    def(StatKey::Completions, "Completions", 45.0, 1.0, "✅"),
    def(StatKey::PassingAttempts, "Pass Attempts", 60.0, 1.0, "📊"),
    def(StatKey::Interceptions, "Interceptions", 4.0, 1.0, "🚫"),
    def(StatKey::RushingYards, "Rushing Yards", 120.0, 5.0, "🏃"),
];

static RB_STATS: [StatDefinition; 5] = [
    def(StatKey::RushingYards, "Rushing Yards", 200.0, 5.0, "🏃"),
    def(StatKey::RushingAttempts, "Rush Attempts", 35.0, 1.0, "📊"),
    def(StatKey::RushingTouchdowns, "Rushing TDs", 4.0, 1.0, "🏈"),
    def(StatKey::Receptions, "Receptions", 12.0, 1.0, "🙌"),
    def(StatKey::ReceivingYards, "Receiving Yards", 120.0, 5.0, "📏"),
];

static RECEIVER_STATS: [StatDefinition; 4] = [
    def(StatKey::ReceivingYards, "Receiving Yards", 200.0, 5.0, "📏"),
    def(StatKey::Receptions, "Receptions", 15.0, 1.0, "🙌"),
    def(StatKey::ReceivingTouchdowns, "Receiving TDs", 3.0, 1.0, "🏈"),
    def(StatKey::Targets, "Targets", 18.0, 1.0, "🎯"),
];

static DEFAULT_STATS: [StatDefinition; 2] = [
    def(StatKey::ReceivingYards, "Receiving Yards", 150.0, 5.0, "📏"),
    def(StatKey::RushingYards, "Rushing Yards", 150.0, 5.0, "🏃"),
];

/// Ordered statistics relevant to `position`. Never empty.
pub fn stats_for_position(position: &Position) -> &'static [StatDefinition] {
    match position {
        Position::QB => &QB_STATS,
        Position::RB => &RB_STATS,
        Position::WR | Position::TE => &RECEIVER_STATS,
        Position::Other(_) => &DEFAULT_STATS,
    }
}

/// Look up the definition of `stat` for `position`, if the position tracks it
pub fn definition(position: &Position, stat: StatKey) -> Option<&'static StatDefinition> {
    stats_for_position(position).iter().find(|def| def.key == stat)
}

/// Human label for a statistic, independent of position
pub fn label(stat: StatKey) -> &'static str {
    [&QB_STATS[..], &RB_STATS[..], &RECEIVER_STATS[..]]
        .iter()
        .flat_map(|table| table.iter())
        .find(|def| def.key == stat)
        .map(|def| def.label)
        .unwrap_or_else(|| stat.as_str())
}
