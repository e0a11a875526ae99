//! Statistic keys, positions and per-game records.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Every statistic the engine knows how to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatKey {
    PassingYards,
    PassingTouchdowns,
    PassingAttempts,
    Completions,
    Interceptions,
    RushingYards,
    RushingAttempts,
    RushingTouchdowns,
    Receptions,
    ReceivingYards,
    ReceivingTouchdowns,
    Targets,
}

impl StatKey {
    pub const ALL: [StatKey; 12] = [
        StatKey::PassingYards,
        StatKey::PassingTouchdowns,
        StatKey::PassingAttempts,
        StatKey::Completions,
        StatKey::Interceptions,
        StatKey::RushingYards,
        StatKey::RushingAttempts,
        StatKey::RushingTouchdowns,
        StatKey::Receptions,
        StatKey::ReceivingYards,
        StatKey::ReceivingTouchdowns,
        StatKey::Targets,
    ];

    /// Key as it appears in game-log feeds (e.g. "PassingYards")
    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::PassingYards => "PassingYards",
            StatKey::PassingTouchdowns => "PassingTouchdowns",
            StatKey::PassingAttempts => "PassingAttempts",
            StatKey::Completions => "Completions",
            StatKey::Interceptions => "Interceptions",
            StatKey::RushingYards => "RushingYards",
            StatKey::RushingAttempts => "RushingAttempts",
            StatKey::RushingTouchdowns => "RushingTouchdowns",
            StatKey::Receptions => "Receptions",
            StatKey::ReceivingYards => "ReceivingYards",
            StatKey::ReceivingTouchdowns => "ReceivingTouchdowns",
            StatKey::Targets => "Targets",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = RecordError;

    /// Case-insensitive; underscores and spaces are ignored ("passing_yards" works)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String =
            s.chars().filter(|c| *c != '_' && *c != ' ').collect::<String>().to_ascii_lowercase();
        StatKey::ALL
            .iter()
            .find(|key| key.as_str().to_ascii_lowercase() == wanted)
            .copied()
            .ok_or_else(|| RecordError::UnknownStat(s.to_string()))
    }
}

/// Roster position, used to pick the relevant statistics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    /// Any position without a dedicated stat table (K, DEF, unknown input)
    Other(String),
}

impl Position {
    /// Parse a position label. Never fails: unsupported labels become `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "QB" => Position::QB,
            "RB" => Position::RB,
            "WR" => Position::WR,
            "TE" => Position::TE,
            _ => Position::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::Other(label) => label.as_str(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Position::parse(&label)
    }
}

impl From<&str> for Position {
    fn from(label: &str) -> Self {
        Position::parse(label)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

/// One completed game's statistics for one player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStatRecord {
    /// Week number, when the feed provides one
    pub week: Option<u32>,
    /// Statistic values; absent keys mean the feed had no value for that game
    pub stats: BTreeMap<StatKey, f64>,
}

impl GameStatRecord {
    /// Create an empty record
    pub fn new(week: Option<u32>) -> Self {
        Self { week, stats: BTreeMap::new() }
    }

    /// Builder-style insert
    pub fn with(mut self, stat: StatKey, value: f64) -> Self {
        self.stats.insert(stat, value);
        self
    }

    pub fn insert(&mut self, stat: StatKey, value: f64) {
        self.stats.insert(stat, value);
    }

    pub fn get(&self, stat: StatKey) -> Option<f64> {
        self.stats.get(&stat).copied()
    }

    /// Validate a single raw feed entry
    pub fn parse_entry(key: &str, value: f64) -> Result<(StatKey, f64), RecordError> {
        let stat: StatKey = key.parse()?;
        if !value.is_finite() || value < 0.0 {
            return Err(RecordError::InvalidValue { stat, value });
        }
        Ok((stat, value))
    }
}

/// Values of one statistic across a game log, in the caller's order.
/// Records without the statistic are skipped.
pub fn stat_series(game_log: &[GameStatRecord], stat: StatKey) -> Vec<f64> {
    game_log.iter().filter_map(|record| record.get(stat)).collect()
}

/// The last `n` entries of `samples` (all of them when `n` exceeds the length)
pub fn recent(samples: &[f64], n: usize) -> &[f64] {
    &samples[samples.len().saturating_sub(n)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_key_parsing() {
        assert_eq!("ReceivingYards".parse::<StatKey>().unwrap(), StatKey::ReceivingYards);
        assert_eq!("receiving_yards".parse::<StatKey>().unwrap(), StatKey::ReceivingYards);
        assert_eq!("passing touchdowns".parse::<StatKey>().unwrap(), StatKey::PassingTouchdowns);
        assert!(matches!(
            "FieldGoals".parse::<StatKey>(),
            Err(RecordError::UnknownStat(key)) if key == "FieldGoals"
        ));
    }

    #[test]
    fn test_stat_key_display_matches_serde() {
        for key in StatKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{key}\""));
        }
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(Position::parse("qb"), Position::QB);
        assert_eq!(Position::parse(" WR "), Position::WR);
        assert_eq!(Position::parse("KICKER"), Position::Other("KICKER".to_string()));
        assert_eq!(Position::parse("KICKER").as_str(), "KICKER");
    }

    #[test]
    fn test_position_serde() {
        let position: Position = serde_json::from_str("\"te\"").unwrap();
        assert_eq!(position, Position::TE);
        assert_eq!(serde_json::to_string(&Position::RB).unwrap(), "\"RB\"");
    }

    #[test]
    fn test_parse_entry_rejects_bad_entries() {
        assert_eq!(
            GameStatRecord::parse_entry("Receptions", 6.0).unwrap(),
            (StatKey::Receptions, 6.0)
        );

        let err = GameStatRecord::parse_entry("Receptions", -1.0).unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { stat: StatKey::Receptions, .. }));

        let err = GameStatRecord::parse_entry("Receptions", f64::NAN).unwrap_err();
        assert!(matches!(err, RecordError::InvalidValue { .. }));

        let err = GameStatRecord::parse_entry("Tackles", 4.0).unwrap_err();
        assert!(matches!(err, RecordError::UnknownStat(_)));
    }

    #[test]
    fn test_stat_series_skips_missing() {
        let log = vec![
            GameStatRecord::new(Some(1)).with(StatKey::RushingYards, 40.0),
            GameStatRecord::new(Some(2)).with(StatKey::Receptions, 2.0),
            GameStatRecord::new(Some(3)).with(StatKey::RushingYards, 0.0),
        ];
        assert_eq!(stat_series(&log, StatKey::RushingYards), vec![40.0, 0.0]);
        assert!(stat_series(&log, StatKey::Targets).is_empty());
    }

    #[test]
    fn test_recent_takes_tail() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(recent(&samples, 2), &[3.0, 4.0]);
        assert_eq!(recent(&samples, 10), &samples);
        assert!(recent(&samples, 0).is_empty());
    }
}
