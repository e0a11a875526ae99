//! Game-log files: one player's weekly stat lines as exported by the stats pipeline.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use prop_engine::{GameStatRecord, Position, RecordError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// A player's game log for one season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerGameLog {
    /// Feed player ID
    pub player_id: String,
    /// Player name (e.g., "Josh Allen")
    pub name: String,
    /// Position (QB, RB, WR, TE, K, DEF)
    pub position: String,
    /// Team abbreviation (e.g., "BUF")
    pub team: String,
    /// Season year
    pub season: String,
    /// When this data was last updated
    pub last_updated: DateTime<Utc>,
    /// One entry per completed game
    pub games: Vec<WeeklyStatLine>,
}

/// One completed game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStatLine {
    /// Week number
    pub week: u32,
    /// Opponent team
    #[serde(default)]
    pub opponent: Option<String>,
    /// Raw stat values keyed by feed name; values may be null or strings
    #[serde(default)]
    pub stats: BTreeMap<String, Value>,
}

impl PlayerGameLog {
    /// Load a game log from a JSON file
    pub async fn load_from_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        info!("Loading game log from: {:?}", file_path);

        let json_content = tokio::fs::read_to_string(file_path)
            .await
            .with_context(|| format!("Failed to read game log {}", file_path.display()))?;
        let game_log: PlayerGameLog = serde_json::from_str(&json_content)
            .with_context(|| format!("Failed to parse game log {}", file_path.display()))?;

        info!("Loaded {} games for {} ({})", game_log.games.len(), game_log.name, game_log.position);
        Ok(game_log)
    }

    pub fn position(&self) -> Position {
        Position::parse(&self.position)
    }

    /// Engine records in chronological order, so the last entries are the most recent.
    ///
    /// Null, malformed, negative and non-finite values are replaced with 0; unknown
    /// statistic names are dropped. Each substitution is logged.
    pub fn to_records(&self) -> Vec<GameStatRecord> {
        let mut games: Vec<&WeeklyStatLine> = self.games.iter().collect();
        games.sort_by_key(|game| game.week);

        games
            .into_iter()
            .map(|game| {
                let mut record = GameStatRecord::new(Some(game.week));
                for (key, raw) in &game.stats {
                    let value = numeric_value(raw).unwrap_or_else(|| {
                        warn!(week = game.week, stat = %key, raw = %raw, "Non-numeric stat value, using 0");
                        0.0
                    });
                    match GameStatRecord::parse_entry(key, value) {
                        Ok((stat, value)) => record.insert(stat, value),
                        Err(RecordError::InvalidValue { stat, value }) => {
                            warn!(week = game.week, %stat, value, "Invalid stat value, using 0");
                            record.insert(stat, 0.0);
                        }
                        Err(RecordError::UnknownStat(name)) => {
                            warn!(week = game.week, stat = %name, "Unknown stat, skipping");
                        }
                    }
                }
                record
            })
            .collect()
    }
}

fn numeric_value(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::Null => Some(0.0),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
