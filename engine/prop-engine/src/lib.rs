//! # Prop Engine
//!
//! Statistical estimation engine for player prop lines.
//!
//! Given a player's position and the ordered list of their per-game statistic records,
//! the engine estimates the probability of meeting a threshold in the next game,
//! rates how volatile the player's output has been, and classifies their short-term
//! trend. Every operation is a pure function of its inputs: nothing is cached,
//! persisted or fetched.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod performance;
pub mod probability;
pub mod stats;
pub mod summary;
pub mod trend;
pub mod volatility;

#[cfg(test)]
mod tests;

pub use catalog::{stats_for_position, StatDefinition};
pub use config::PropConfig;
pub use engine::{PlayerReport, PropEngine, StatLine};
pub use error::{ConfigError, RecordError};
pub use performance::{analyze_performance, PerformanceAnalysis, StatAnalysis};
pub use probability::{estimate_probability, ConfidenceTier, ProbabilityResult};
pub use stats::{recent, stat_series, GameStatRecord, Position, StatKey};
pub use trend::{trend, Trend};
pub use volatility::{volatility, StatConsistency, VolatilityRating, VolatilityResult};

/// Current version of the prop engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
