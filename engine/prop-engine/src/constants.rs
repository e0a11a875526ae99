// Fixed policy constants for the estimators.
//
// These are tuned values carried over from the product's first release. They are
// not part of the configuration surface: changing any of them changes every
// published number.

// Confidence tiers (sample count)
pub const HIGH_CONFIDENCE_MIN_GAMES: usize = 8;
pub const MEDIUM_CONFIDENCE_MIN_GAMES: usize = 5;

// Trend analyzer
pub const TREND_MIN_GAMES: usize = 4;
pub const TREND_RECENT_GAMES: usize = 3;
pub const TREND_BAND_PCT: f64 = 15.0;

// Volatility analyzer
pub const VOLATILITY_MIN_GAMES: usize = 2;
pub const OFF_GAME_RATIO: f64 = 0.7;
pub const WEEK_CHANGE_WEIGHT: f64 = 0.6;
pub const OFF_GAME_WEIGHT: f64 = 0.4;
pub const OFF_GAME_PENALTY: f64 = 2.0;
pub const NEUTRAL_VOLATILITY_SCORE: u8 = 50;
pub const LOW_VOLATILITY_BELOW: u8 = 35;
pub const MEDIUM_VOLATILITY_BELOW: u8 = 65;

// Performance analyzer
pub const PERFORMANCE_RECENT_GAMES: usize = 3;
pub const PERFORMANCE_TREND_BAND: f64 = 0.1;
pub const HEADLINE_STATS: usize = 6;
pub const MAX_STAT_CONFIDENCE: f64 = 95.0;
pub const CONSISTENCY_CONFIDENCE_WEIGHT: f64 = 0.7;
pub const SAMPLE_BONUS_PER_GAME: f64 = 3.0;
pub const SAMPLE_BONUS_MAX_GAMES: usize = 10;

// Suggested over/under line
pub const HIGH_CONSISTENCY: f64 = 70.0;
pub const MEDIUM_CONSISTENCY: f64 = 50.0;
pub const HIGH_CONSISTENCY_LINE: f64 = 0.85;
pub const MEDIUM_CONSISTENCY_LINE: f64 = 0.80;
pub const LOW_CONSISTENCY_LINE: f64 = 0.70;
