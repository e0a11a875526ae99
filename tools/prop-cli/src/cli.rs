//! # Command Line Interface
//!
//! Loads a player's game log, runs it through the prop engine and prints the result.

use crate::gamelog::PlayerGameLog;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use prop_engine::catalog;
use prop_engine::{
    PerformanceAnalysis, PlayerReport, Position, ProbabilityResult, PropEngine, StatDefinition,
    StatKey, Trend, VolatilityRating, VolatilityResult,
};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Prop probability CLI
#[derive(Parser)]
#[command(name = "prop-cli")]
#[command(about = "Threshold probabilities, volatility and trends from a player's game log")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (compact, pretty, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Only use the last N games for probabilities
    #[arg(long, global = true)]
    pub recent: Option<usize>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the statistics tracked for a position
    Stats {
        /// Position (QB, RB, WR, TE, ...)
        #[arg(short, long)]
        position: String,
    },
    /// Probability of meeting a threshold
    Probability {
        /// Game log JSON file
        #[arg(short, long)]
        file: PathBuf,
        /// Statistic key (e.g. ReceivingYards)
        #[arg(short, long, value_parser = parse_stat)]
        stat: StatKey,
        /// Threshold to meet or exceed
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: f64,
    },
    /// Short-term trend of one statistic
    Trend {
        /// Game log JSON file
        #[arg(short, long)]
        file: PathBuf,
        /// Statistic key (e.g. ReceivingYards)
        #[arg(short, long, value_parser = parse_stat)]
        stat: StatKey,
    },
    /// Volatility rating
    Volatility {
        /// Game log JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Per-statistic performance summary
    Analyze {
        /// Game log JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Full player report
    Report {
        /// Game log JSON file
        #[arg(short, long)]
        file: PathBuf,
        /// Threshold override, e.g. ReceivingYards=75 (repeatable)
        #[arg(short, long = "threshold", value_parser = parse_threshold)]
        thresholds: Vec<(StatKey, f64)>,
    },
}

fn parse_stat(s: &str) -> Result<StatKey, String> {
    s.parse().map_err(|e: prop_engine::RecordError| e.to_string())
}

fn parse_threshold(s: &str) -> Result<(StatKey, f64), String> {
    let (key, value) = s.split_once('=').ok_or_else(|| format!("expected STAT=VALUE, got '{s}'"))?;
    let stat = parse_stat(key.trim())?;
    let value = value.trim().parse::<f64>().map_err(|e| format!("invalid threshold '{value}': {e}"))?;
    Ok((stat, value))
}

/// CLI handler
pub struct CliHandler {
    engine: PropEngine,
    json: bool,
}

impl CliHandler {
    /// Create new CLI handler
    pub fn new(engine: PropEngine, json: bool) -> Self {
        Self { engine, json }
    }

    /// Handle CLI commands
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Stats { position } => {
                self.show_stats(&Position::parse(&position))?;
            }
            Commands::Probability { file, stat, threshold } => {
                let log = PlayerGameLog::load_from_file(&file).await?;
                let result = self.engine.estimate_for_stat(&log.to_records(), stat, threshold);
                self.show_probability(&log, stat, threshold, &result)?;
            }
            Commands::Trend { file, stat } => {
                let log = PlayerGameLog::load_from_file(&file).await?;
                let trend = self.engine.trend_for_stat(&log.to_records(), stat);
                self.show_trend(&log, stat, trend)?;
            }
            Commands::Volatility { file } => {
                let log = PlayerGameLog::load_from_file(&file).await?;
                let result = self.engine.volatility(&log.to_records(), &log.position());
                self.show_volatility(&log, &result)?;
            }
            Commands::Analyze { file } => {
                let log = PlayerGameLog::load_from_file(&file).await?;
                let analysis = self.engine.analyze_performance(&log.position(), &log.to_records());
                self.show_analysis(&log, &analysis)?;
            }
            Commands::Report { file, thresholds } => {
                let log = PlayerGameLog::load_from_file(&file).await?;
                let thresholds: HashMap<StatKey, f64> = thresholds.into_iter().collect();
                let report =
                    self.engine.player_report(&log.position(), &log.to_records(), &thresholds);
                self.show_report(&log, &report)?;
            }
        }
        Ok(())
    }

    fn show_stats(&self, position: &Position) -> Result<()> {
        let stats = self.engine.stats_for_position(position);
        if self.json {
            return print_json(&stats);
        }

        println!("{}", format!("📋 Stats for {position}").bold());
        println!("{}", "=".repeat(50));
        for def in stats {
            print_definition(def);
        }
        Ok(())
    }

    fn show_probability(
        &self,
        log: &PlayerGameLog,
        stat: StatKey,
        threshold: f64,
        result: &ProbabilityResult,
    ) -> Result<()> {
        if self.json {
            return print_json(result);
        }

        print_header(log, &format!("🎯 {} {threshold}+", catalog::label(stat)));
        println!("Probability:  {}", colored_probability(result.probability));
        println!("Hit rate:     {}%", result.hit_rate);
        println!("Average:      {:.1} (σ {:.1})", result.mean, result.std_dev);
        println!("Games:        {} ({} confidence)", result.games, result.confidence);
        println!("Window:       {}", window_label(self.engine.config().analysis.recent_window));
        if catalog::definition(&log.position(), stat).is_none() {
            println!(
                "{}",
                format!("{} is not a headline stat for {}", stat, log.position()).dimmed()
            );
        }
        Ok(())
    }

    fn show_trend(&self, log: &PlayerGameLog, stat: StatKey, trend: Trend) -> Result<()> {
        if self.json {
            return print_json(&trend);
        }

        print_header(log, &format!("📈 {} trend", catalog::label(stat)));
        println!("{}", colored_trend(trend));
        Ok(())
    }

    fn show_volatility(&self, log: &PlayerGameLog, result: &VolatilityResult) -> Result<()> {
        if self.json {
            return print_json(result);
        }

        print_header(log, "🌪️  Volatility");
        print_volatility(result);
        Ok(())
    }

    fn show_analysis(&self, log: &PlayerGameLog, analysis: &PerformanceAnalysis) -> Result<()> {
        if self.json {
            return print_json(analysis);
        }

        print_header(log, "📊 Performance");
        print_analysis(analysis);
        Ok(())
    }

    fn show_report(&self, log: &PlayerGameLog, report: &PlayerReport) -> Result<()> {
        if self.json {
            return print_json(report);
        }

        print_header(log, "🏈 Player report");
        println!("{:<18} {:>9} {:>6} {:>6} {:>8}  {}", "Stat", "Line", "Prob", "Hit", "Conf", "Trend");
        for line in &report.lines {
            let marker = if line.suggested { "*" } else { " " };
            println!(
                "{:<18} {:>8}{} {:>6} {:>5}% {:>8}  {}",
                line.label,
                line.threshold,
                marker,
                colored_probability(line.probability.probability),
                line.probability.hit_rate,
                line.probability.confidence.to_string(),
                colored_trend(line.trend)
            );
        }
        println!("{}", "* suggested line".dimmed());
        println!();
        print_volatility(&report.volatility);
        println!();
        print_analysis(&report.performance);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn window_label(recent_window: Option<usize>) -> String {
    match recent_window {
        Some(games) => format!("last {games} games"),
        None => "all games".to_string(),
    }
}

fn print_header(log: &PlayerGameLog, title: &str) {
    println!(
        "{} ({} {}, {} games, {})",
        title.bold(),
        log.name,
        log.position,
        log.games.len(),
        log.season
    );
    println!("{}", "=".repeat(50));
}

fn print_definition(def: &StatDefinition) {
    println!(
        "{} {:<18} {:<20} range {}-{} step {}",
        def.icon, def.label, def.key, def.min, def.max, def.step
    );
}

fn print_volatility(result: &VolatilityResult) {
    let rating = match result.rating {
        VolatilityRating::Low => result.rating.to_string().green(),
        VolatilityRating::Medium => result.rating.to_string().yellow(),
        VolatilityRating::High => result.rating.to_string().red(),
    };
    println!("Volatility:   {} ({})", result.score, rating);
    println!("Consistency:  {:.1}", result.consistency);
    println!("CV (primary): {:.1}%", result.coefficient_of_variation);
    for entry in &result.breakdown {
        println!(
            "  {:<18} weight {:.1}  consistency {:>5.1}  wow {:>5.1}%  off games {}",
            catalog::label(entry.stat),
            entry.weight,
            entry.detail.consistency,
            entry.detail.avg_week_change_pct,
            entry.detail.off_games.len()
        );
    }
}

fn print_analysis(analysis: &PerformanceAnalysis) {
    println!(
        "{:<18} {:>7} {:>7} {:>7} {:>7} {:>6} {:>7} {:>6}",
        "Stat", "Avg", "Median", "Min", "Max", "Cons", "Trend", "Conf"
    );
    for stat in &analysis.stats {
        if !stat.has_data() {
            println!("{:<18} {}", stat.label, "no data".dimmed());
            continue;
        }
        println!(
            "{:<18} {:>7.1} {:>7.1} {:>7.1} {:>7.1} {:>6.0} {:>+6.0}% {:>6.0}",
            stat.label,
            stat.average,
            stat.median,
            stat.min,
            stat.max,
            stat.consistency,
            stat.recent_trend * 100.0,
            stat.confidence
        );
    }
    println!(
        "Overall: confidence {:.0}, volatility {:.0}, trend {}",
        analysis.overall_confidence,
        analysis.overall_volatility,
        colored_trend(analysis.overall_trend)
    );
}

fn colored_probability(probability: u8) -> ColoredString {
    let text = format!("{probability}%");
    match probability {
        70..=100 => text.green(),
        40..=69 => text.yellow(),
        _ => text.red(),
    }
}

fn colored_trend(trend: Trend) -> ColoredString {
    match trend {
        Trend::Increasing => "▲ increasing".green(),
        Trend::Decreasing => "▼ decreasing".red(),
        Trend::Stable => "■ stable".normal(),
    }
}
