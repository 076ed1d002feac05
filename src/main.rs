use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use standings_engine::config::load_scoring_system;
use standings_engine::models::{
    DataWarning, Event, EventStandings, League, LeagueSnapshot, LeagueStandings, ScoringSystem,
    Standings,
};
use standings_engine::{format_rate, rank_event, rank_league};

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Deterministic ranking and scoring engine for recurring competitive leagues")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank one event from a league snapshot
    Event {
        /// Path to the league snapshot (JSON)
        #[arg(long, default_value = "./league.json")]
        snapshot: PathBuf,

        /// Event to rank, by id or name
        event: String,

        /// Print standings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank the whole league
    League {
        /// Path to the league snapshot (JSON)
        #[arg(long, default_value = "./league.json")]
        snapshot: PathBuf,

        /// Scoring system TOML; overrides the league's own configuration
        #[arg(long)]
        scoring: Option<PathBuf>,

        /// Only count events on or before this date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        /// Print standings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a scoring system file
    CheckScoring {
        /// Path to the scoring system TOML
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting standings v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Event {
            snapshot,
            event,
            json,
        } => {
            let league_snapshot = load_snapshot(&snapshot)?;
            let event_snapshot = match league_snapshot.find_event(&event) {
                Some(found) => found,
                None => bail!("Event not found in snapshot: {}", event),
            };

            let players = league_snapshot.event_players(event_snapshot);
            let standings = rank_event(&event_snapshot.event, &players, &event_snapshot.matches);

            if json {
                let output = Standings::Event(standings);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_event_table(&event_snapshot.event, &standings);
                report_warnings(&standings.warnings);
            }
        }
        Commands::League {
            snapshot,
            scoring,
            until,
            json,
        } => {
            let mut league_snapshot = load_snapshot(&snapshot)?;

            if let Some(until) = until {
                let cutoff = NaiveDate::parse_from_str(&until, "%Y-%m-%d").with_context(|| {
                    format!("Invalid --until date (expected YYYY-MM-DD): {}", until)
                })?;
                league_snapshot = league_snapshot.through(cutoff);
                tracing::info!("Counting events through {}", cutoff);
            }

            let file_scoring = match scoring {
                Some(path) => Some(load_scoring_system(&path)?),
                None => None,
            };
            let default_scoring = ScoringSystem::default_league();
            let active = match &file_scoring {
                Some(loaded) => loaded,
                None => league_snapshot.league.scoring_or(&default_scoring),
            };

            let standings = rank_league(&league_snapshot, active)?;

            if json {
                let output = Standings::League(standings);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_league_table(&league_snapshot.league, &standings);
                report_warnings(&standings.warnings);
            }
        }
        Commands::CheckScoring { path } => match load_scoring_system(&path) {
            Ok(scoring) => {
                println!("\n=== Scoring System OK ===");
                println!("Formulas:");
                for formula in scoring.sorted_formulas() {
                    println!(
                        "  {}. {} x {}",
                        formula.order, formula.multiplier, formula.metric
                    );
                }
                if scoring.tie_breakers.is_empty() {
                    println!("Tie-breakers: none (name fallback only)");
                } else {
                    println!("Tie-breakers:");
                    for breaker in scoring.sorted_tie_breakers() {
                        println!("  {}. {}", breaker.order, breaker.kind);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Scoring system rejected: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Load and parse a league snapshot file.
fn load_snapshot(path: &PathBuf) -> Result<LeagueSnapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    let snapshot: LeagueSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;

    tracing::info!(
        "Loaded league {}: {} players, {} events",
        snapshot.league.name,
        snapshot.players.len(),
        snapshot.events.len()
    );

    Ok(snapshot)
}

fn print_event_table(event: &Event, standings: &EventStandings) {
    println!("\n=== {} Standings ===", event.name);
    println!(
        "{:<5} {:<24} {:>4} {:>7} {:>7} {:>7} {:>7}  {}",
        "Rank", "Player", "Pts", "MW%", "OMW%", "GW%", "OGW%", "Record"
    );
    for row in &standings.standings {
        println!(
            "{:<5} {:<24} {:>4} {:>7} {:>7} {:>7} {:>7}  {}",
            row.rank,
            row.player_name,
            row.stats.match_points,
            format_rate(row.stats.match_win_percentage),
            format_rate(row.stats.opponents_match_win_percentage),
            format_rate(row.stats.game_win_percentage),
            format_rate(row.stats.opponents_game_win_percentage),
            row.stats.tally.record(),
        );
    }
}

fn print_league_table(league: &League, standings: &LeagueStandings) {
    println!("\n=== {} Standings ===", league.name);
    println!(
        "{:<5} {:<24} {:>6} {:>7} {:>12} {:>7}  {}",
        "Rank", "Player", "Points", "Events", "1st/2nd/3rd", "MW%", "Record"
    );
    for row in &standings.standings {
        let podium = format!(
            "{}/{}/{}",
            row.placements.first, row.placements.second, row.placements.third
        );
        println!(
            "{:<5} {:<24} {:>6} {:>7} {:>12} {:>7}  {}",
            row.rank,
            row.player_name,
            row.league_points,
            row.events_attended,
            podium,
            format_rate(row.stats.match_win_percentage),
            row.stats.tally.record(),
        );
    }
}

fn report_warnings(warnings: &[DataWarning]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("\n{} data warning(s):", warnings.len());
    for warning in warnings {
        eprintln!("  - {}", warning);
    }
}
