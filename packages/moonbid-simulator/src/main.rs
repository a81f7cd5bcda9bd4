//! Moon Bid simulator: plays AI-only games in memory and writes per-game
//! records for strategy comparison.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use moonbid::ai::{create_ai, AiConfig, AiPlayer};
use moonbid::domain::derive_ai_seed;
use moonbid::{GameConfig, MoonPhase, Season, Suit};
use tracing::{info, warn};

use metrics::GameRecord;
use output::OutputWriter;
use simulator::{GameResult, Simulator, TableSetup};
use types::{AiType, ModeArg, OutputFormat};

#[derive(Parser)]
#[command(name = "moonbid-simulator")]
#[command(about = "In-memory Moon Bid simulator for comparing AI strategies")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seats at the table (2 to 8)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// AI type for every seat
    #[arg(long, default_value = "heuristic")]
    ai: AiType,

    #[arg(long, default_value = "standard")]
    mode: ModeArg,

    /// Moon phase, e.g. full_moon or "Waxing Gibbous"
    #[arg(long, default_value = "full_moon")]
    moon_phase: MoonPhase,

    #[arg(long, default_value = "spring")]
    season: Season,

    /// Rounds per game (overrides MOONBID_TOTAL_ROUNDS)
    #[arg(long)]
    rounds: Option<u32>,

    /// Cards dealt per player (overrides MOONBID_CARDS_PER_PLAYER)
    #[arg(long)]
    hand_size: Option<u8>,

    /// Trump suit (overrides MOONBID_TRUMP_SUIT)
    #[arg(long)]
    trump: Option<Suit>,

    /// Add the five special cards to the deck
    #[arg(long)]
    special_cards: bool,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the game records with gzip
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let setup = table_setup(&args)?;
    if args.show_output {
        info!(
            games = args.games,
            players = setup.players,
            ai = args.ai.name(),
            mode = %setup.game_mode,
            moon_phase = %setup.moon_phase,
            season = %setup.season,
            "Starting simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(game_num)),
            None => rand::random(),
        };

        match run_game(&setup, args.ai, game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let timestamp = time::OffsetDateTime::now_utc()
                    .format(&time::format_description::well_known::Rfc3339)
                    .unwrap_or_default();
                let record =
                    GameRecord::new(game_num, args.ai.name(), &result, duration_ms, timestamp);
                if let Err(e) = output_writer.write_game(&record) {
                    warn!("Failed to write record for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!("Game {} completed: scores={:?}", game_num, result.final_scores());
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (records_path, csv_path) = output_writer.output_paths();
    let (records_path, csv_path) = (records_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Game records written to: {}", records_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

/// Environment configuration with command-line overrides on top.
fn table_setup(args: &Args) -> Result<TableSetup, Box<dyn std::error::Error>> {
    let mut config = GameConfig::from_env()?;
    if let Some(rounds) = args.rounds {
        config.total_rounds = rounds;
    }
    if let Some(hand_size) = args.hand_size {
        config.cards_per_player = hand_size;
    }
    if args.trump.is_some() {
        config.trump_suit = args.trump;
    }
    if args.special_cards {
        config.include_special_cards = true;
    }
    let setup = TableSetup {
        players: args.players,
        game_mode: args.mode.into(),
        moon_phase: args.moon_phase,
        season: args.season,
        config,
    };
    setup.validate()?;
    Ok(setup)
}

fn run_game(
    setup: &TableSetup,
    ai: AiType,
    game_seed: u64,
) -> Result<GameResult, Box<dyn std::error::Error>> {
    let ais = (0..setup.players)
        .map(|seat| create_ai_player(ai, derive_ai_seed(game_seed, seat)))
        .collect::<Result<Vec<_>, _>>()?;
    let simulator = Simulator::new(setup, &ais);
    simulator.simulate_game(game_seed).map_err(|e| e.into())
}

fn create_ai_player(ai: AiType, seed: u64) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    create_ai(ai.name(), &AiConfig::with_seed(seed))
        .ok_or_else(|| format!("Unknown AI type: {}", ai.name()).into())
}

fn print_summary(results: &[GameResult], errors: usize, elapsed: Duration, total_games: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Total games: {}", total_games);
    println!("Successful: {}", results.len());
    println!("Errors: {}", errors);
    println!("Elapsed: {:.2}s", elapsed.as_secs_f64());
    if !results.is_empty() {
        println!(
            "Games/sec: {:.1}",
            results.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
    }

    let Some(first) = results.first() else {
        return;
    };
    let seats = first.final_state.players.len();
    let mut wins = vec![0usize; seats];
    let mut totals = vec![0i64; seats];
    for result in results {
        let scores = result.final_scores();
        let top = scores.iter().copied().max().unwrap_or(0);
        for (seat, score) in scores.iter().enumerate().take(seats) {
            totals[seat] += i64::from(*score);
            if *score == top {
                wins[seat] += 1;
            }
        }
    }

    println!("\nSeat  Wins  Avg score");
    for seat in 0..seats {
        println!(
            "{:>4}  {:>4}  {:>9.1}",
            seat,
            wins[seat],
            totals[seat] as f64 / results.len() as f64
        );
    }
}
