use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Hand, card_symbol, draw_hand, parse_hand, symbolize_expression};
use crate::solver::HandSolver;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Twentyfour - Solve the 24 card game
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find all ways to combine four cards with + - * / to reach 24")]
#[command(version)]
pub struct CliArgs {
    /// Four card symbols to solve directly (e.g. `A 5 8 Q`); omit to play interactively
    pub cards: Vec<String>,

    /// Seed for random draws, for reproducible hands
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if !args.cards.is_empty() {
        let hand = parse_hand(&args.cards).context("Invalid hand")?;
        report_hand(hand);
        return Ok(());
    }

    play_loop(&mut rng)
}

/// Interactive menu loop: draw or enter hands until the player quits.
fn play_loop(rng: &mut StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("=== 24 game ===");
        println!("1. draw a random hand");
        println!("2. enter a hand");
        println!("q. quit");
        print!("choice: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim() {
            "1" => {
                let hand = draw_hand(rng);
                info!("Drew random hand {:?}", hand);
                report_hand(hand);
            }
            "2" => {
                if let Some(hand) = read_hand(&mut lines)? {
                    report_hand(hand);
                }
            }
            "q" | "Q" => {
                println!("Thanks for playing!");
                return Ok(());
            }
            other => println!("Unrecognized choice: '{}'", other),
        }
    }
}

/// Prompt for four cards on one line; re-prompting is left to the menu loop.
fn read_hand<I>(lines: &mut I) -> Result<Option<Hand>>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("Enter four cards separated by spaces (A, 2-10, J, Q, K):");
    print!("cards: ");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(None);
    };
    let tokens: Vec<String> = line?.split_whitespace().map(str::to_string).collect();

    match parse_hand(&tokens) {
        Ok(hand) => Ok(Some(hand)),
        Err(err) => {
            warn!("Rejected hand input: {}", err);
            println!("{}", err);
            Ok(None)
        }
    }
}

/// Solve one hand and print its solutions with card symbols.
fn report_hand(hand: Hand) {
    let symbols: Vec<String> = hand.iter().map(|&card| card_symbol(card)).collect();
    println!("Hand: {}  [values: {:?}]", symbols.join(" "), hand);

    let solver = HandSolver::new();
    let solutions = solver.find_solutions(hand);

    if solutions.is_empty() {
        println!("No solution.");
    } else {
        println!("Found {} solution(s):", solutions.len());
        for (index, solution) in solutions.iter().enumerate() {
            println!("{}. {} = 24", index + 1, symbolize_expression(solution));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs {
            cards: vec!["A".to_string(), "5".to_string(), "8".to_string(), "Q".to_string()],
            seed: Some(7),
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.cards.len(), 4);
        assert_eq!(args.seed, Some(7));
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
