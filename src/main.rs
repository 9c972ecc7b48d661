use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{
    io::{self, stdin, Write},
    path::PathBuf,
    str::FromStr,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod card;
mod columns;
mod decks;
mod error;
mod grammar;
mod record;
mod session;

use session::StudySession;

#[derive(Parser, Debug)]
#[command(about = "German grammar flashcards from a CSV vocabulary list")]
struct Args {
    /// CSV deck to study; the bundled sample deck is used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Keep the file's row order
    #[arg(long, default_value = "false")]
    no_shuffle: bool,
    /// Seed for a reproducible card order
    #[arg(long)]
    seed: Option<u64>,
    /// Print the resolved column mapping as JSON and exit
    #[arg(long, default_value = "false")]
    show_mapping: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Commands {
    Flip,
    Next,
    Prev,
    Shuffle,
    Help,
    Quit,
}

impl Commands {
    fn help() {
        println!("Available commands:");
        println!("  <enter>, \\f - Flip the card");
        println!("  \\n         - Next card");
        println!("  \\p         - Previous card");
        println!("  \\s         - Shuffle and start over");
        println!("  \\h         - Show this help message");
        println!("  \\q         - Quit the study session");
    }
}

impl FromStr for Commands {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "\\f" => Ok(Commands::Flip),
            "\\n" => Ok(Commands::Next),
            "\\p" => Ok(Commands::Prev),
            "\\s" => Ok(Commands::Shuffle),
            "\\h" => Ok(Commands::Help),
            "\\q" => Ok(Commands::Quit),
            _ => Err(format!("Unknown command '{}'", s)),
        }
    }
}

fn show_card(session: &StudySession) {
    let Some(record) = session.current() else {
        return;
    };
    let text = if session.show_answer() {
        card::answer(&record)
    } else {
        card::question(&record)
    };
    println!("\n{}", text);
}

fn run_session(session: &mut StudySession) -> Result<()> {
    if session.is_empty() {
        println!("No cards available for study. Exiting session.");
        return Ok(());
    }

    show_card(session);
    loop {
        print!("|> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = stdin()
            .read_line(&mut input)
            .context("Failed to read line from stdin")?;
        if read == 0 {
            break Ok(());
        }

        match Commands::from_str(input.trim()) {
            Ok(Commands::Flip) => session.flip(),
            Ok(Commands::Next) => {
                if !session.next() {
                    println!("Already at the last card.");
                    continue;
                }
            }
            Ok(Commands::Prev) => {
                if !session.prev() {
                    println!("Already at the first card.");
                    continue;
                }
            }
            Ok(Commands::Shuffle) => {
                session.shuffle();
                println!("Shuffled {} cards.", session.len());
            }
            Ok(Commands::Help) => {
                Commands::help();
                continue;
            }
            Ok(Commands::Quit) => {
                println!("Quitting...");
                break Ok(());
            }
            Err(e) => {
                eprintln!("Invalid command: {}. Type \\h for help.", e);
                continue;
            }
        }

        debug!(
            position = session.position(),
            row = ?session.current_index(),
            answer = session.show_answer(),
            "session moved"
        );
        show_card(session);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let source = decks::get_source(args.file);
    let deck = source
        .load()
        .with_context(|| format!("Failed to load deck '{}'", source.name()))?;

    if args.show_mapping {
        let json = serde_json::to_string_pretty(deck.mapping())
            .context("Failed to serialize column mapping")?;
        println!("{}", json);
        return Ok(());
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = StudySession::new(deck, !args.no_shuffle, rng);
    info!(deck = session.deck().name(), cards = session.len(), "Starting session");

    println!(
        "Starting session for {} cards from '{}'",
        session.len(),
        session.deck().name()
    );
    println!("Press enter to flip, type '\\h' for commands.");

    run_session(&mut session)?;

    Ok(())
}
