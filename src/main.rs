//! Quadle - CLI
//!
//! Four simultaneous Wordle boards sharing one keyboard, in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use quadle::{
    commands::run_simple,
    interactive::{App, run_tui},
    wordlists::WordList,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quadle",
    about = "Four simultaneous Wordle boards sharing one keyboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for target selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Answer word list file (defaults to the embedded list)
    #[arg(long, global = true, requires = "valid")]
    answers: Option<PathBuf>,

    /// Extra accepted-guess word list file (defaults to the embedded list)
    #[arg(long, global = true, requires = "answers")]
    valid: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,
}

fn load_wordlists(cli: &Cli) -> Result<WordList> {
    match (&cli.answers, &cli.valid) {
        (Some(answers), Some(valid)) => Ok(WordList::from_files(answers, valid)?),
        _ => Ok(WordList::embedded()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlists(&cli)?;
    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&words, rng);
            run_tui(app)
        }
        Commands::Simple => {
            run_simple(&words, &mut rng as &mut dyn RngCore).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
