//! Simple interactive CLI mode
//!
//! Text-based quad game without TUI: one guess per line, four boards'
//! verdicts per guess.

use crate::core::{CellState, WORD_LEN};
use crate::engine::{BOARD_COUNT, BoardSnapshot, GameSession, Key, Status};
use crate::wordlists::WordSource;
use colored::Colorize;
use rand::RngCore;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &dyn WordSource, rng: &mut dyn RngCore) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Quadle - four words, one keyboard               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Every guess is played on all four boards at once.");
    println!("Each board has its own secret word and 9 rows to find it.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new(words, rng);
    let mut turn = 1;

    loop {
        let Some(input) = get_user_input(&format!("Guess {turn}"))? else {
            // stdin closed
            println!("\nThanks for playing!\n");
            return Ok(());
        };
        let input = input.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = GameSession::new(words, rng);
                turn = 1;
                println!("\nNew game started!\n");
                continue;
            }
            _ => {}
        }

        if input.len() != WORD_LEN || !input.chars().all(|c| c.is_ascii_lowercase()) {
            println!("{}", "Guesses must be exactly 5 letters.\n".red());
            continue;
        }

        if !words.is_accepted_guess(&input) {
            println!("{}\n", "NOT A VALID WORD".red().bold());
            continue;
        }

        for c in input.chars() {
            session.handle_key(Key::Letter(c));
        }
        session.handle_key(Key::Enter);
        turn += 1;

        println!();
        for slot in 0..BOARD_COUNT {
            let snapshot = session.board(slot).snapshot();
            println!("  Board {}:  {}", slot + 1, board_line(&snapshot));
        }
        println!();

        if session.is_over() {
            print_summary(&session, turn - 1);

            match get_user_input("Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session = GameSession::new(words, rng);
                    turn = 1;
                    println!("\nNew game started!\n");
                }
                _ => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Latest submitted row of a board, colored, plus its message
fn board_line(snapshot: &BoardSnapshot) -> String {
    let row = match snapshot.active_row {
        0 => return "· · · · ·".dimmed().to_string(),
        r => r - 1,
    };

    let mut cells = Vec::with_capacity(WORD_LEN);
    for col in 0..WORD_LEN {
        let letter = snapshot.grid[row][col].unwrap_or(' ').to_string();
        let cell = match snapshot.cell_states[row][col] {
            CellState::Correct => letter.black().on_green().bold().to_string(),
            CellState::Present => letter.black().on_yellow().bold().to_string(),
            CellState::Absent => letter.white().on_bright_black().to_string(),
            CellState::Empty => letter.normal().to_string(),
        };
        cells.push(cell);
    }

    let mut line = cells.join(" ");
    if !snapshot.message.is_empty() {
        line.push_str("   ");
        line.push_str(&match snapshot.status {
            Status::Won => snapshot.message.green().bold().to_string(),
            Status::Lost => snapshot.message.red().bold().to_string(),
            Status::InProgress => snapshot.message.yellow().to_string(),
        });
    }
    line
}

fn print_summary(session: &GameSession<'_>, guesses: usize) {
    let wins = session.wins();

    println!("{}", "═".repeat(64).bright_cyan());
    if wins == BOARD_COUNT {
        println!(
            "{}",
            format!("   ALL FOUR WORDS in {guesses} guesses!")
                .bright_green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("   Game over: {wins}/{BOARD_COUNT} boards solved")
                .bright_yellow()
                .bold()
        );
        for slot in 0..BOARD_COUNT {
            let board = session.board(slot);
            if board.status() == Status::Lost {
                println!(
                    "   Board {} was {}",
                    slot + 1,
                    board.target().text().to_uppercase().bright_white().bold()
                );
            }
        }
    }
    println!("{}\n", "═".repeat(64).bright_cyan());
}

/// Get user input with a prompt; `None` means stdin was closed
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
