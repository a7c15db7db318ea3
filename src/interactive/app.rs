//! TUI application state and logic

use crate::engine::{GameSession, Key};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    words: &'a dyn WordSource,
    rng: StdRng,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a dyn WordSource, mut rng: StdRng) -> Self {
        let session = GameSession::new(words, &mut rng);

        Self {
            session,
            words,
            rng,
            should_quit: false,
        }
    }

    /// Tear down the current session and start a fresh one
    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.words, &mut self.rng);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                // Letters belong to the game, so quitting lives on Esc/Ctrl
                KeyCode::Char(c) => {
                    if let Some(key) = Key::letter(c) {
                        app.session.handle_key(key);
                    }
                }
                KeyCode::Backspace => {
                    app.session.handle_key(Key::Backspace);
                }
                KeyCode::Enter => {
                    app.session.handle_key(Key::Enter);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
