//! TUI rendering with ratatui
//!
//! Four board grids in a 2x2 arrangement above the shared quadrant keyboard.

use super::app::App;
use crate::core::{CellState, WORD_LEN};
use crate::engine::{BOARD_COUNT, BoardSnapshot, ROWS, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(24),    // Boards
            Constraint::Length(10), // Keyboard
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_boards(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("QUADLE - four words, one keyboard")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (half, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (side, board_area) in cols.iter().enumerate() {
            let slot = half * 2 + side;
            if slot < BOARD_COUNT {
                let snapshot = app.session.board(slot).snapshot();
                render_board(f, &snapshot, slot, *board_area);
            }
        }
    }
}

fn render_board(f: &mut Frame, snapshot: &BoardSnapshot, slot: usize, area: Rect) {
    let mut lines = Vec::with_capacity(ROWS + 1);

    // Transient message line sits above the grid, like the web original
    let message_style = match snapshot.status {
        Status::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Status::InProgress => Style::default().fg(Color::Yellow),
    };
    lines.push(Line::from(Span::styled(
        snapshot.message.clone(),
        message_style,
    )));

    for row in 0..ROWS {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        for col in 0..WORD_LEN {
            spans.push(cell_span(
                snapshot.grid[row][col],
                snapshot.cell_states[row][col],
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let border_style = match snapshot.status {
        Status::Won => Style::default().fg(Color::Green),
        Status::Lost => Style::default().fg(Color::Red),
        Status::InProgress => Style::default(),
    };

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Board {} ", slot + 1))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );

    f.render_widget(board, area);
}

fn cell_span(letter: Option<char>, state: CellState) -> Span<'static> {
    let text = match letter {
        Some(c) => format!(" {c} "),
        None => " · ".to_string(),
    };

    let style = match state {
        CellState::Empty => match letter {
            Some(_) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        },
        _ => Style::default()
            .fg(Color::Black)
            .bg(state_color(state))
            .add_modifier(Modifier::BOLD),
    };

    Span::styled(text, style)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        // Stagger rows like a physical keyboard
        let indent = " ".repeat(i * 2);
        let mut top = vec![Span::raw(indent.clone())];
        let mut bottom = vec![Span::raw(indent)];

        for key in row.chars() {
            let quadrants = app.session.keyboard().key_quadrants(key as u8);
            push_key(&mut top, &mut bottom, key, quadrants);
        }

        lines.push(Line::from(top));
        lines.push(Line::from(bottom));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(keyboard, area);
}

/// Render one key as a 2x2 quadrant cell: boards 1/2 on top, 3/4 below
fn push_key(
    top: &mut Vec<Span<'static>>,
    bottom: &mut Vec<Span<'static>>,
    key: char,
    quadrants: [CellState; BOARD_COUNT],
) {
    top.push(Span::styled(
        format!("{key}"),
        quadrant_style(quadrants[0]).add_modifier(Modifier::BOLD),
    ));
    top.push(Span::styled(" ".to_string(), quadrant_style(quadrants[1])));
    bottom.push(Span::styled(" ".to_string(), quadrant_style(quadrants[2])));
    bottom.push(Span::styled(" ".to_string(), quadrant_style(quadrants[3])));

    // Gap between keys
    top.push(Span::raw(" "));
    bottom.push(Span::raw(" "));
}

fn quadrant_style(state: CellState) -> Style {
    match state {
        CellState::Empty => Style::default().fg(Color::White).bg(Color::Reset),
        _ => Style::default().fg(Color::Black).bg(state_color(state)),
    }
}

fn state_color(state: CellState) -> Color {
    match state {
        CellState::Correct => Color::Green,
        CellState::Present => Color::Yellow,
        CellState::Absent => Color::DarkGray,
        CellState::Empty => Color::Reset,
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.session.is_over() {
        format!(
            "Game over: {}/{} boards solved | Ctrl+N: New Game | Esc: Quit",
            app.session.wins(),
            BOARD_COUNT
        )
    } else {
        format!(
            "Solved {}/{} | Type to guess | Enter: Submit | Ctrl+N: New Game | Esc: Quit",
            app.session.wins(),
            BOARD_COUNT
        )
    };

    let bar = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}
