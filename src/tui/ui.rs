//! Stateless UI rendering for tic-tac-toe.
//!
//! Every frame is drawn from scratch out of session views; no render
//! state survives between frames.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Player, Position, Square, Verdict};

use super::app::App;

/// Renders the full screen: title, board, move list, and status.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(13),    // Board + move list
            Constraint::Length(3),  // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe Rewind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, columns[0], app);
    draw_move_list(frame, columns[1], app);
    draw_status(frame, chunks[2], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let positions = Position::ALL;
    for board_row in 0..3 {
        let row_area = rows[board_row * 2];
        if board_row > 0 {
            draw_separator(frame, rows[board_row * 2 - 1]);
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);
        for board_col in 0..3 {
            if board_col > 0 {
                draw_separator_vertical(frame, cols[board_col * 2 - 1]);
            }
            draw_cell(frame, cols[board_col * 2], app, positions[board_row * 3 + board_col]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let square = app.session().current_board().get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = app
        .session()
        .verdict()
        .win()
        .is_some_and(|win| win.line.contains(&pos));

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let order = if session.is_sort_ascending() {
        "Ascending"
    } else {
        "Descending"
    };

    let lines: Vec<Line> = session
        .move_list()
        .into_iter()
        .map(|item| {
            let style = if item.step == session.step_number() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{}. {}", item.step, item.label),
                style,
            ))
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves ({})", order)),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let hint = match session.verdict() {
        Verdict::InProgress => "arrows move, Enter places, [/] travel, g start, s sort, r restart, q quit",
        _ => "[/] travel, g start, s sort, r restart, q quit",
    };

    let status = Paragraph::new(format!("{}  |  {}", session.status_text(), hint))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
