//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use retrace_tictactoe::{GameView, Player, Position};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen from the app's current view.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.game().view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(3), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Retrace - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH * 3 + 4), Constraint::Min(20)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app);
    draw_info(frame, body[1], &view, app);

    let help = Paragraph::new(
        "arrows move | enter play/jump | 1-9 play | tab focus | s sort | home start | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let border_style = if *app.focus() == Focus::Board {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (column, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::at(row, column) {
                draw_cell(frame, *cell_area, view, app, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, app: &App, pos: Position) {
    let (symbol, mut style) = match view.board().get(pos).mark() {
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if view.is_highlighted(pos) {
        style = style.bg(Color::LightMagenta);
    }
    if *app.focus() == Focus::Board && pos == *app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(style));
    frame.render_widget(cell, area);
}

fn draw_info(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Sort: {} (s)", view.sort_label())),
        );
    frame.render_widget(status, chunks[0]);

    let moves_focused = *app.focus() == Focus::Moves;
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut style = Style::default();
            if *entry.active() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if moves_focused && i == *app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let border_style = if moves_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, chunks[1]);
}
