//! Non-interactive play: apply a move list and print the resulting view.

use anyhow::{Context, Result};
use retrace_tictactoe::{Game, GameView, SortOrder};
use tracing::{info, instrument, warn};

/// Plays `moves` (cell indices) on a new game, optionally jumps, and renders
/// the view as text or JSON.
///
/// Rejected moves are logged and skipped, the way a click on an occupied
/// cell is ignored. An out-of-range jump is an error.
#[instrument]
pub fn run_replay(
    moves: &[usize],
    jump: Option<usize>,
    order: SortOrder,
    json: bool,
) -> Result<String> {
    let mut game = Game::with_order(order);
    for &index in moves {
        if let Err(e) = game.apply_move_at(index) {
            warn!(index, error = %e, "Move ignored");
        }
    }
    if let Some(step) = jump {
        game.jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    info!(step = game.step(), records = game.history().len(), "Replay finished");

    let view = game.view();
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(render_text(&view))
    }
}

/// Plain-text rendering of a view.
pub fn render_text(view: &GameView) -> String {
    let mut lines = vec![
        view.board().display(),
        String::new(),
        view.status().to_string(),
    ];
    if let Some(line) = view.highlighted_line() {
        let [a, b, c] = line.indices();
        lines.push(format!("Winning line: {}, {}, {}", a, b, c));
    }
    lines.push(format!("[{}]", view.sort_label()));
    lines.extend(view.moves().iter().map(|entry| {
        let marker = if *entry.active() { '>' } else { ' ' };
        format!("{} {}", marker, entry.label())
    }));
    lines.join("\n")
}
