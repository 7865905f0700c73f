//! Terminal UI for retrace.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use retrace_tictactoe::Game;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use app::App;

/// Runs the interactive game until the user quits.
#[instrument(skip(game))]
pub fn run_tui(game: Game) -> Result<()> {
    info!("Starting retrace TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        steps = app.game().history().len() - 1,
        verdict = %app.game().verdict(),
        "TUI closed"
    );
    res
}

/// Draw, wait for a key, dispatch it; repeat until quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}
