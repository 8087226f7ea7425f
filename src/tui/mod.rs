//! Terminal UI front-end.
//!
//! Every key press or click is applied to the session before the next frame
//! is drawn.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, key_action, mouse_action, move_cursor};
pub use ui::{cell_areas, cell_at, draw};

use crate::config::Config;
use crate::logging;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run(config: Config) -> Result<()> {
    logging::init_file(&config)?;
    debug!(?config, "Config loaded");
    info!(mouse = *config.mouse(), "Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if *config.mouse() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_loop(&mut terminal, &mut app, *config.mouse());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if *config.mouse() {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mouse: bool,
) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            draw(frame, app);
        })?;

        let action = match event::read()? {
            Event::Key(key) => key_action(key),
            Event::Mouse(event) if mouse => mouse_action(event, area),
            _ => None,
        };
        if let Some(action) = action {
            app.handle(action);
        }
    }
    Ok(())
}
