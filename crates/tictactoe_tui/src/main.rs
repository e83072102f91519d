//! Tic Tac Toe - terminal front end.
//!
//! Draws the board with ratatui and feeds mouse clicks and key presses
//! to the rules engine.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use input::{Action, action_for_key};
use std::time::Duration;
use terminal::Term;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;
use ui::{ScreenLayout, Target};

const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli)?;
    init_tracing(&config)?;

    info!(?config, "Starting Tic Tac Toe TUI");

    let mut guard = terminal::enter().context("Failed to set up terminal")?;
    let mut app = App::new(*config.empty_glyph());
    let res = run_app(guard.get_mut(), &mut app);
    // Leave the alternate screen before reporting anything.
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Logs go to a file so they never draw over the board.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    let mut layout = ScreenLayout::default();

    while !app.should_quit() {
        terminal.draw(|frame| layout = ui::draw(frame, app))?;

        if !event::poll(TICK)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match layout.hit(mouse.column, mouse.row) {
                    Some(Target::Square(pos)) => Some(Action::Play(pos)),
                    Some(Target::Restart) => Some(Action::Restart),
                    None => None,
                }
            }
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "Input");
            app.handle(action);
        }
    }

    Ok(())
}
