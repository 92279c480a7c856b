//! Retrace - tic-tac-toe with move history navigation.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use retrace::{App, Cli, Command, Config, TerminalGuard, ui};
use retrace_tictactoe::{Game, Session};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play { desc: false }) {
        Command::Play { desc } => {
            let config = if desc { config.with_sort_descending(true) } else { config };
            run_play(config)
        }
        Command::Replay {
            moves,
            jump,
            then,
            desc,
            json,
        } => run_replay(&config, &moves, jump, &then, desc, json),
    }
}

/// Run the interactive terminal UI
fn run_play(config: Config) -> Result<()> {
    // Log to a file so tracing output does not corrupt the UI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Retrace TUI");

    let guard = TerminalGuard::enter(io::stdout()).context("Failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(&config));
    drop(guard);

    if let Err(err) = &res {
        tracing::error!(error = ?err, "UI loop failed");
    }
    info!("Retrace TUI exited");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

/// Play clicks headlessly and print the resulting snapshot
#[instrument(skip(config))]
fn run_replay(
    config: &Config,
    moves: &[usize],
    jump: Option<usize>,
    then: &[usize],
    desc: bool,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::with_game(
        Game::with_side(*config.side()),
        desc || *config.sort_descending(),
    );
    for &cell in moves {
        session.on_cell_click(cell);
    }
    if let Some(ordinal) = jump {
        session
            .on_history_jump(ordinal)
            .with_context(|| format!("Cannot jump to move {}", ordinal))?;
    }
    for &cell in then {
        session.on_cell_click(cell);
    }

    let snapshot = session.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", session.game().current().board().display());
    println!();
    println!("{}", snapshot.status());
    for entry in snapshot.history_entries() {
        let marker = if *entry.is_current() { '*' } else { ' ' };
        println!("{} {}", marker, entry.label());
    }
    Ok(())
}
