// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Sorting Hat.
//!
//! Divides a crowd into houses, one button press at a time.
//!
//! Every press is answered with a house shown on an 8x8 dot matrix. The order
//! looks random to the people pressing the button, but each run of
//! `houses x repetition_factor` presses fills every house evenly. The button
//! and panel are drawn in the terminal with `ratatui`.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Session Worker** picks houses and plays the light and display
//!   sequence for each press, one press at a time.
//! * **Event Loops** capture key presses and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the session worker is handled via `std::sync::mpsc`
//! channels. Logs go to a file, since the terminal belongs to the UI.

mod actions;
mod config;
mod engine;
mod hardware;
mod render;
mod session;
mod theme;
mod trigger;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    config::AppConfig,
    engine::{HouseEngine, SharedEngine},
    hardware::DotMatrix,
    theme::Theme,
    trigger::Debouncer,
};

const LOG_FILE: &str = "sortinghat.log";

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub trigger: Debouncer,

    pub panel: DotMatrix,
    pub light_on: bool,
    pub ready: bool,
    pub presses: u64,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let trigger = Debouncer::new(config.debounce());

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            trigger,
            panel: DotMatrix::blank(),
            light_on: false,
            ready: false,
            presses: 0,
            status: None,
        })
    }
}

/// The entry point of the application.
///
/// Loads and validates the configuration, builds the assignment engine, sets
/// up the communication channels, manages the terminal lifecycle, and returns
/// an error if any part of the execution fails.
fn main() -> Result<()> {
    init_logging().context("Failed to initialise logging")?;

    let config = config::load_config().context("Failed to load configuration")?;
    let engine = build_engine(&config)?;

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, engine, command_rx);
    restore_terminal(&mut terminal);

    info!(presses = app.presses, "session ended");

    res.context("Application error occurred")
}

/// Sends log output to [`LOG_FILE`], filtered by `RUST_LOG`.
fn init_logging() -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("Failed to open {LOG_FILE}"))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sortinghat=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Validates the house configuration and constructs the shared engine.
///
/// # Errors
///
/// Returns an error if the houses or repetition factor are invalid; the
/// application must not start with an unbalanced configuration.
fn build_engine(config: &AppConfig) -> Result<SharedEngine> {
    let engine_config = config
        .engine_config()
        .context("Invalid house configuration")?;

    info!(
        houses = ?engine_config.houses(),
        repetition_factor = engine_config.repetition_factor(),
        block_size = engine_config.block_size(),
        seeded = config.seed.is_some(),
        "assignment engine configured"
    );

    let engine = match config.seed {
        Some(seed) => HouseEngine::from_seed(engine_config, seed),
        None => HouseEngine::from_entropy(engine_config),
    };

    Ok(SharedEngine::new(engine))
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    util::term::set_terminal_bg(app.theme.background_colour);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A session worker to process [`AppCommand`]s one at a time.
/// * An input thread to poll for keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it queues the start-up greeting and hands
/// control to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    engine: SharedEngine,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn a background worker to run the press sequences.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(&app.config, engine, command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(format!("Input failure: {e}")));
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.command_tx
        .send(AppCommand::Greet)
        .context("Failed to start session")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
