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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), the session worker (panel frames, light
//! changes and picks) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and forwards debounced presses to the session worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error, warn};

use crate::{
    App, actions::commands::AppCommand, engine::House, hardware::DotMatrix, render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Panel(DotMatrix),
    Light(bool),

    Ready,
    Picked(House),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel is
/// closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        if let AppEvent::FatalError(message) = event {
            anyhow::bail!(message);
        }

        update(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
fn update(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::Panel(matrix) => app.panel = matrix,
        AppEvent::Light(on) => app.light_on = on,

        AppEvent::Ready => app.ready = true,
        AppEvent::Picked(house) => {
            debug!(house = %house, "pick displayed");
            app.presses += 1;
            app.status = None;
        }

        AppEvent::Error(message) => {
            error!(%message, "session error");
            app.status = Some(message);
        }

        AppEvent::Tick => {}
        AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    Ok(())
}

/// Maps keyboard input to button presses and application control.
///
/// `Space` and `Enter` act as the physical button; each accepted press is
/// forwarded to the session worker. Presses while the button light is off
/// (a pick in progress) or inside the debounce window are dropped. `q` and `Esc` quit once the current press has finished, `Ctrl-C`
/// quits immediately.
///
/// # Errors
///
/// Returns an error if a command fails to send to the session worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        // Let the worker finish the press in progress before quitting
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.command_tx.send(AppCommand::ExitApplication)?;
        }
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => {
            if !app.ready {
                debug!("press ignored before start-up finished");
            } else if !app.light_on {
                debug!("press ignored while a pick is in progress");
            } else if app.trigger.accept(Instant::now()) {
                app.command_tx.send(AppCommand::Press)?;
            } else {
                warn!("press suppressed by debounce");
            }
        }

        _ => {}
    }

    Ok(())
}
