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

//! Session command processing.
//!
//! This module implements the command pattern used to keep the press sequence
//! (with its pauses and blinking) off the main UI thread. A dedicated worker
//! owns the [`SessionController`] and runs one [`AppCommand`] at a time, so
//! presses are handled strictly in order and never overlap.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{debug, info};

use crate::{
    actions::events::AppEvent,
    config::AppConfig,
    engine::SharedEngine,
    hardware::{IndicatorLight, MatrixDisplay, TerminalPanel},
    session::SessionController,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    Greet,
    Press,
    ExitApplication,
}

/// Spawns a background thread to process session commands.
///
/// The worker drives a [`TerminalPanel`] that reports every display and light
/// change back to the UI through `event_tx`.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `engine` - The house assignment engine.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    engine: SharedEngine,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let banner = config.banner.clone();
    let timing = config.session_timing();
    let panel = TerminalPanel::new(event_tx.clone(), config.scroll_delay());

    thread::spawn(move || {
        let mut controller = SessionController::new(engine, panel.clone(), panel, timing);

        while let Ok(command) = command_rx.recv() {
            debug!(?command, "session command");
            if let Err(e) = handle_command(&mut controller, &banner, command, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        info!(presses = controller.presses(), "session worker stopped");
    });
}

/// Runs a single command against the session controller and reports the
/// outcome on the application event channel.
fn handle_command<D: MatrixDisplay, L: IndicatorLight>(
    controller: &mut SessionController<D, L>,
    banner: &str,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Greet => {
            controller.greet(banner);
            event_tx.send(AppEvent::Ready)?;
        }
        AppCommand::Press => {
            let house = controller.handle_trigger();
            event_tx.send(AppEvent::Picked(house))?;
        }
        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;
    use crate::{
        engine::{EngineConfig, HouseEngine},
        hardware::DotMatrix,
        session::SessionTiming,
    };

    fn controller(event_tx: &Sender<AppEvent>) -> SessionController<TerminalPanel, TerminalPanel> {
        let config = EngineConfig::new(&["1", "2", "3", "4"], 3).unwrap();
        let engine = SharedEngine::new(HouseEngine::from_seed(config, 4));
        let panel = TerminalPanel::new(event_tx.clone(), Duration::ZERO);
        let timing = SessionTiming {
            think: Duration::ZERO,
            blink: Duration::ZERO,
            blink_count: 1,
            startup: Duration::ZERO,
        };
        SessionController::new(engine, panel.clone(), panel, timing)
    }

    #[test]
    fn test_press_reports_pick_last() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut controller = controller(&event_tx);

        handle_command(&mut controller, "HI", AppCommand::Press, &event_tx).unwrap();

        let events: Vec<AppEvent> = event_rx.try_iter().collect();
        let Some(AppEvent::Picked(house)) = events.last() else {
            panic!("expected a pick, got {:?}", events.last());
        };
        assert!(matches!(events[0], AppEvent::Light(false)));
        assert!(matches!(events[events.len() - 2], AppEvent::Light(true)));
        assert!(events.iter().any(
            |e| matches!(e, AppEvent::Panel(m) if *m == DotMatrix::with_text(house.as_str(), 0))
        ));
    }

    #[test]
    fn test_greet_reports_ready() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut controller = controller(&event_tx);

        handle_command(&mut controller, "HI", AppCommand::Greet, &event_tx).unwrap();

        let events: Vec<AppEvent> = event_rx.try_iter().collect();
        assert!(matches!(events.last(), Some(AppEvent::Ready)));
        assert!(matches!(events[events.len() - 2], AppEvent::Light(true)));
    }

    #[test]
    fn test_exit_is_forwarded() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut controller = controller(&event_tx);

        handle_command(&mut controller, "HI", AppCommand::ExitApplication, &event_tx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn test_spawned_worker_handles_presses_in_order() {
        let (event_tx, event_rx) = mpsc::channel();
        let (command_tx, command_rx) = mpsc::channel();
        let config = AppConfig {
            think_ms: 0,
            blink_ms: 0,
            startup_ms: 0,
            scroll_delay_ms: 0,
            ..AppConfig::default()
        };
        let engine_config = config.engine_config().unwrap();
        let engine = SharedEngine::new(HouseEngine::from_seed(engine_config, 6));

        spawn_command_worker(&config, engine, command_rx, event_tx);
        for _ in 0..12 {
            command_tx.send(AppCommand::Press).unwrap();
        }
        command_tx.send(AppCommand::ExitApplication).unwrap();

        let mut picks = Vec::new();
        for event in event_rx.iter() {
            match event {
                AppEvent::Picked(house) => picks.push(house.as_str().to_string()),
                AppEvent::ExitApplication => break,
                _ => {}
            }
        }
        picks.sort();

        assert_eq!(
            picks,
            vec!["1", "1", "1", "2", "2", "2", "3", "3", "3", "4", "4", "4"]
        );
    }
}
