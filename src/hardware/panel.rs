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

//! Terminal stand-in for the LED matrix and button light.
//!
//! Frames and light changes are sent to the UI thread as [`AppEvent`]s; the
//! render loop draws whatever it last received.

use std::{sync::mpsc::Sender, thread, time::Duration};

use crate::{
    actions::events::AppEvent,
    hardware::{DotMatrix, IndicatorLight, MatrixDisplay, PanelError, scroll_frames},
};

#[derive(Clone)]
pub(crate) struct TerminalPanel {
    event_tx: Sender<AppEvent>,
    scroll_delay: Duration,
}

impl TerminalPanel {
    pub(crate) fn new(event_tx: Sender<AppEvent>, scroll_delay: Duration) -> Self {
        Self {
            event_tx,
            scroll_delay,
        }
    }

    fn send(&self, event: AppEvent) -> Result<(), PanelError> {
        self.event_tx
            .send(event)
            .map_err(|_| PanelError::Disconnected)
    }

    fn draw(&self, matrix: DotMatrix) -> Result<(), PanelError> {
        self.send(AppEvent::Panel(matrix))
    }
}

impl MatrixDisplay for TerminalPanel {
    fn clear(&mut self) -> Result<(), PanelError> {
        self.draw(DotMatrix::blank())
    }

    fn fill(&mut self) -> Result<(), PanelError> {
        self.draw(DotMatrix::lit())
    }

    fn show(&mut self, label: &str) -> Result<(), PanelError> {
        self.draw(DotMatrix::with_text(label, 0))
    }

    fn scroll(&mut self, message: &str) -> Result<(), PanelError> {
        for frame in scroll_frames(message) {
            self.draw(frame)?;
            thread::sleep(self.scroll_delay);
        }
        Ok(())
    }
}

impl IndicatorLight for TerminalPanel {
    fn set(&mut self, on: bool) -> Result<(), PanelError> {
        self.send(AppEvent::Light(on))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn test_show_sends_frame() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut panel = TerminalPanel::new(event_tx, Duration::ZERO);

        panel.show("4").unwrap();
        panel.set(true).unwrap();

        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::Panel(m)) if m == DotMatrix::with_text("4", 0)
        ));
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::Light(true))));
    }

    #[test]
    fn test_scroll_ends_blank() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut panel = TerminalPanel::new(event_tx, Duration::ZERO);

        panel.scroll("HI").unwrap();

        let frames: Vec<DotMatrix> = event_rx
            .try_iter()
            .filter_map(|e| match e {
                AppEvent::Panel(m) => Some(m),
                _ => None,
            })
            .collect();
        assert!(frames.len() > 8);
        assert_eq!(frames.last(), Some(&DotMatrix::blank()));
    }

    #[test]
    fn test_disconnected_panel() {
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_rx);
        let mut panel = TerminalPanel::new(event_tx, Duration::ZERO);

        assert!(matches!(panel.clear(), Err(PanelError::Disconnected)));
        assert!(matches!(panel.set(false), Err(PanelError::Disconnected)));
    }
}
