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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework: the dot matrix panel in the middle of
//! the screen, the button beneath it and a one-line footer.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod button;
mod icons;
mod matrix;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App,
    render::{
        button::{draw_button, draw_footer},
        matrix::{MATRIX_BLOCK_HEIGHT, MATRIX_BLOCK_WIDTH, draw_matrix},
    },
};

/// Renders the user interface to the terminal frame.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(MATRIX_BLOCK_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_matrix(f, centred(outer[1], MATRIX_BLOCK_WIDTH), app);
    draw_button(f, outer[3], app);
    draw_footer(f, outer[5], app);
}

// Returns a horizontally centred slice of `area`.
fn centred(area: Rect, width: u16) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(area);

    columns[1]
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{config::AppConfig, hardware::DotMatrix};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_whole_screen() {
        let (command_tx, _command_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), command_tx).unwrap();
        app.panel = DotMatrix::with_text("3", 0);
        app.light_on = true;
        app.presses = 7;

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Sorting Hat"));
        assert!(text.contains("Press the button"));
        assert!(text.contains("session: 7"));
    }

    #[test]
    fn test_centred() {
        let area = Rect::new(0, 0, 40, 10);
        let centre = centred(area, 20);
        assert_eq!(centre.width, 20);
        assert_eq!(centre.x, 10);
    }
}
