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

//! Render the button and the footer.
//!
//! The button mirrors the light inside the physical button: lit when a press
//! will be accepted, dark while a pick is being shown.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::icons::{BUTTON_DARK, BUTTON_LIT},
};

pub(crate) fn draw_button(f: &mut Frame, area: Rect, app: &App) {
    let (icon, label, colour) = if app.light_on {
        (BUTTON_LIT, "Press the button", app.theme.light_on_colour)
    } else {
        (BUTTON_DARK, "Please wait", app.theme.light_off_colour)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(colour)),
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)).fg(colour),
        ]),
        Line::from(format!("presses this session: {}", app.presses)).fg(app.theme.hint_colour),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(area);

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(status.as_str()).fg(app.theme.error_colour),
            chunks[0],
        );
    }

    f.render_widget(
        Paragraph::new("space/enter: press  q: quit")
            .alignment(Alignment::Right)
            .fg(app.theme.hint_colour),
        chunks[1],
    );
}
