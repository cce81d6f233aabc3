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

//! Render the dot matrix panel.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    hardware::{DotMatrix, MATRIX_HEIGHT, MATRIX_WIDTH},
    render::icons::LED,
    theme::Theme,
};

// Each LED is drawn as a dot followed by a space.
const LED_WIDTH: u16 = 2;

pub(crate) const MATRIX_BLOCK_WIDTH: u16 = MATRIX_WIDTH as u16 * LED_WIDTH + 4;
pub(crate) const MATRIX_BLOCK_HEIGHT: u16 = MATRIX_HEIGHT as u16 + 2;

/// Renders the LED panel inside a titled border.
pub(crate) fn draw_matrix(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .title(format!(" {} ", app.config.banner))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(Paragraph::new(matrix_lines(&app.panel, &app.theme)), inner_area);
}

/// Converts a frame into one styled line per LED row.
pub(crate) fn matrix_lines(matrix: &DotMatrix, theme: &Theme) -> Vec<Line<'static>> {
    (0..MATRIX_HEIGHT)
        .map(|y| {
            let spans: Vec<Span> = (0..MATRIX_WIDTH)
                .map(|x| {
                    let colour = if matrix.is_lit(x, y) {
                        theme.led_on_colour
                    } else {
                        theme.led_off_colour
                    };
                    Span::styled(format!("{LED} "), Style::default().fg(colour))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_lines_shape() {
        let lines = matrix_lines(&DotMatrix::blank(), &Theme::default());

        assert_eq!(lines.len(), MATRIX_HEIGHT);
        assert!(lines.iter().all(|l| l.width() == MATRIX_WIDTH * LED_WIDTH as usize));
    }

    #[test]
    fn test_matrix_lines_colours() {
        let theme = Theme::default();
        let lines = matrix_lines(&DotMatrix::with_text("1", 0), &theme);

        // Column 1 of "1" is lit from row 0 to row 6.
        assert_eq!(lines[0].spans[1].style.fg, Some(theme.led_on_colour));
        assert_eq!(lines[7].spans[1].style.fg, Some(theme.led_off_colour));
        assert_eq!(lines[0].spans[0].style.fg, Some(theme.led_off_colour));
    }
}
