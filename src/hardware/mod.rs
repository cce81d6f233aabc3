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

//! Button light and dot matrix display.
//!
//! The session controller talks to the physical surface only through the
//! [`MatrixDisplay`] and [`IndicatorLight`] traits. [`TerminalPanel`]
//! implements both by forwarding frames to the TUI.

mod font;
mod panel;

use thiserror::Error;

pub(crate) use panel::TerminalPanel;

/// Width of the panel in columns.
pub(crate) const MATRIX_WIDTH: usize = 8;

/// Height of the panel in rows.
pub(crate) const MATRIX_HEIGHT: usize = 8;

#[derive(Error, Debug)]
pub(crate) enum PanelError {
    #[error("panel is disconnected")]
    Disconnected,
}

/// One frame of an 8x8 LED matrix, stored column by column with the top row
/// in the least significant bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DotMatrix {
    columns: [u8; MATRIX_WIDTH],
}

impl DotMatrix {
    pub(crate) const fn blank() -> Self {
        Self {
            columns: [0; MATRIX_WIDTH],
        }
    }

    pub(crate) const fn lit() -> Self {
        Self {
            columns: [0xFF; MATRIX_WIDTH],
        }
    }

    /// Renders `text` with its first column at `offset`, clipping anything
    /// that falls outside the panel.
    pub(crate) fn with_text(text: &str, offset: i32) -> Self {
        let mut matrix = Self::blank();

        for (i, column) in font::text_columns(text).into_iter().enumerate() {
            let x = offset.saturating_add(i32::try_from(i).unwrap_or(i32::MAX));
            if let Some(slot) = usize::try_from(x).ok().and_then(|x| matrix.columns.get_mut(x)) {
                *slot = column;
            }
        }

        matrix
    }

    pub(crate) fn is_lit(&self, x: usize, y: usize) -> bool {
        x < MATRIX_WIDTH && y < MATRIX_HEIGHT && self.columns[x] & (1 << y) != 0
    }
}

/// Frames that slide `text` in from the right edge until it has left the
/// left edge.
pub(crate) fn scroll_frames(text: &str) -> impl Iterator<Item = DotMatrix> {
    let text = text.to_string();
    let width = i32::try_from(font::text_columns(&text).len()).unwrap_or(i32::MAX);

    (-width..=MATRIX_WIDTH as i32)
        .rev()
        .map(move |offset| DotMatrix::with_text(&text, offset))
}

/// A display capable of showing short labels.
pub(crate) trait MatrixDisplay {
    /// Turns every LED off.
    fn clear(&mut self) -> Result<(), PanelError>;

    /// Turns every LED on.
    fn fill(&mut self) -> Result<(), PanelError>;

    /// Shows `label` from the left edge of the panel.
    fn show(&mut self, label: &str) -> Result<(), PanelError>;

    /// Scrolls `message` across the panel, returning once it has left.
    fn scroll(&mut self, message: &str) -> Result<(), PanelError>;
}

/// The light inside the button.
pub(crate) trait IndicatorLight {
    fn set(&mut self, on: bool) -> Result<(), PanelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_lit() {
        assert_ne!(DotMatrix::blank(), DotMatrix::lit());
        assert!(DotMatrix::lit().is_lit(7, 7));
        assert!(!DotMatrix::lit().is_lit(8, 0));
    }

    #[test]
    fn test_text_at_origin() {
        let matrix = DotMatrix::with_text("1", 0);

        // 0x42: rows 1 and 6
        assert!(matrix.is_lit(0, 1));
        assert!(matrix.is_lit(0, 6));
        assert!(!matrix.is_lit(0, 0));
        // 0x7F: rows 0..=6
        assert!((0..7).all(|y| matrix.is_lit(1, y)));
        assert!(!matrix.is_lit(1, 7));
        assert!((3..MATRIX_WIDTH).all(|x| (0..MATRIX_HEIGHT).all(|y| !matrix.is_lit(x, y))));
    }

    #[test]
    fn test_text_is_clipped() {
        assert_eq!(DotMatrix::with_text("1", 8), DotMatrix::blank());
        assert_eq!(DotMatrix::with_text("1", -3), DotMatrix::blank());
        assert!(DotMatrix::with_text("1", -2).is_lit(0, 6));
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        assert_eq!(DotMatrix::with_text("111", i32::MAX), DotMatrix::blank());
        assert_eq!(DotMatrix::with_text("111", i32::MIN), DotMatrix::blank());
    }

    #[test]
    fn test_scroll_enters_right_leaves_left() {
        let frames: Vec<DotMatrix> = scroll_frames("1").collect();

        assert_eq!(frames.len(), 3 + MATRIX_WIDTH + 1);
        assert_eq!(frames.first(), Some(&DotMatrix::blank()));
        assert_eq!(frames.last(), Some(&DotMatrix::blank()));
        assert!(frames.iter().any(|f| *f == DotMatrix::with_text("1", 0)));
    }
}
