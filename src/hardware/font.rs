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

//! 5x7 dot matrix font.
//!
//! Each glyph is stored as five column bytes, least significant bit at the
//! top. Text is laid out proportionally: blank columns on either side of a
//! glyph are dropped and glyphs are separated by one blank column.

const GLYPH_WIDTH: usize = 5;

const SPACE_WIDTH: usize = 2;

const UNKNOWN: [u8; GLYPH_WIDTH] = [0x02, 0x01, 0x51, 0x09, 0x06];

/// Returns the column bitmap for `ch`, or `None` if there is no glyph for it.
pub(crate) fn glyph(ch: char) -> Option<[u8; GLYPH_WIDTH]> {
    let columns = match ch.to_ascii_uppercase() {
        '0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
        '1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
        '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
        '4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
        '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
        '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
        'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
        'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
        'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
        'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
        'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
        'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
        'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
        'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
        'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
        'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
        'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
        'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
        'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
        'W' => [0x3F, 0x40, 0x38, 0x40, 0x3F],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x07, 0x08, 0x70, 0x08, 0x07],
        'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        '!' => [0x00, 0x00, 0x5F, 0x00, 0x00],
        '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        '?' => UNKNOWN,
        _ => return None,
    };
    Some(columns)
}

/// Lays out `text` as a run of column bytes.
pub(crate) fn text_columns(text: &str) -> Vec<u8> {
    let mut columns = Vec::new();

    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            columns.push(0);
        }

        if ch == ' ' {
            columns.extend([0; SPACE_WIDTH]);
            continue;
        }

        let glyph = glyph(ch).unwrap_or(UNKNOWN);
        columns.extend_from_slice(trim_blank_columns(&glyph));
    }

    columns
}

// Drops blank columns from either side of a glyph, keeping interior gaps.
fn trim_blank_columns(glyph: &[u8]) -> &[u8] {
    match glyph.iter().position(|&c| c != 0) {
        Some(first) => {
            let last = glyph.iter().rposition(|&c| c != 0).unwrap_or(first);
            &glyph[first..=last]
        }
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_is_trimmed() {
        assert_eq!(text_columns("1"), vec![0x42, 0x7F, 0x40]);
    }

    #[test]
    fn test_glyphs_are_spaced() {
        assert_eq!(text_columns("11"), vec![0x42, 0x7F, 0x40, 0x00, 0x42, 0x7F, 0x40]);
    }

    #[test]
    fn test_trim_keeps_interior_gap() {
        assert_eq!(trim_blank_columns(&[0x00, 0x41, 0x00, 0x41, 0x00]), &[0x41u8, 0x00, 0x41][..]);
        assert_eq!(trim_blank_columns(&[0x7F, 0x00, 0x00, 0x00, 0x7F]), &[0x7Fu8, 0, 0, 0, 0x7F][..]);
        assert!(trim_blank_columns(&[0x00; GLYPH_WIDTH]).is_empty());
    }

    #[test]
    fn test_lowercase_folds() {
        assert_eq!(glyph('h'), glyph('H'));
    }

    #[test]
    fn test_unknown_glyph() {
        assert_eq!(glyph('~'), None);
        assert_eq!(text_columns("~"), text_columns("?"));
    }

    #[test]
    fn test_space_width() {
        assert_eq!(text_columns("1 1").len(), 3 + 1 + 2 + 1 + 3);
    }
}
