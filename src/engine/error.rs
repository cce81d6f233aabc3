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

//! Engine configuration errors.

use thiserror::Error;

/// Reasons an engine configuration is rejected at startup.
///
/// These are fatal: an engine is never constructed from a configuration that
/// fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("no houses configured")]
    NoHouses,

    #[error("house label at position {0} is blank")]
    BlankHouse(usize),

    #[error("house label {0:?} is listed more than once")]
    DuplicateHouse(String),

    #[error("repetition factor must be positive, got {0}")]
    InvalidRepetition(i64),
}
