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

//! Button press debouncing.
//!
//! A physical button produces a burst of edges for a single press. Only the
//! first event inside each dead-time window is passed on as a trigger.

use std::time::{Duration, Instant};

pub(crate) struct Debouncer {
    dead_time: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    pub(crate) fn new(dead_time: Duration) -> Self {
        Self {
            dead_time,
            last_accepted: None,
        }
    }

    /// Returns `true` if an event at `now` should be treated as a new press.
    ///
    /// Suppressed events do not extend the window.
    pub(crate) fn accept(&mut self, now: Instant) -> bool {
        let accepted = match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) >= self.dead_time,
            None => true,
        };

        if accepted {
            self.last_accepted = Some(now);
        }

        accepted
    }
}
