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

//! Press handling and feedback sequencing.
//!
//! The [`SessionController`] turns a trigger into a house pick and plays the
//! light and display sequence around it:
//!
//! 1. The button light goes off so nobody presses again mid-sequence.
//! 2. The display "thinks" (off, all on, off).
//! 3. A house is picked from the engine.
//! 4. The house label blinks, then stays on the display.
//! 5. The button light comes back on, ready for the next press.
//!
//! Display and light failures are logged and skipped; they never stop a pick
//! from being taken or the sequence from finishing.

use std::{thread, time::Duration};

use tracing::{info, warn};

use crate::{
    engine::{House, SharedEngine},
    hardware::{IndicatorLight, MatrixDisplay, PanelError},
};

/// Pauses used while playing the feedback sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SessionTiming {
    pub(crate) think: Duration,
    pub(crate) blink: Duration,
    pub(crate) blink_count: u32,
    pub(crate) startup: Duration,
}

pub(crate) struct SessionController<D: MatrixDisplay, L: IndicatorLight> {
    engine: SharedEngine,
    display: D,
    light: L,
    timing: SessionTiming,
    presses: u64,
}

impl<D: MatrixDisplay, L: IndicatorLight> SessionController<D, L> {
    pub(crate) fn new(engine: SharedEngine, display: D, light: L, timing: SessionTiming) -> Self {
        Self {
            engine,
            display,
            light,
            timing,
            presses: 0,
        }
    }

    /// Plays the start-up sequence: scrolls `banner`, runs a lamp test, then
    /// switches the button light on to signal readiness.
    pub(crate) fn greet(&mut self, banner: &str) {
        info!(banner, "starting session");

        let scrolled = self.display.scroll(banner);
        self.report("scroll banner", scrolled);

        let filled = self.display.fill();
        self.report("lamp test", filled);
        self.set_light(true);
        thread::sleep(self.timing.startup);

        self.clear_display();
        self.set_light(false);
        thread::sleep(self.timing.startup);

        self.set_light(true);
    }

    /// Handles one debounced press, returning the house that was picked.
    pub(crate) fn handle_trigger(&mut self) -> House {
        self.presses += 1;
        info!(press = self.presses, "button pushed");

        self.set_light(false);

        self.clear_display();
        thread::sleep(self.timing.think);
        let filled = self.display.fill();
        self.report("fill display", filled);
        thread::sleep(self.timing.think);
        self.clear_display();

        let house = self.engine.next_pick();
        info!(press = self.presses, house = %house, "house picked");

        self.flash(house.as_str());
        self.show(house.as_str());

        self.set_light(true);

        house
    }

    /// Number of presses handled this session.
    pub(crate) fn presses(&self) -> u64 {
        self.presses
    }

    fn flash(&mut self, label: &str) {
        for _ in 0..self.timing.blink_count {
            self.clear_display();
            thread::sleep(self.timing.blink);
            self.show(label);
            thread::sleep(self.timing.blink);
        }
    }

    fn show(&mut self, label: &str) {
        let shown = self.display.show(label);
        self.report("show label", shown);
    }

    fn clear_display(&mut self) {
        let cleared = self.display.clear();
        self.report("clear display", cleared);
    }

    fn set_light(&mut self, on: bool) {
        let set = self.light.set(on);
        self.report(if on { "light on" } else { "light off" }, set);
    }

    fn report(&self, action: &str, result: Result<(), PanelError>) {
        if let Err(e) = result {
            warn!(action, error = %e, "panel update failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::engine::{EngineConfig, HouseEngine};

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Clear,
        Fill,
        Show(String),
        Scroll(String),
        Light(bool),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        ops: Arc<Mutex<Vec<Op>>>,
    }

    impl Recorder {
        fn push(&self, op: Op) -> Result<(), PanelError> {
            self.ops.lock().unwrap().push(op);
            Ok(())
        }

        fn take(&self) -> Vec<Op> {
            std::mem::take(&mut *self.ops.lock().unwrap())
        }
    }

    impl MatrixDisplay for Recorder {
        fn clear(&mut self) -> Result<(), PanelError> {
            self.push(Op::Clear)
        }

        fn fill(&mut self) -> Result<(), PanelError> {
            self.push(Op::Fill)
        }

        fn show(&mut self, label: &str) -> Result<(), PanelError> {
            self.push(Op::Show(label.to_string()))
        }

        fn scroll(&mut self, message: &str) -> Result<(), PanelError> {
            self.push(Op::Scroll(message.to_string()))
        }
    }

    impl IndicatorLight for Recorder {
        fn set(&mut self, on: bool) -> Result<(), PanelError> {
            self.push(Op::Light(on))
        }
    }

    struct Broken;

    impl MatrixDisplay for Broken {
        fn clear(&mut self) -> Result<(), PanelError> {
            Err(PanelError::Disconnected)
        }

        fn fill(&mut self) -> Result<(), PanelError> {
            Err(PanelError::Disconnected)
        }

        fn show(&mut self, _label: &str) -> Result<(), PanelError> {
            Err(PanelError::Disconnected)
        }

        fn scroll(&mut self, _message: &str) -> Result<(), PanelError> {
            Err(PanelError::Disconnected)
        }
    }

    impl IndicatorLight for Broken {
        fn set(&mut self, _on: bool) -> Result<(), PanelError> {
            Err(PanelError::Disconnected)
        }
    }

    fn instant_timing(blink_count: u32) -> SessionTiming {
        SessionTiming {
            think: Duration::ZERO,
            blink: Duration::ZERO,
            blink_count,
            startup: Duration::ZERO,
        }
    }

    fn engine(seed: u64) -> SharedEngine {
        let config = EngineConfig::new(&["1", "2", "3", "4"], 3).unwrap();
        SharedEngine::new(HouseEngine::from_seed(config, seed))
    }

    #[test]
    fn test_trigger_sequence() {
        let recorder = Recorder::default();
        let mut controller =
            SessionController::new(engine(1), recorder.clone(), recorder.clone(), instant_timing(3));

        let house = controller.handle_trigger();
        let label = house.as_str().to_string();

        let mut expected = vec![Op::Light(false), Op::Clear, Op::Fill, Op::Clear];
        for _ in 0..3 {
            expected.push(Op::Clear);
            expected.push(Op::Show(label.clone()));
        }
        expected.push(Op::Show(label));
        expected.push(Op::Light(true));

        assert_eq!(recorder.take(), expected);
        assert_eq!(controller.presses(), 1);
    }

    #[test]
    fn test_greet_sequence() {
        let recorder = Recorder::default();
        let mut controller =
            SessionController::new(engine(1), recorder.clone(), recorder.clone(), instant_timing(3));

        controller.greet("Sorting Hat");

        assert_eq!(
            recorder.take(),
            vec![
                Op::Scroll("Sorting Hat".to_string()),
                Op::Fill,
                Op::Light(true),
                Op::Clear,
                Op::Light(false),
                Op::Light(true),
            ]
        );
        assert_eq!(controller.presses(), 0);
    }

    #[test]
    fn test_picks_follow_engine() {
        let recorder = Recorder::default();
        let mut controller =
            SessionController::new(engine(8), recorder.clone(), recorder, instant_timing(0));
        let reference = engine(8);

        for _ in 0..24 {
            assert_eq!(controller.handle_trigger(), reference.next_pick());
        }
        assert_eq!(controller.presses(), 24);
    }

    #[test]
    fn test_broken_panel_still_picks_balanced() {
        let mut controller = SessionController::new(engine(2), Broken, Broken, instant_timing(3));

        let mut picks: Vec<String> = (0..12)
            .map(|_| controller.handle_trigger().as_str().to_string())
            .collect();
        picks.sort();

        assert_eq!(
            picks,
            vec!["1", "1", "1", "2", "2", "2", "3", "3", "3", "4", "4", "4"]
        );
    }
}
