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

//! Application configuration.
//!
//! This module manages the application configuration file. The file is created
//! with default values the first time the application runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    engine::{ConfigError, EngineConfig},
    session::SessionTiming,
};

const CONFIG_NAME: &str = "sortinghat";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    pub houses: Vec<String>,
    pub repetition_factor: i64,
    pub seed: Option<u64>,

    pub debounce_ms: u64,
    pub think_ms: u64,
    pub blink_ms: u64,
    pub blink_count: u32,
    pub startup_ms: u64,
    pub scroll_delay_ms: u64,

    pub banner: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            houses: ["1", "2", "3", "4"].map(String::from).to_vec(),
            repetition_factor: 3,
            seed: None,
            debounce_ms: 2000,
            think_ms: 500,
            blink_ms: 250,
            blink_count: 3,
            startup_ms: 500,
            scroll_delay_ms: 40,
            banner: "Sorting Hat".to_string(),
        }
    }
}

impl AppConfig {
    /// Validates the house settings for the assignment engine.
    pub(crate) fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::new(&self.houses, self.repetition_factor)
    }

    pub(crate) fn session_timing(&self) -> SessionTiming {
        SessionTiming {
            think: Duration::from_millis(self.think_ms),
            blink: Duration::from_millis(self.blink_ms),
            blink_count: self.blink_count,
            startup: Duration::from_millis(self.startup_ms),
        }
    }

    pub(crate) fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub(crate) fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}
