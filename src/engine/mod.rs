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

//! Balanced random house assignment.
//!
//! The [`HouseEngine`] hands out one house per call. Houses are drawn from a
//! pick pool holding every configured house `repetition_factor` times, shuffled
//! when the pool is (re)filled. Each generation of the pool therefore yields
//! every house exactly `repetition_factor` times, while the order inside a
//! generation stays unpredictable to anyone watching.
//!
//! # Concurrency
//!
//! [`HouseEngine::next_pick`] takes `&mut self`, so a single owner needs no
//! locking. When several threads share one engine they must go through
//! [`SharedEngine`], which holds its lock across the refill and the pop of a
//! single pick. Interleaving two refills would break the per-generation
//! balance.

mod error;

use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info};

pub(crate) use error::ConfigError;

/// A single house label.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct House(String);

impl House {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for House {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// Validated engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EngineConfig {
    houses: Vec<House>,
    repetition_factor: usize,
}

impl EngineConfig {
    /// Validates the house labels and repetition factor.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if there are no houses, a label is blank or
    /// repeated, or the repetition factor is not positive.
    pub(crate) fn new<S: AsRef<str>>(
        houses: &[S],
        repetition_factor: i64,
    ) -> Result<Self, ConfigError> {
        if houses.is_empty() {
            return Err(ConfigError::NoHouses);
        }

        let mut seen = HashSet::new();
        for (index, house) in houses.iter().enumerate() {
            let label: &str = house.as_ref();
            if label.trim().is_empty() {
                return Err(ConfigError::BlankHouse(index));
            }
            if !seen.insert(label) {
                return Err(ConfigError::DuplicateHouse(label.to_string()));
            }
        }

        let repetition_factor = usize::try_from(repetition_factor)
            .ok()
            .filter(|&r| r > 0)
            .ok_or(ConfigError::InvalidRepetition(repetition_factor))?;

        Ok(Self {
            houses: houses.iter().map(|h| House::from(h.as_ref())).collect(),
            repetition_factor,
        })
    }

    pub(crate) fn houses(&self) -> &[House] {
        &self.houses
    }

    pub(crate) fn repetition_factor(&self) -> usize {
        self.repetition_factor
    }

    /// Number of picks in one balanced block.
    pub(crate) fn block_size(&self) -> usize {
        self.houses.len() * self.repetition_factor
    }

    // Every house, repeated `repetition_factor` times.
    fn base_multiset(&self) -> Vec<House> {
        let mut base = Vec::with_capacity(self.block_size());
        for _ in 0..self.repetition_factor {
            base.extend(self.houses.iter().cloned());
        }
        base
    }
}

/// Hands out houses so that every block of [`EngineConfig::block_size`] picks
/// is balanced.
pub(crate) struct HouseEngine<R: Rng = StdRng> {
    config: EngineConfig,
    pool: Vec<House>,
    rng: R,
    generation: u64,
}

impl HouseEngine<StdRng> {
    /// Creates an engine with a freshly seeded random source.
    pub(crate) fn from_entropy(config: EngineConfig) -> Self {
        Self::new(config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates an engine whose pick sequence is fully determined by `seed`.
    pub(crate) fn from_seed(config: EngineConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HouseEngine<R> {
    /// Creates an engine with an empty pool; the first pick fills it.
    pub(crate) fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            pool: Vec::with_capacity(config.block_size()),
            config,
            rng,
            generation: 0,
        }
    }

    /// Returns the next house, refilling and reshuffling the pool when it is
    /// empty.
    pub(crate) fn next_pick(&mut self) -> House {
        // A validated configuration always refills to a non-empty pool, so
        // this loops at most twice.
        loop {
            if let Some(pick) = self.pool.pop() {
                debug!(house = %pick, remaining = self.pool.len(), "pick");
                return pick;
            }
            self.refill();
        }
    }

    fn refill(&mut self) {
        let mut pool = self.config.base_multiset();
        pool.shuffle(&mut self.rng);
        self.pool = pool;
        self.generation += 1;

        info!(
            generation = self.generation,
            size = self.pool.len(),
            "refreshed pick pool"
        );
    }
}

/// A cloneable, thread-safe handle to one [`HouseEngine`].
///
/// Each call to [`SharedEngine::next_pick`] runs to completion under the lock,
/// refill included.
#[derive(Clone)]
pub(crate) struct SharedEngine {
    inner: Arc<Mutex<HouseEngine>>,
}

impl SharedEngine {
    pub(crate) fn new(engine: HouseEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub(crate) fn next_pick(&self) -> House {
        // `next_pick` never panics part way through, so a poisoned lock still
        // guards a consistent pool.
        let mut engine = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        engine.next_pick()
    }
}
