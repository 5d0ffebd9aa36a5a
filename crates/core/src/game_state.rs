//! Game state module - the single record the whole game revolves around
//!
//! `GameState` owns the yarn balance and the two upgrade counts. Purchases are
//! all-or-nothing: a rejected purchase leaves every field untouched, so the
//! balance can never go negative through play.

use crate::economy;
use crate::error::GameError;
use crate::types::{GATHER_AMOUNT, KITTEN_BASE_RATE};

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    pub(crate) yarn: f64,
    pub(crate) kittens: u32,
    pub(crate) bowls: u32,
    /// Yarn per second per kitten before bowl bonuses. Never changed by play.
    pub(crate) kitten_base_rate: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: no yarn, no kittens, no bowls.
    pub fn new() -> Self {
        Self {
            yarn: 0.0,
            kittens: 0,
            bowls: 0,
            kitten_base_rate: KITTEN_BASE_RATE,
        }
    }

    /// Build a state from raw field values (save files, tests, benches).
    pub fn from_parts(yarn: f64, kittens: u32, bowls: u32, kitten_base_rate: f64) -> Self {
        Self {
            yarn,
            kittens,
            bowls,
            kitten_base_rate,
        }
    }

    pub fn yarn(&self) -> f64 {
        self.yarn
    }

    pub fn kittens(&self) -> u32 {
        self.kittens
    }

    pub fn bowls(&self) -> u32 {
        self.bowls
    }

    pub fn kitten_base_rate(&self) -> f64 {
        self.kitten_base_rate
    }

    /// Price of the next kitten.
    pub fn kitten_cost(&self) -> f64 {
        economy::kitten_cost(self.kittens)
    }

    /// Price of the next bowl.
    pub fn bowl_cost(&self) -> f64 {
        economy::bowl_cost(self.bowls)
    }

    /// Yarn per second from one kitten with the current bowls.
    pub fn kitten_rate(&self) -> f64 {
        economy::per_kitten_rate(self.kitten_base_rate, self.bowls)
    }

    /// Yarn per second from all kittens.
    pub fn passive_rate(&self) -> f64 {
        economy::passive_rate(self.kittens, self.kitten_base_rate, self.bowls)
    }

    /// Gather yarn by hand. Always succeeds.
    pub fn gather(&mut self) {
        self.yarn += GATHER_AMOUNT;
    }

    /// Buy one kitten, returning the new kitten count.
    pub fn buy_kitten(&mut self) -> Result<u32, GameError> {
        let next = self
            .kittens
            .checked_add(1)
            .ok_or(GameError::CountLimit { count: self.kittens })?;
        let cost = self.kitten_cost();
        self.spend(cost)?;
        self.kittens = next;
        Ok(next)
    }

    /// Buy one food bowl, returning the new bowl count.
    pub fn buy_bowl(&mut self) -> Result<u32, GameError> {
        let next = self
            .bowls
            .checked_add(1)
            .ok_or(GameError::CountLimit { count: self.bowls })?;
        let cost = self.bowl_cost();
        self.spend(cost)?;
        self.bowls = next;
        Ok(next)
    }

    /// Accrue passive income for `dt_secs` seconds of simulated time.
    pub fn tick(&mut self, dt_secs: f64) {
        self.yarn += self.passive_rate() * dt_secs;
    }

    fn spend(&mut self, cost: f64) -> Result<(), GameError> {
        if self.yarn >= cost {
            self.yarn -= cost;
            Ok(())
        } else {
            Err(GameError::InsufficientFunds {
                cost,
                yarn: self.yarn,
            })
        }
    }
}
