//! Authoritative game state representation.
//!
//! This module owns the data that describes the player: health, position,
//! and inventory. Embedding layers clone or query this state but mutate it
//! exclusively through the engine.

pub mod types;

pub use types::{Inventory, Item, Position};

use crate::config::GameConfig;

/// Canonical snapshot of the game state.
///
/// Fields are crate-private: the read accessors below return copies, and all
/// mutation flows through [`GameEngine`](crate::engine::GameEngine), so there
/// is no external mutation path.
///
/// # Invariants
///
/// - `position` is component-wise non-negative.
/// - Every inventory count is strictly positive.
/// - `health` has no lower bound, no cap, and no death rule: nothing clamps
///   it or reacts when it runs low.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub(crate) health: i64,
    pub(crate) position: Position,
    pub(crate) inventory: Inventory,
}

impl GameState {
    /// Creates a fresh state from the configured starting values.
    pub fn new() -> Self {
        Self {
            health: GameConfig::STARTING_HEALTH,
            position: GameConfig::STARTING_POSITION,
            inventory: GameConfig::starting_inventory(),
        }
    }

    /// Current health. May be zero or negative.
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Current coordinates.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Snapshot copy of current holdings.
    ///
    /// Mutating the returned value has no effect on the game state.
    pub fn inventory(&self) -> Inventory {
        self.inventory.clone()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
