//! Deterministic game logic for the potion prototype.
//!
//! `game-core` defines the canonical rules and data types: the player state
//! (health, position, inventory), the two actions that mutate it (moving and
//! consuming a potion), and the engine that executes them. All state mutation
//! flows through [`engine::GameEngine`]; reads go through the accessors on
//! [`state::GameState`], which return copies.
pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, ActionTransition, ConsumeAction, ConsumeError, MoveAction, MoveError};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use state::{GameState, Inventory, Item, Position};
