//! Action domain.
//!
//! Every mutation of [`GameState`] is expressed as an action implementing
//! [`ActionTransition`] and executed by the engine through the three-phase
//! pipeline: `pre_validate` → `apply` → `post_validate`. Validation runs
//! entirely against the unmutated state, so a rejected action observably
//! changes nothing.
//!
//! # Module Structure
//!
//! - `movement`: player displacement paid for with health
//! - `inventory`: consuming a held item to restore health

pub mod inventory;
pub mod movement;

pub use inventory::{ConsumeAction, ConsumeError};
pub use movement::{MoveAction, MoveError};

use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// Checks run in a fixed order and the first failure wins, so exactly one
    /// error is reported even when several conditions would reject.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum routing the concrete transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Consume(ConsumeAction),
}

impl Action {
    /// Returns the snake_case string representation of the action.
    ///
    /// Used for logging and serialization keys.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Consume(_) => "consume",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<ConsumeAction> for Action {
    fn from(action: ConsumeAction) -> Self {
        Self::Consume(action)
    }
}
