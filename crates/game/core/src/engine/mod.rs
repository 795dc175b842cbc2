//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. All
//! state mutation flows through [`GameEngine::execute`], which drives the
//! three-phase transition pipeline and surfaces phase-tagged errors. Because
//! every check runs before the first field is touched, a rejected action
//! leaves the state exactly as it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::state::GameState;

/// Game engine that executes actions against a mutably borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action by routing it through the transition pipeline.
    ///
    /// On success the action's full effect is committed; on error nothing
    /// changed and the engine remains usable for further actions.
    pub fn execute(&mut self, action: &Action) -> Result<(), ExecuteError> {
        tracing::debug!("executing {}", action.as_snake_case());

        let result = transition::execute_transition(action, self.state);
        if let Err(error) = &result {
            tracing::debug!("{} rejected: {}", action.as_snake_case(), error);
        }

        result
    }
}
