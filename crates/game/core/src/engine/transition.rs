//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

/// Routes an action to its transition and drives the pipeline.
///
/// This is the internal implementation used by `GameEngine::execute()`.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
) -> Result<(), ExecuteError> {
    match action {
        Action::Move(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Move)
        }
        Action::Consume(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Consume)
        }
    }
}
