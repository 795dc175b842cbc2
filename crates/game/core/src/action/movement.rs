use crate::action::ActionTransition;
use crate::state::{GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("insufficient health to move that far")]
    InsufficientHealth,

    #[error("cannot move that far left")]
    PastLeftEdge,

    #[error("cannot move that far down")]
    PastBottomEdge,
}

/// Displaces the player by a signed delta, paying `delta_x + delta_y` health.
///
/// Validation order is fixed: the health check runs before either bounds
/// check, and the x bound before the y bound, so the reported error for a
/// multiply-invalid delta is always the earliest failing check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub delta_x: i64,
    pub delta_y: i64,
}

impl MoveAction {
    pub fn new(delta_x: i64, delta_y: i64) -> Self {
        Self { delta_x, delta_y }
    }

    fn destination_from(&self, origin: Position) -> Position {
        origin.translated(self.delta_x, self.delta_y)
    }

    fn cost(&self) -> i64 {
        self.delta_x + self.delta_y
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.health <= self.cost() {
            return Err(MoveError::InsufficientHealth);
        }

        let destination = self.destination_from(state.position);
        if destination.x < 0 {
            return Err(MoveError::PastLeftEdge);
        }
        if destination.y < 0 {
            return Err(MoveError::PastBottomEdge);
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        state.position = self.destination_from(state.position);
        state.health -= self.cost();
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert!(
            state.position.x >= 0 && state.position.y >= 0,
            "committed position must be non-negative"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_east_and_pays_health() {
        let mut state = GameState::new();

        let action = MoveAction::new(10, 0);
        action.pre_validate(&state).unwrap();
        action.apply(&mut state).unwrap();
        action.post_validate(&state).unwrap();

        assert_eq!(state.position(), Position::new(10, 0));
        assert_eq!(state.health(), 90);
    }

    #[test]
    fn moves_north_and_pays_health() {
        let mut state = GameState::new();

        let action = MoveAction::new(0, 10);
        action.pre_validate(&state).unwrap();
        action.apply(&mut state).unwrap();

        assert_eq!(state.position(), Position::new(0, 10));
        assert_eq!(state.health(), 90);
    }

    #[test]
    fn negative_delta_refunds_health() {
        let mut state = GameState::new();
        MoveAction::new(8, 6).apply(&mut state).unwrap();

        let action = MoveAction::new(-3, -2);
        action.pre_validate(&state).unwrap();
        action.apply(&mut state).unwrap();

        assert_eq!(state.position(), Position::new(5, 4));
        // 100 - 14 + 5
        assert_eq!(state.health(), 91);
    }

    #[test]
    fn rejects_crossing_the_left_bound() {
        let state = GameState::new();

        let result = MoveAction::new(-10, 0).pre_validate(&state);
        assert_eq!(result, Err(MoveError::PastLeftEdge));
    }

    #[test]
    fn rejects_crossing_the_bottom_bound() {
        let state = GameState::new();

        let result = MoveAction::new(0, -10).pre_validate(&state);
        assert_eq!(result, Err(MoveError::PastBottomEdge));
    }

    #[test]
    fn rejects_deltas_costing_at_least_current_health() {
        let state = GameState::new();

        let result = MoveAction::new(1000, 1000).pre_validate(&state);
        assert_eq!(result, Err(MoveError::InsufficientHealth));
    }

    #[test]
    fn cost_equal_to_health_is_rejected() {
        let state = GameState::new();

        let result = MoveAction::new(60, 40).pre_validate(&state);
        assert_eq!(result, Err(MoveError::InsufficientHealth));
    }

    #[test]
    fn health_check_wins_over_bounds_checks() {
        // delta sum is 110 >= 100 and x would go negative; the health error
        // is reported because its check runs first.
        let state = GameState::new();

        let result = MoveAction::new(-10, 120).pre_validate(&state);
        assert_eq!(result, Err(MoveError::InsufficientHealth));
    }

    #[test]
    fn x_bound_wins_over_y_bound() {
        let state = GameState::new();

        let result = MoveAction::new(-5, -5).pre_validate(&state);
        assert_eq!(result, Err(MoveError::PastLeftEdge));
    }
}
