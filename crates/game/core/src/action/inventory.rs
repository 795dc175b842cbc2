use crate::action::ActionTransition;
use crate::state::{GameState, Item};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumeError {
    #[error("this item is not in the inventory")]
    NotInInventory,
}

/// Consumes one copy of a held item, restoring its value as health.
///
/// Lookup requires an exact name + value match; an item sharing a name with
/// a held item but declaring a different value does not match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumeAction {
    pub item: Item,
}

impl ConsumeAction {
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

impl ActionTransition for ConsumeAction {
    type Error = ConsumeError;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !state.inventory.contains(&self.item) {
            return Err(ConsumeError::NotInInventory);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        if !state.inventory.take_one(&self.item) {
            return Err(ConsumeError::NotInInventory);
        }
        state.health += i64::from(self.item.value);
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        debug_assert!(
            state.inventory.iter().all(|(_, count)| count > 0),
            "inventory must never hold a zero count"
        );
        Ok(())
    }
}
