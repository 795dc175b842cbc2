use crate::state::{Inventory, Item, Position};

/// Game configuration constants.
///
/// All fixed starting values live here rather than inline in constructors so
/// the whole initial state is visible in one place.
pub struct GameConfig;

impl GameConfig {
    pub const STARTING_HEALTH: i64 = 100;
    pub const STARTING_POSITION: Position = Position::ORIGIN;

    /// Items held at the start of a session.
    pub fn starting_inventory() -> Inventory {
        Inventory::with_items([
            (Item::new("Petite potion", 20), 3),
            (Item::new("Grande potion", 50), 1),
        ])
    }
}
