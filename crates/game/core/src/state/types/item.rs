//! Item-related state types.

/// Immutable identity of a consumable item.
///
/// Items are compared structurally: two items are the same iff both the name
/// and the restorative value match. An item sharing a name with a held item
/// but declaring a different value is a distinct item and will not match in
/// the inventory. The derived ordering (name, then value) doubles as the
/// stable map key used by [`Inventory`](super::Inventory).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Health restored when the item is consumed.
    pub value: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
