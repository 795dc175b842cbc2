//! Inventory storage for the player.

use std::collections::BTreeMap;

use super::Item;

/// Holdings keyed by item identity, each with a strictly positive count.
///
/// # Invariants
///
/// - Every stored count is strictly positive. Granting a zero quantity is a
///   no-op, and taking the last copy removes the key entirely, so a zero or
///   negative count is unrepresentable.
/// - Iteration follows the item ordering (name, then value), keeping logs and
///   serialized snapshots deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeMap<Item, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Builds an inventory from `(item, count)` entries, skipping zero counts.
    pub fn with_items(entries: impl IntoIterator<Item = (Item, u32)>) -> Self {
        let mut inventory = Self::new();
        for (item, quantity) in entries {
            inventory.grant(item, quantity);
        }
        inventory
    }

    /// Number of copies held, or zero when the item is not a key.
    ///
    /// The explicit zero default replaces any missing-key convention at call
    /// sites: absence and a zero count are the same observation.
    pub fn count(&self, item: &Item) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains_key(item)
    }

    /// Adds copies of an item, merging with any existing count.
    pub fn grant(&mut self, item: Item, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item).or_insert(0) += quantity;
    }

    /// Removes one copy of the item, dropping the key at count zero.
    ///
    /// Returns false (and changes nothing) when the item is not held.
    pub(crate) fn take_one(&mut self, item: &Item) -> bool {
        match self.items.get_mut(item) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.items.remove(item);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Item, u32)> {
        self.items.iter().map(|(item, count)| (item, *count))
    }

    /// Number of distinct item kinds held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_zero_for_missing_key() {
        let inventory = Inventory::new();
        assert_eq!(inventory.count(&Item::new("Petite potion", 20)), 0);
    }

    #[test]
    fn grant_zero_is_a_no_op() {
        let mut inventory = Inventory::new();
        inventory.grant(Item::new("Petite potion", 20), 0);
        assert!(inventory.is_empty());
        assert!(!inventory.contains(&Item::new("Petite potion", 20)));
    }

    #[test]
    fn grant_merges_existing_counts() {
        let mut inventory = Inventory::new();
        inventory.grant(Item::new("Petite potion", 20), 2);
        inventory.grant(Item::new("Petite potion", 20), 3);
        assert_eq!(inventory.count(&Item::new("Petite potion", 20)), 5);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn take_one_drops_key_at_zero() {
        let mut inventory = Inventory::with_items([(Item::new("Grande potion", 50), 1)]);
        assert!(inventory.take_one(&Item::new("Grande potion", 50)));
        assert!(!inventory.contains(&Item::new("Grande potion", 50)));
        assert!(inventory.is_empty());
    }

    #[test]
    fn take_one_fails_without_exact_value_match() {
        let mut inventory = Inventory::with_items([(Item::new("Petite potion", 20), 3)]);
        assert!(!inventory.take_one(&Item::new("Petite potion", 25)));
        assert_eq!(inventory.count(&Item::new("Petite potion", 20)), 3);
    }

    #[test]
    fn iteration_follows_item_order() {
        let inventory = Inventory::with_items([
            (Item::new("Petite potion", 20), 3),
            (Item::new("Grande potion", 50), 1),
        ]);
        let names: Vec<&str> = inventory.iter().map(|(item, _)| item.name.as_str()).collect();
        assert_eq!(names, ["Grande potion", "Petite potion"]);
    }
}
