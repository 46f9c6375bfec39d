//! List Store
//!
//! Sole owner of the ordered item sequence. Insertion order is the
//! canonical order; sorted views and stats are derived from `items()`.

use tracing::{debug, info, warn};

use crate::domain::{DomainError, DomainResult, Entity, Item, ItemId, Quantity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStore {
    items: Vec<Item>,
    next_id: u64,
    revision: u64,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every mutation that changed the sequence
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new unpacked item.
    ///
    /// The description is trimmed; an empty result is rejected and
    /// nothing is stored.
    pub fn add(&mut self, description: &str, quantity: Quantity) -> DomainResult<Item> {
        let description = description.trim();
        if description.is_empty() {
            warn!("rejected item with empty description");
            return Err(DomainError::Validation(
                "description must not be empty".to_string(),
            ));
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;

        let item = Item::new(id, description.to_string(), quantity);
        self.items.push(item.clone());
        self.touch();
        debug!(%id, description, quantity = quantity.get(), "item added");
        Ok(item)
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            self.touch();
            debug!(%id, "item removed");
        }
        removed
    }

    /// Flip the packed flag of the item with `id`. Returns whether it matched.
    pub fn toggle_packed(&mut self, id: ItemId) -> bool {
        let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        *slot = slot.toggled();
        let packed = slot.packed;
        self.touch();
        debug!(%id, packed, "item toggled");
        true
    }

    /// Drop every item. No confirmation here, see [`crate::notification`].
    /// Returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        if removed > 0 {
            self.items.clear();
            self.touch();
        }
        info!(removed, "list cleared");
        removed
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
