//! Input Form draft
//!
//! Holds what the user has typed so far and turns it into a stored item.

use crate::domain::{DomainResult, Item, Quantity};
use crate::store::ListStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: Quantity,
}

impl ItemDraft {
    /// Add the draft to `store`. Resets to defaults on success and is
    /// left untouched when the store rejects it.
    pub fn submit(&mut self, store: &mut ListStore) -> DomainResult<Item> {
        let item = store.add(&self.description, self.quantity)?;
        *self = Self::default();
        Ok(item)
    }
}
