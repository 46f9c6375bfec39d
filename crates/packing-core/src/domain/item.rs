//! Item Entity
//!
//! One entry on the packing list.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::Entity;
use super::quantity::Quantity;

/// Unique item identifier, assigned by the list store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A packing list entry
///
/// Only `packed` ever changes after creation, and it changes by
/// replacing the record with [`Item::toggled`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// What to pack, never empty
    pub description: String,
    /// How many
    pub quantity: Quantity,
    /// Already in the bag
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item
    pub fn new(id: ItemId, description: String, quantity: Quantity) -> Self {
        Self {
            id,
            description,
            quantity,
            packed: false,
        }
    }

    /// Copy of this item with the packed flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
