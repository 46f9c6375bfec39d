//! Domain Layer
//!
//! Packing list entities and the error type shared by every operation.
//! This layer has no framework dependencies (serde and thiserror only).

mod entity;
mod item;
mod quantity;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{Item, ItemId};
pub use quantity::Quantity;
