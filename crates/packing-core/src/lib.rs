//! Packing List Core
//!
//! Framework-free packing list logic:
//! - domain: Item entity, quantity and errors
//! - store: the owned, ordered item collection and its mutations
//! - sort: display orderings derived from the store
//! - stats: packed counts and percentage
//! - form: add-item draft delegating to the store
//! - notification: clear-list guard and user notices

pub mod domain;
pub mod form;
pub mod notification;
pub mod sort;
pub mod stats;
pub mod store;

pub use domain::{DomainError, DomainResult, Entity, Item, ItemId, Quantity};
pub use form::ItemDraft;
pub use notification::{
    request_clear, resolve_clear, ClearDecision, ClearOutcome, Notice, NoticeLevel,
    CONFIRM_CLEAR_PROMPT, NOTICE_AUTO_CLOSE_MS,
};
pub use sort::{sorted, SortBy};
pub use stats::{format_percent, Stats, StatsSummary};
pub use store::ListStore;
