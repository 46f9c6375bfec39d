//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The packing
//! list itself lives in a single `ListStore`; components go through the
//! helper functions below instead of touching fields directly.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use packing_core::{
    resolve_clear, sorted, ClearDecision, ClearOutcome, DomainResult, Item, ItemDraft, ItemId,
    ListStore, SortBy, Stats,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The packing list, in insertion order
    pub list: ListStore,
    /// Current display ordering
    pub sort_by: SortBy,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Submit the add-item draft. The draft is reset only when the item was stored.
pub fn store_add_item(store: &AppStore, draft: &mut ItemDraft) -> DomainResult<Item> {
    draft.submit(&mut store.list().write())
}

/// Remove an item from the list by ID
pub fn store_remove_item(store: &AppStore, item_id: ItemId) {
    if !store.list().write().remove(item_id) {
        debug!(%item_id, "remove ignored, no such item");
    }
}

/// Flip an item's packed flag by ID
pub fn store_toggle_item(store: &AppStore, item_id: ItemId) {
    if !store.list().write().toggle_packed(item_id) {
        debug!(%item_id, "toggle ignored, no such item");
    }
}

/// Evaluate a clear request against the current list without subscribing
pub fn store_request_clear(store: &AppStore) -> ClearDecision {
    store.list().read_untracked().request_clear()
}

/// Apply a clear decision once the user has answered
pub fn store_resolve_clear(store: &AppStore, decision: ClearDecision, confirmed: bool) -> ClearOutcome {
    resolve_clear(&mut store.list().write(), decision, confirmed)
}

pub fn store_sort_by(store: &AppStore) -> SortBy {
    store.sort_by().get()
}

pub fn store_set_sort(store: &AppStore, mode: SortBy) {
    store.sort_by().set(mode);
}

/// Items in the current display order (tracked)
pub fn store_sorted_items(store: &AppStore) -> Vec<Item> {
    let mode = store.sort_by().get();
    sorted(store.list().read().items(), mode)
}

/// Counts for the footer (tracked)
pub fn store_stats(store: &AppStore) -> Stats {
    Stats::from_items(store.list().read().items())
}

/// List revision, changes on every effective mutation (tracked)
pub fn store_revision(store: &AppStore) -> u64 {
    store.list().read().revision()
}

/// JSON dump of the list for debug logging
pub fn store_snapshot_json(store: &AppStore) -> String {
    serde_json::to_string(store.list().read_untracked().items())
        .unwrap_or_else(|err| format!("<unserializable: {}>", err))
}
