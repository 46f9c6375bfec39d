//! End-to-end packing list flows against the public API.

use packing_core::{
    resolve_clear, sorted, ClearDecision, ClearOutcome, ItemDraft, ListStore, Quantity, SortBy,
    Stats, StatsSummary,
};

fn socks_and_hat() -> ListStore {
    let mut store = ListStore::new();
    store.add("socks", Quantity::new(2).unwrap()).unwrap();
    store.add("hat", Quantity::new(1).unwrap()).unwrap();
    store
}

#[test]
fn add_two_items() {
    let store = socks_and_hat();

    let view: Vec<(&str, u8, bool)> = store
        .items()
        .iter()
        .map(|i| (i.description.as_str(), i.quantity.get(), i.packed))
        .collect();
    assert_eq!(view, vec![("socks", 2, false), ("hat", 1, false)]);

    let stats = Stats::from_items(store.items());
    assert_eq!((stats.total, stats.packed), (2, 0));
    assert_eq!(stats.percent_packed(), Some(0.0));
}

#[test]
fn toggle_socks_is_half_packed() {
    let mut store = socks_and_hat();
    let socks = store.items()[0].id;
    store.toggle_packed(socks);

    let stats = Stats::from_items(store.items());
    assert_eq!(stats.packed, 1);
    assert_eq!(stats.percent_packed(), Some(50.0));
    assert_eq!(
        stats.summary().message(),
        "🧳 You have 2 items on your list, and you already packed 1 (50.0%)"
    );

    // Packed view puts hat (unpacked) before socks
    let order: Vec<_> = sorted(store.items(), SortBy::default())
        .into_iter()
        .map(|i| i.description)
        .collect();
    assert_eq!(order, vec!["hat", "socks"]);
}

#[test]
fn confirmed_clear_shows_empty_state() {
    let mut store = socks_and_hat();

    let decision = store.request_clear();
    assert_eq!(decision, ClearDecision::ConfirmThenClear);
    assert_eq!(
        resolve_clear(&mut store, decision, true),
        ClearOutcome::Cleared { removed: 2 }
    );

    assert!(store.is_empty());
    assert_eq!(Stats::from_items(store.items()).summary(), StatsSummary::Empty);
}

#[test]
fn clear_on_empty_list_only_warns() {
    let mut store = ListStore::new();

    let decision = store.request_clear();
    assert_eq!(decision, ClearDecision::Warn);
    assert_eq!(resolve_clear(&mut store, decision, false), ClearOutcome::Warned);
    assert!(store.is_empty());
}

#[test]
fn form_flow_resets_between_items() {
    let mut store = ListStore::new();
    let mut draft = ItemDraft::default();

    draft.description = "passport".to_string();
    draft.submit(&mut store).unwrap();
    assert!(draft.description.is_empty());

    // Submitting the reset draft is rejected
    assert!(draft.submit(&mut store).is_err());
    assert_eq!(store.len(), 1);
}
