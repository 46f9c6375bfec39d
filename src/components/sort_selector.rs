//! Sort Selector Component

use leptos::prelude::*;
use tracing::warn;

use packing_core::SortBy;

use crate::store::{store_set_sort, store_sort_by, use_app_store};

/// Drop-down for the display ordering
#[component]
pub fn SortSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            prop:value=move || store_sort_by(&store).as_str()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<SortBy>() {
                    Ok(mode) => store_set_sort(&store, mode),
                    Err(err) => warn!(%err, "sort selection ignored"),
                }
            }
        >
            {SortBy::ALL.iter().map(|mode| view! {
                <option value=mode.as_str()>{mode.label()}</option>
            }).collect_view()}
        </select>
    }
}
