//! Packing List Component
//!
//! Renders the sorted items and the list actions.

use leptos::prelude::*;

use crate::components::{ClearListButton, ItemRow, SortSelector};
use crate::store::{store_sorted_items, use_app_store};

#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();

    let sorted_items = move || store_sorted_items(&store);

    view! {
        <div class="list">
            <ul>
                <For
                    each=sorted_items
                    // Packed flag in the key so a toggle re-renders the row
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>

            <div class="actions">
                <SortSelector />
                <ClearListButton />
            </div>
        </div>
    }
}
