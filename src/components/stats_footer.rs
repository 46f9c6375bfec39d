//! Stats Footer Component

use leptos::prelude::*;

use crate::store::{store_stats, use_app_store};

/// Packed progress, or a prompt when the list is empty
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();

    let message = move || store_stats(&store).summary().message();

    view! {
        <footer class="stats">
            <em>{message}</em>
        </footer>
    }
}
