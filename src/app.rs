//! Packing List App
//!
//! Top-level component: form, list, stats footer and toast area.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::components::{AddItemForm, Logo, PackingList, StatsFooter, Toast};
use crate::context::NoticeContext;
use crate::store::{store_revision, store_snapshot_json, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide state to all children
    provide_context(store);
    provide_context(NoticeContext::new());

    // Log the list whenever it changes
    Effect::new(move |_| {
        let revision = store_revision(&store);
        debug!(revision, items = %store_snapshot_json(&store), "packing list changed");
    });

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingList />
            <StatsFooter />
            <Toast />
        </div>
    }
}
