//! Clear List Button Component
//!
//! Warns when the list is already empty, otherwise asks for an inline
//! yes/no confirmation before clearing.

use leptos::prelude::*;

use packing_core::{ClearDecision, ClearOutcome, Notice, CONFIRM_CLEAR_PROMPT};

use crate::context::use_notices;
use crate::store::{store_request_clear, store_resolve_clear, use_app_store};

#[component]
pub fn ClearListButton() -> impl IntoView {
    let store = use_app_store();
    let notices = use_notices();

    let (confirming, set_confirming) = signal(false);

    let request_clear = move |_: web_sys::MouseEvent| match store_request_clear(&store) {
        ClearDecision::Warn => notices.show(Notice::list_already_empty()),
        ClearDecision::ConfirmThenClear => set_confirming.set(true),
    };

    let answer = move |confirmed: bool| {
        set_confirming.set(false);
        let outcome = store_resolve_clear(&store, ClearDecision::ConfirmThenClear, confirmed);
        if let ClearOutcome::Cleared { removed } = outcome {
            if removed > 0 {
                notices.show(Notice::info(format!("Removed {} items", removed)));
            }
        }
    };

    view! {
        <Show when=move || !confirming.get()>
            <button class="clear-btn" on:click=request_clear>"Clear List"</button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span class="clear-confirm-text">{CONFIRM_CLEAR_PROMPT}</span>
                <button class="confirm-btn" on:click=move |_| answer(true)>"Yes"</button>
                <button class="cancel-btn" on:click=move |_| answer(false)>"No"</button>
            </span>
        </Show>
    }
}
