//! Add Item Form Component
//!
//! Quantity selector plus description input for new list entries.

use leptos::prelude::*;
use tracing::debug;

use packing_core::{ItemDraft, Quantity};

use crate::store::{store_add_item, use_app_store};

/// Form for adding items to the packing list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(Quantity::default());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut draft = ItemDraft {
            description: description.get_untracked(),
            quantity: quantity.get_untracked(),
        };
        match store_add_item(&store, &mut draft) {
            Ok(_) => {
                // Draft is back to defaults
                set_description.set(draft.description);
                set_quantity.set(draft.quantity);
            }
            Err(err) => debug!(%err, "add rejected"),
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your trip? ✈️"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    let picked = event_target_value(&ev).parse::<u8>().ok().and_then(Quantity::new);
                    if let Some(q) = picked {
                        set_quantity.set(q);
                    }
                }
            >
                {Quantity::all().map(|q| view! {
                    <option value=q.to_string()>{q.to_string()}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
