//! Toast Component
//!
//! Bottom-right transient notice. Click to dismiss early.

use leptos::prelude::*;

use crate::context::use_notices;

#[component]
pub fn Toast() -> impl IntoView {
    let notices = use_notices();

    move || {
        notices.notice.get().map(|notice| {
            let class = notice.css_class();
            view! {
                <div class=class on:click=move |_| notices.dismiss()>
                    <p>{notice.message}</p>
                </div>
            }
        })
    }
}
