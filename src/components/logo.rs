use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! { <h1>"🌴 Far Away 💼"</h1> }
}
