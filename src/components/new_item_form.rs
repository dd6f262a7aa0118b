//! New Item Form Component
//!
//! Text input plus "Add Todo" button.

use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

/// Form for appending new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_item(&store, &new_text.get()).is_some() {
            // Reset input for the next entry
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                class="input"
                placeholder="What needs to be done?"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">"Add Todo"</button>
        </form>
    }
}
