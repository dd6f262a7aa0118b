//! Todo Footer Component
//!
//! Remaining count and "Clear completed".

use leptos::prelude::*;

use crate::store::{store_clear_completed, use_app_store, AppStateStoreFields};

/// "1 item left" / "3 items left"
fn items_left_label(remaining: usize) -> String {
    match remaining {
        1 => "1 item left".to_string(),
        n => format!("{} items left", n),
    }
}

#[component]
pub fn TodoFooter() -> impl IntoView {
    let store = use_app_store();
    let remaining = move || store.todos().read().remaining();
    let has_completed = move || store.todos().read().completed_count() > 0;

    view! {
        <Show when=move || !store.todos().read().is_empty()>
            <footer class="todo-footer">
                <span class="item-count">{move || items_left_label(remaining())}</span>
                <Show when=has_completed>
                    <button
                        class="btn clear-completed"
                        on:click=move |_| { store_clear_completed(&store); }
                    >
                        "Clear completed"
                    </button>
                </Show>
            </footer>
        </Show>
    }
}
