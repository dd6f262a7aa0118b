//! Filter Bar Component

use leptos::prelude::*;
use todo_core::Filter;

use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// All / Active / Completed buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn small active" } else { "filter-btn small" }
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
