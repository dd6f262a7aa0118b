//! Todo Widget App
//!
//! Root component: loads the list, wires persistence, lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::TodoList;

use crate::components::{FilterBar, NewItemForm, TodoFooter, TodoListView};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::storage::LocalStorageRepository;
use crate::store::{load_todos, persist_on_change, AppState};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let repository = config
        .persist
        .then(|| LocalStorageRepository::new(config.storage_key.clone()));
    let todos = repository.as_ref().map(|repo| load_todos(repo)).unwrap_or_else(TodoList::new);

    let store = Store::new(AppState::new(todos));
    provide_context(store);
    provide_context(AppContext::from_config(&config));

    match repository {
        Some(repo) => persist_on_change(store, repo),
        None => log::info!("[APP] persistence disabled, list lives in memory only"),
    }

    view! {
        <div class="todo-app">
            <h1>{config.title}</h1>
            <NewItemForm />
            <FilterBar />
            <TodoListView />
            <TodoFooter />
        </div>
    }
}
