//! Todo List View Component
//!
//! Renders the visible items in list order. Rows can be dragged to reorder;
//! dropping on a row inserts before it, dropping on the trailing zone appends.

use leptos::prelude::*;
use todo_core::ItemId;

use crate::components::TodoRow;
use crate::store::{store_move_item, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals::<ItemId>();

    bind_global_mouseup(dnd, move |dragged: ItemId, target| {
        log::debug!("[DND] drop: dragged={}, target={:?}", dragged, target);
        match target {
            DropTarget::Before(before) => store_move_item(&store, &dragged, Some(&before)),
            DropTarget::End => store_move_item(&store, &dragged, None),
        }
    });

    let visible_ids = move || {
        let filter = store.filter().get();
        store
            .todos()
            .read()
            .visible(filter)
            .into_iter()
            .map(|item| item.id.clone())
            .collect::<Vec<ItemId>>()
    };

    // Only highlight targets where a drop would actually reorder
    let drop_changes_order = move |target: &DropTarget<ItemId>| {
        dnd.dragging_id_read.with(|dragging| match (dragging, target) {
            (Some(dragged), DropTarget::Before(before)) => store.todos().read().would_move(dragged, Some(before)),
            (Some(dragged), DropTarget::End) => store.todos().read().would_move(dragged, None),
            (None, _) => false,
        })
    };

    let end_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.is_target(&DropTarget::End) && drop_changes_order(&DropTarget::End) { c.push_str(" active"); }
        c
    };

    view! {
        <ul class="todo-list">
            <For
                each=visible_ids
                // Key on id only: rows read their fields live, so an edit
                // keeps the same DOM nodes under the pointer
                key=|id: &ItemId| id.clone()
                children=move |id: ItemId| {
                    let on_mousedown = make_on_mousedown(dnd, id.clone());
                    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
                    let on_mouseleave = make_on_mouseleave(dnd);
                    let target = DropTarget::Before(id.clone());
                    let row_id = id.clone();

                    let row_class = move || {
                        let mut c = String::from("row");
                        if dnd.is_dragging_key(&row_id) { c.push_str(" dragging"); }
                        if dnd.is_target(&target) && drop_changes_order(&target) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <li
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <TodoRow id=id.clone() drag_just_ended=dnd.drag_just_ended_read />
                        </li>
                    }
                }
            />
            <li
                class=end_class
                on:mouseenter=make_on_end_mouseenter(dnd)
                on:mouseleave=make_on_mouseleave(dnd)
            />
        </ul>
    }
}
