//! Todo Row Component
//!
//! Checkbox, text (click to edit in place), remove button.
//! The row is keyed by id and reads its item live from the store, so saving
//! an edit updates the text in place instead of replacing the row.

use leptos::html;
use leptos::prelude::*;
use todo_core::{EditOutcome, EditSession, ItemId};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_edit_item, store_item, store_remove_item, store_toggle_item, use_app_store};

/// A single item row
#[component]
pub fn TodoRow(
    id: ItemId,
    /// Set briefly after a drag ends so the trailing click does not start an edit
    #[prop(optional)]
    drag_just_ended: Option<ReadSignal<bool>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let item = store_item(store, id.clone());
    let completed = move || item.with(|i| i.as_ref().is_some_and(|i| i.completed));
    let text = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.text.clone()).unwrap_or_default()));

    let (session, set_session) = signal(None::<EditSession>);
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the editor as soon as it is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let apply = move |outcome: EditOutcome| match outcome {
        EditOutcome::Continue => {}
        EditOutcome::Commit(text) => {
            let editing = session.get_untracked();
            set_session.set(None);
            if let Some(s) = editing {
                store_edit_item(&store, &s.id, &text);
            }
        }
        EditOutcome::Cancel => set_session.set(None),
    };

    let toggle_id = id.clone();
    let remove = Callback::new(move |_: ()| store_remove_item(&store, &id));

    view! {
        <div class=move || if completed() { "item completed" } else { "item" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| store_toggle_item(&store, &toggle_id)
            />

            <Show
                when=move || session.with(Option::is_some)
                fallback=move || view! {
                    <span
                        class="text"
                        on:click=move |_| {
                            let dragged = drag_just_ended.is_some_and(|s| s.get_untracked());
                            if !ctx.inline_edit || dragged {
                                return;
                            }
                            if let Some(current) = item.get_untracked() {
                                set_session.set(Some(EditSession::begin(&current)));
                            }
                        }
                    >
                        {move || text.get()}
                    </span>
                }
            >
                <input
                    class="input"
                    node_ref=input_ref
                    prop:value=move || session.with(|s| s.as_ref().map(|s| s.draft.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_session.update(|s| {
                            if let Some(s) = s {
                                s.set_draft(value);
                            }
                        });
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        let outcome = session.with_untracked(|s| s.as_ref().map(|s| s.on_key(&ev.key())));
                        if let Some(outcome) = outcome {
                            apply(outcome);
                        }
                    }
                    on:blur=move |_| {
                        let outcome = session.with_untracked(|s| s.as_ref().map(EditSession::on_blur));
                        if let Some(outcome) = outcome {
                            apply(outcome);
                        }
                    }
                />
            </Show>

            {if ctx.confirm_delete {
                view! { <DeleteConfirmButton item_text=text on_confirm=remove /> }.into_any()
            } else {
                view! { <button class="btn btn-danger" on:click=move |_| remove.run(())>"Remove"</button> }.into_any()
            }}
        </div>
    }
}
