//! Remove Confirmation
//!
//! Remove button that names the item and asks before removing it.

use leptos::prelude::*;

/// Longest item text quoted in the prompt, in characters
const PROMPT_TEXT_MAX: usize = 24;

/// Prompt shown while a removal is pending, e.g. `Remove "buy milk"?`
pub fn confirm_prompt(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= PROMPT_TEXT_MAX {
        format!("Remove \"{}\"?", text)
    } else {
        let short: String = text.chars().take(PROMPT_TEXT_MAX - 1).collect();
        format!("Remove \"{}…\"?", short.trim_end())
    }
}

/// Removes an item only after a second click on "Yes".
/// "No" or Escape backs out without touching the list.
#[component]
pub fn DeleteConfirmButton(
    /// Text of the item being removed, read live so an edit shows up in the prompt
    #[prop(into)]
    item_text: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (pending, set_pending) = signal(false);

    view! {
        <Show
            when=move || pending.get()
            fallback=move || view! {
                <button
                    class="btn btn-danger"
                    title=move || confirm_prompt(&item_text.get())
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_pending.set(true);
                    }
                >
                    "Remove"
                </button>
            }
        >
            <span
                class="remove-confirm"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        set_pending.set(false);
                    }
                }
            >
                <span class="remove-confirm-text">{move || confirm_prompt(&item_text.get())}</span>
                <button
                    class="btn btn-danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_pending.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_pending.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_item() {
        assert_eq!(confirm_prompt("buy milk"), "Remove \"buy milk\"?");
        assert_eq!(confirm_prompt("  padded "), "Remove \"padded\"?");
    }

    #[test]
    fn test_prompt_shortens_long_text() {
        let long = "walk the dog around the whole park twice";
        let prompt = confirm_prompt(long);
        assert!(prompt.starts_with("Remove \"walk the dog"));
        assert!(prompt.ends_with("…\"?"));
        // Quote, ellipsis and question mark around at most PROMPT_TEXT_MAX chars
        assert!(prompt.chars().count() <= "Remove \"\"?".len() + PROMPT_TEXT_MAX);

        // Multi-byte text is cut on character boundaries
        let wide = "ü".repeat(40);
        assert_eq!(confirm_prompt(&wide), format!("Remove \"{}…\"?", "ü".repeat(PROMPT_TEXT_MAX - 1)));
    }
}
