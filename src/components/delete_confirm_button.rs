//! Remove Confirm Button Component
//!
//! Inline two-step removal: a × button that turns into a prompt with ✓/✗.

use leptos::prelude::*;

/// Inline removal confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button
/// * `prompt` - Question shown while confirming, e.g. "Remove?"
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Remove?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                view! {
                    <button
                        class=button_class.clone()
                        title="Remove"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ev.prevent_default();
                            set_confirming.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ev.prevent_default();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ev.prevent_default();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
