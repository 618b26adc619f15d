//! Install Banner Component
//!
//! Offers the native PWA install dialog once the visit/dismiss heuristic
//! allows it. The browser's `beforeinstallprompt` event is held back and
//! replayed when the user clicks Install.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skate_core::install_prompt::InstallPromptState;

use crate::pwa::{is_standalone, prompt_install};
use crate::storage::BrowserStorage;

fn update_state(change: impl FnOnce(&mut InstallPromptState)) -> InstallPromptState {
    let storage = BrowserStorage::open();
    let mut state = InstallPromptState::load(&storage);
    change(&mut state);
    if let Err(e) = state.save(&storage) {
        tracing::warn!("install prompt state not saved: {e}");
    }
    state
}

#[component]
pub fn InstallBanner() -> impl IntoView {
    let deferred = StoredValue::new_local(None::<web_sys::Event>);
    let (state, set_state) = signal(update_state(InstallPromptState::record_visit));
    let (prompt_available, set_prompt_available) = signal(false);

    let before_install = window_event_listener_untyped("beforeinstallprompt", move |ev| {
        ev.prevent_default();
        deferred.set_value(Some(ev));
        set_prompt_available.set(true);
        tracing::debug!("install prompt captured");
    });
    let installed = window_event_listener_untyped("appinstalled", move |_| {
        set_state.set(update_state(InstallPromptState::record_installed));
        set_prompt_available.set(false);
        tracing::info!("app installed");
    });
    on_cleanup(move || {
        before_install.remove();
        installed.remove();
    });

    let visible = move || state.with(|s| s.should_show(Utc::now(), is_standalone(), prompt_available.get()));

    let on_install = move |_| {
        let Some(event) = deferred.try_update_value(Option::take).flatten() else {
            return;
        };
        set_prompt_available.set(false);
        spawn_local(async move {
            match prompt_install(&event).await {
                Ok(true) => set_state.set(update_state(InstallPromptState::record_installed)),
                Ok(false) => set_state.set(update_state(|s| s.record_dismiss(Utc::now()))),
                Err(e) => tracing::warn!("install prompt failed: {e:?}"),
            }
        });
    };

    let on_dismiss = move |_| {
        set_state.set(update_state(|s| s.record_dismiss(Utc::now())));
        tracing::info!("install banner dismissed ({} times)", state.with_untracked(|s| s.dismiss_count));
    };

    view! {
        <Show when=visible>
            <div class="install-banner" role="dialog">
                <span>"Install Skate Results for quick access to results and favorites."</span>
                <button class="install-btn" on:click=on_install>"Install"</button>
                <button class="dismiss-btn" on:click=on_dismiss>"Not now"</button>
            </div>
        </Show>
    }
}
