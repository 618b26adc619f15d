//! Favorite Toggle Component

use leptos::prelude::*;
use skate_core::favorites::FavoriteParams;

use crate::context::{use_app_context, ToastKind};
use crate::store::{store_is_favorite, store_toggle_favorite, use_app_store};

/// Star button bookmarking a competition, event or skater
#[component]
pub fn FavoriteButton(params: FavoriteParams, #[prop(into)] name: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let is_favorite = {
        let params = params.clone();
        Memo::new(move |_| store_is_favorite(&store, &params))
    };

    let on_click = move |_| match store_toggle_favorite(&store, &params, &name) {
        Ok(true) => ctx.notify(ToastKind::Success, format!("Added {name} to favorites")),
        Ok(false) => ctx.notify(ToastKind::Info, format!("Removed {name} from favorites")),
        Err(e) => {
            tracing::error!("favorite toggle failed: {e}");
            ctx.notify(ToastKind::Error, "Could not save favorites on this device");
        }
    };

    view! {
        <button
            class=move || if is_favorite.get() { "favorite-btn active" } else { "favorite-btn" }
            aria-pressed=move || is_favorite.get().to_string()
            title=move || if is_favorite.get() { "Remove from favorites" } else { "Add to favorites" }
            on:click=on_click
        >
            {move || if is_favorite.get() { "★" } else { "☆" }}
        </button>
    }
}
