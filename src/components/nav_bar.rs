//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use skate_core::routes::{Page, Section};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let location = use_location();
    let navigate = use_navigate();
    let (query, set_query) = signal(String::new());

    let section = Memo::new(move |_| Page::parse(&location.pathname.get()).section());
    let link_class = move |target: Section| {
        move || if section.get() == target { "nav-link active" } else { "nav-link" }
    };

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if q.trim().is_empty() {
            return;
        }
        navigate(&Page::Search { query: Some(q) }.path(), Default::default());
        set_query.set(String::new());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href="/">"⛸ Skate Results"</a>
            <a class=link_class(Section::Competitions) href=Page::Home.path()>"Competitions"</a>
            <a class=link_class(Section::Favorites) href=Page::Favorites.path()>
                "Favorites"
                <span class="nav-count">{move || store.favorites().read().len()}</span>
            </a>
            <form class="nav-search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Skaters, competitions, clubs..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </form>
            {move || match ctx.user() {
                Some(user) => {
                    view! {
                        <a class=link_class(Section::Tossies) href=Page::Tossies.path()>
                            "Tossies"
                            <Show when=move || { store.unopened_tossies().get() > 0 }>
                                <span class="nav-badge">{move || store.unopened_tossies().get()}</span>
                            </Show>
                        </a>
                        <a class=link_class(Section::Account) href=Page::MyProfile.path()>{user.label().to_string()}</a>
                        <button class="nav-link logout-btn" on:click=move |_| ctx.logout()>"Sign out"</button>
                    }
                        .into_any()
                }
                None => {
                    view! { <a class=link_class(Section::Account) href=Page::Login.path()>"Sign in"</a> }
                        .into_any()
                }
            }}
        </nav>
    }
}
