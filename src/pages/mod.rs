//! Routed Pages
//!
//! One component per route; see `app.rs` for the route table.

mod competition;
mod event;
mod favorites;
mod feedback;
mod home;
mod login;
mod my_profile;
mod not_found;
mod people;
mod search;
mod skater;
mod tossies;
mod user_profile;

use leptos::prelude::*;
use skate_core::routes::Page;

use crate::context::use_app_context;

pub use competition::CompetitionPage;
pub use event::EventPage;
pub use favorites::FavoritesPage;
pub use feedback::FeedbackPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_profile::MyProfilePage;
pub use not_found::NotFoundPage;
pub use people::{ClubPage, OfficialPage};
pub use search::SearchPage;
pub use skater::SkaterPage;
pub use tossies::TossiesPage;
pub use user_profile::UserProfilePage;

pub(crate) use tossies::unopened;

/// Renders children only for signed-in users
#[component]
pub fn RequireLogin(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <Show
            when=move || ctx.is_signed_in()
            fallback=|| view! {
                <div class="page login-required">
                    <p>"You need to sign in to see this page."</p>
                    <a class="btn" href=Page::Login.path()>"Sign in"</a>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
