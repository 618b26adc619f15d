//! Skate Results Frontend App
//!
//! Provides the shared context and store, wires the session lifecycle and
//! mounts the router.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use skate_core::session::Session;
use skate_core::AppConfig;

use crate::api::{self, ApiError, LOGOUT_EVENT};
use crate::components::{InstallBanner, NavBar, ToastHost};
use crate::context::{AppContext, ToastKind};
use crate::pages::{
    unopened, ClubPage, CompetitionPage, EventPage, FavoritesPage, FeedbackPage, HomePage, LoginPage, MyProfilePage,
    NotFoundPage, OfficialPage, RequireLogin, SearchPage, SkaterPage, TossiesPage, UserProfilePage,
};
use crate::pwa::register_service_worker;
use crate::storage::BrowserStorage;
use crate::store::{store_set_unopened, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = Session::load(&BrowserStorage::open());
    let restored = session.is_some();
    let ctx = AppContext::new(config, session);
    let store = Store::new(AppState::load());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Any 401 anywhere lands here
    let logout_listener = window_event_listener_untyped(LOGOUT_EVENT, move |_| {
        if ctx.session.with_untracked(Option::is_some) {
            ctx.logout();
            ctx.notify(ToastKind::Info, "Your session has expired. Please sign in again.");
        }
    });
    on_cleanup(move || logout_listener.remove());

    // A restored token may have been revoked since it was stored
    if restored {
        let api = ctx.api();
        spawn_local(async move {
            match api::current_user(&api).await {
                Ok(user) => tracing::debug!("session valid for {}", user.username),
                Err(ApiError::Unauthorized) => {}
                Err(e) => tracing::warn!("could not verify session: {e}"),
            }
        });
    }

    // Unopened tossie badge follows the session
    Effect::new(move |_| {
        if !ctx.is_signed_in() {
            store_set_unopened(&store, 0);
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api::received_tossies(&api).await {
                Ok(list) => store_set_unopened(&store, unopened(&list)),
                Err(e) => tracing::warn!("could not count tossies: {e}"),
            }
        });
    });

    register_service_worker();

    view! {
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/competitions/:year/:ijs_id") view=CompetitionPage />
                    <Route path=path!("/competitions/:year/:ijs_id/events/:event_id") view=EventPage />
                    <Route path=path!("/skaters/:id") view=SkaterPage />
                    <Route path=path!("/officials/:id") view=OfficialPage />
                    <Route path=path!("/clubs/:id") view=ClubPage />
                    <Route path=path!("/users/:username") view=UserProfilePage />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <RequireLogin><MyProfilePage /></RequireLogin> }
                    />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/favorites") view=FavoritesPage />
                    <Route
                        path=path!("/tossies")
                        view=|| view! { <RequireLogin><TossiesPage /></RequireLogin> }
                    />
                    <Route path=path!("/feedback") view=FeedbackPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </main>
            <InstallBanner />
            <ToastHost />
        </Router>
    }
}
