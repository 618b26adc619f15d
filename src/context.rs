//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use skate_core::models::{AuthResponse, User};
use skate_core::session::Session;
use skate_core::AppConfig;

use crate::api::{ApiClient, ApiError};
use crate::storage::BrowserStorage;

const TOAST_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Signed-in session - read
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Option<Session>) -> Self {
        let (session, set_session) = signal(session);
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            config: StoredValue::new(config),
            session,
            set_session,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client carrying the current token
    pub fn api(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        self.config.with_value(|c| ApiClient::new(c.api_base_url.clone(), token))
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn sign_in(&self, auth: AuthResponse) {
        let session = Session::from(auth);
        if let Err(e) = session.save(&BrowserStorage::open()) {
            tracing::warn!("session not persisted: {e}");
        }
        tracing::info!("signed in as {}", session.user.username);
        self.notify(ToastKind::Success, format!("Welcome, {}!", session.user.label()));
        self.set_session.set(Some(session));
    }

    /// Drop the session; no-op when already signed out
    pub fn logout(&self) {
        if self.session.with_untracked(Option::is_none) {
            return;
        }
        Session::clear(&BrowserStorage::open());
        self.set_session.set(None);
        tracing::info!("signed out");
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|t| t.push(Toast { id, kind, message: message.into() }));

        let ctx = *self;
        Timeout::new(TOAST_MS, move || ctx.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    /// Log and surface a failed call. Expired sessions are announced by the
    /// logout listener instead.
    pub fn report(&self, what: &str, error: &ApiError) {
        tracing::error!("{what}: {error}");
        if *error != ApiError::Unauthorized {
            self.notify(ToastKind::Error, format!("{what}: {error}"));
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
