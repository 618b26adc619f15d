//! Loading and error placeholders shared by the pages

use leptos::prelude::*;

/// Remote data in flight, loaded, or failed
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(e.to_string()),
        }
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" aria-label="Loading"></div> }
}

#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            <p>{message}</p>
        </div>
    }
}
