use leptos::prelude::*;
use skate_core::routes::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"Page not found"</h1>
            <p>"That link doesn't lead anywhere. " <a href=Page::Home.path()>"Back to competitions"</a></p>
        </div>
    }
}
