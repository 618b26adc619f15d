//! Event Results Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use skate_core::favorites::FavoriteParams;
use skate_core::models::EventResults;
use skate_core::routes::Page;

use crate::api;
use crate::components::{ErrorNotice, FavoriteButton, Loadable, ResultsTable, Spinner};
use crate::context::use_app_context;

#[component]
pub fn EventPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (results, set_results) = signal(Loadable::<(FavoriteParams, EventResults)>::Loading);

    Effect::new(move |_| {
        let year = params.with(|p| p.get("year")).and_then(|y| y.parse::<i32>().ok());
        let ijs_id = params.with(|p| p.get("ijs_id"));
        let event_id = params.with(|p| p.get("event_id"));
        let (Some(year), Some(ijs_id), Some(event_id)) = (year, ijs_id, event_id) else {
            set_results.set(Loadable::Failed("Unknown event".to_string()));
            return;
        };
        set_results.set(Loadable::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_event_results(&api, year, &ijs_id, &event_id).await;
            if let Err(e) = &result {
                ctx.report("Loading results", e);
            }
            let key = FavoriteParams::Event { year, ijs_id, event_id };
            set_results.set(Loadable::from_result(result.map(|r| (key, r))));
        });
    });

    view! {
        <div class="page event-page">
            {move || match results.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready((key, results)) => {
                    let back = match &key {
                        FavoriteParams::Event { year, ijs_id, .. } => {
                            Page::Competition { year: *year, ijs_id: ijs_id.clone() }.path()
                        }
                        _ => Page::Home.path(),
                    };
                    let title = match &results.competition_name {
                        Some(comp) => format!("{} · {comp}", results.name),
                        None => results.name.clone(),
                    };
                    view! {
                        <a class="back-link" href=back>"← Competition"</a>
                        <header class="page-header">
                            <h1>{results.name.clone()}</h1>
                            <FavoriteButton params=key name=title />
                        </header>
                        <p class="scoring-system">
                            {if results.is_six_o { "6.0 system: lower majority wins" } else { "IJS points" }}
                        </p>
                        <ResultsTable results=results />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
