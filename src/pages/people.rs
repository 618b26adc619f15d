//! Official and Club Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use skate_core::models::{Club, Official};
use skate_core::routes::Page;

use crate::api;
use crate::components::{ErrorNotice, Loadable, Spinner};
use crate::context::use_app_context;

#[component]
fn OfficialView(official: Official) -> impl IntoView {
    let assignments = official
        .assignments
        .into_iter()
        .map(|a| {
            let target = match a.event_id {
                Some(event_id) => Page::Event { year: a.year, ijs_id: a.ijs_id, event_id },
                None => Page::Competition { year: a.year, ijs_id: a.ijs_id },
            };
            let label = match a.event_name {
                Some(event) => format!("{} · {event}", a.competition_name),
                None => a.competition_name,
            };
            view! {
                <tr>
                    <td>{a.year}</td>
                    <td><a href=target.path()>{label}</a></td>
                    <td>{a.role}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <header class="page-header">
            <h1>{official.name}</h1>
        </header>
        <p class="official-meta">{official.location.unwrap_or_default()}</p>
        <table class="assignments-table">
            <thead>
                <tr>
                    <th>"Year"</th>
                    <th>"Assignment"</th>
                    <th>"Role"</th>
                </tr>
            </thead>
            <tbody>{assignments}</tbody>
        </table>
    }
}

#[component]
fn ClubView(club: Club) -> impl IntoView {
    let mut skaters = club.skaters;
    skaters.sort_by(|a, b| a.name.cmp(&b.name));
    let rows = skaters
        .into_iter()
        .map(|s| {
            view! {
                <li>
                    <a href=Page::Skater { id: s.id }.path()>{s.name}</a>
                    <span class="result-count">{format!("{} results", s.result_count)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="page-header">
            <h1>{club.name}</h1>
        </header>
        <p class="club-meta">{club.location.unwrap_or_default()}</p>
        <ul class="club-skaters">{rows}</ul>
    }
}

fn id_param(params: Memo<leptos_router::params::ParamsMap>) -> Option<u64> {
    params.with(|p| p.get("id")).and_then(|id| id.parse().ok())
}

#[component]
pub fn OfficialPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (official, set_official) = signal(Loadable::<Official>::Loading);

    Effect::new(move |_| {
        let Some(id) = id_param(params) else {
            set_official.set(Loadable::Failed("Unknown official".to_string()));
            return;
        };
        set_official.set(Loadable::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_official(&api, id).await;
            if let Err(e) = &result {
                ctx.report("Loading official", e);
            }
            set_official.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page official-page">
            {move || match official.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(o) => view! { <OfficialView official=o /> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn ClubPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (club, set_club) = signal(Loadable::<Club>::Loading);

    Effect::new(move |_| {
        let Some(id) = id_param(params) else {
            set_club.set(Loadable::Failed("Unknown club".to_string()));
            return;
        };
        set_club.set(Loadable::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_club(&api, id).await;
            if let Err(e) = &result {
                ctx.report("Loading club", e);
            }
            set_club.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page club-page">
            {move || match club.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(c) => view! { <ClubView club=c /> }.into_any(),
            }}
        </div>
    }
}
