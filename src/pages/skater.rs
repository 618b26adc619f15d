//! Skater Page
//!
//! Profile header, derived stats and the full competition history. Rows
//! with judges' details expand into the element breakdown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use skate_core::favorites::FavoriteParams;
use skate_core::format::{format_result, ordinal};
use skate_core::models::{SkaterHistoryEntry, SkaterProfile};
use skate_core::routes::Page;

use crate::api;
use crate::components::{ElementBreakdown, ErrorNotice, FavoriteButton, Loadable, Spinner, StatsPanel};
use crate::context::use_app_context;

/// Newest first; rows of one competition keep their server order
fn sorted_history(mut history: Vec<SkaterHistoryEntry>) -> Vec<SkaterHistoryEntry> {
    history.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| b.date.cmp(&a.date)));
    history
}

#[component]
fn HistoryRow(entry: SkaterHistoryEntry) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let competition = Page::Competition { year: entry.year, ijs_id: entry.ijs_id.clone() };
    let event_link = entry.event_id.clone().map(|event_id| Page::Event {
        year: entry.year,
        ijs_id: entry.ijs_id.clone(),
        event_id,
    });
    let result = format_result(&entry);
    let place = entry.placement.map(ordinal).unwrap_or_default();
    let segment = entry.segment.clone().unwrap_or_else(|| "Final".to_string());
    let details = entry.judge_details.clone();
    let has_details = details.is_some();

    view! {
        <tr class="history-row">
            <td>{entry.year}</td>
            <td><a href=competition.path()>{entry.competition_name.clone()}</a></td>
            <td>
                {match event_link {
                    Some(page) => view! { <a href=page.path()>{entry.event_name.clone()}</a> }.into_any(),
                    None => view! { <span>{entry.event_name.clone()}</span> }.into_any(),
                }}
            </td>
            <td>{segment}</td>
            <td class="place">{place}</td>
            <td class="numeric">{result}</td>
            <td>
                <Show when=move || has_details>
                    <button class="expand-btn" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                        {move || if expanded.get() { "▼" } else { "▶" }}
                    </button>
                </Show>
            </td>
        </tr>
        {move || {
            let details = details.clone().filter(|_| expanded.get())?;
            Some(view! {
                <tr class="details-row">
                    <td colspan="7"><ElementBreakdown details=details /></td>
                </tr>
            })
        }}
    }
}

#[component]
fn SkaterView(skater: SkaterProfile) -> impl IntoView {
    let params = FavoriteParams::Skater { skater_id: skater.id };
    let club = match (skater.club_id, skater.club.clone()) {
        (Some(id), Some(name)) => Some(view! { <a href=Page::Club { id }.path()>{name}</a> }.into_any()),
        (None, Some(name)) => Some(view! { <span>{name}</span> }.into_any()),
        _ => None,
    };
    let history = sorted_history(skater.history.clone());
    let rows = history.clone().into_iter().map(|entry| view! { <HistoryRow entry=entry /> }).collect_view();

    view! {
        <header class="page-header">
            <h1>{skater.name.clone()}</h1>
            <FavoriteButton params=params name=skater.name.clone() />
        </header>
        <p class="skater-meta">
            {club}
            " "
            {skater.country.clone().unwrap_or_default()}
        </p>
        <StatsPanel history=history />
        <h2>"History"</h2>
        <table class="history-table">
            <thead>
                <tr>
                    <th>"Year"</th>
                    <th>"Competition"</th>
                    <th>"Event"</th>
                    <th>"Segment"</th>
                    <th>"Place"</th>
                    <th>"Result"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
pub fn SkaterPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (skater, set_skater) = signal(Loadable::<SkaterProfile>::Loading);

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")).and_then(|id| id.parse::<u64>().ok()) else {
            set_skater.set(Loadable::Failed("Unknown skater".to_string()));
            return;
        };
        set_skater.set(Loadable::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_skater(&api, id).await;
            if let Err(e) = &result {
                ctx.report("Loading skater", e);
            }
            set_skater.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page skater-page">
            {move || match skater.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(s) => view! { <SkaterView skater=s /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_newest_first() {
        let entry = |year, ijs_id: &str| SkaterHistoryEntry { year, ijs_id: ijs_id.to_string(), ..Default::default() };
        let sorted = sorted_history(vec![entry(2019, "a"), entry(2024, "b"), entry(2021, "c")]);
        assert_eq!(sorted.iter().map(|e| e.ijs_id.as_str()).collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }
}
