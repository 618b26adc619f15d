//! Competition Page

use chrono::Duration;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use skate_core::calendar::CalendarEvent;
use skate_core::favorites::FavoriteParams;
use skate_core::format::format_date_range;
use skate_core::models::{Competition, EventSummary};
use skate_core::routes::Page;

use crate::api;
use crate::components::{CalendarLinks, ErrorNotice, FavoriteButton, Loadable, Spinner};
use crate::context::use_app_context;

/// Scheduled length used for segment calendar entries
const SEGMENT_LENGTH_MINUTES: i64 = 90;

pub(crate) fn page_url(page: &Page) -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{origin}{}", page.path()))
}

#[component]
fn EventRow(competition: Competition, event: EventSummary) -> impl IntoView {
    let page = Page::Event {
        year: competition.year,
        ijs_id: competition.ijs_id.clone(),
        event_id: event.event_id.clone(),
    };
    let segments = event
        .segments
        .iter()
        .map(|segment| {
            let when = segment
                .start_time
                .map(|at| at.format("%a %b %-d, %H:%M").to_string())
                .unwrap_or_else(|| "Time TBA".to_string());
            let calendar = CalendarEvent::for_segment(
                &competition,
                &event,
                segment,
                Duration::minutes(SEGMENT_LENGTH_MINUTES),
            )
            .map(|cal| {
                let uid = format!("{}-{}-{}-{}@skate-results", competition.year, competition.ijs_id, event.event_id, segment.name);
                view! { <CalendarLinks event=cal uid=uid /> }
            });
            view! {
                <li class="segment">
                    <span class="segment-name">{segment.name.clone()}</span>
                    <span class="segment-time">{when}</span>
                    {calendar}
                </li>
            }
        })
        .collect_view();

    view! {
        <li class="event-row">
            <a href=page.path()>{event.name.clone()}</a>
            <span class="event-level">{event.level.clone().unwrap_or_default()}</span>
            <ul class="segments">{segments}</ul>
        </li>
    }
}

#[component]
fn CompetitionView(competition: Competition) -> impl IntoView {
    let params = FavoriteParams::Competition { year: competition.year, ijs_id: competition.ijs_id.clone() };
    let calendar = CalendarEvent::for_competition(&competition, page_url(&params.page()).as_deref()).map(|cal| {
        let uid = format!("{}-{}@skate-results", competition.year, competition.ijs_id);
        view! { <CalendarLinks event=cal uid=uid /> }
    });
    let dates = format_date_range(competition.start_date, competition.end_date);
    let place = [competition.venue.clone(), competition.location.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    let results_link = competition
        .results_url
        .clone()
        .map(|url| view! { <a class="external" href=url target="_blank" rel="noopener">"Official results"</a> });
    let events = competition
        .events
        .iter()
        .map(|event| view! { <EventRow competition=competition.clone() event=event.clone() /> })
        .collect_view();

    view! {
        <header class="page-header">
            <h1>{competition.name.clone()}</h1>
            <FavoriteButton params=params name=competition.name.clone() />
        </header>
        <p class="competition-meta">{dates} " · " {place}</p>
        {results_link}
        {calendar}
        <h2>"Events"</h2>
        <ul class="event-list">{events}</ul>
    }
}

#[component]
pub fn CompetitionPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (competition, set_competition) = signal(Loadable::<Competition>::Loading);

    Effect::new(move |_| {
        let year = params.with(|p| p.get("year")).and_then(|y| y.parse::<i32>().ok());
        let ijs_id = params.with(|p| p.get("ijs_id"));
        let (Some(year), Some(ijs_id)) = (year, ijs_id) else {
            set_competition.set(Loadable::Failed("Unknown competition".to_string()));
            return;
        };
        set_competition.set(Loadable::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_competition(&api, year, &ijs_id).await;
            if let Err(e) = &result {
                ctx.report("Loading competition", e);
            }
            set_competition.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page competition-page">
            {move || match competition.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(c) => view! { <CompetitionView competition=c /> }.into_any(),
            }}
        </div>
    }
}
