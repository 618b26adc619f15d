//! Home Page
//!
//! Competitions grouped by season, newest first, with a name filter.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use skate_core::favorites::FavoriteParams;
use skate_core::format::format_date_range;
use skate_core::models::CompetitionSummary;
use skate_core::names::normalize_name;
use skate_core::routes::Page;

use crate::api;
use crate::components::{ErrorNotice, FavoriteButton, Loadable, Spinner};
use crate::context::use_app_context;

/// Competitions whose normalized name contains every filter token, by year descending
fn group_by_year(competitions: &[CompetitionSummary], filter: &str) -> Vec<(i32, Vec<CompetitionSummary>)> {
    let tokens: Vec<String> = normalize_name(filter).split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect();
    let mut years: BTreeMap<i32, Vec<CompetitionSummary>> = BTreeMap::new();
    for competition in competitions {
        let name = normalize_name(&competition.name);
        if tokens.iter().all(|t| name.contains(t.as_str())) {
            years.entry(competition.year).or_default().push(competition.clone());
        }
    }
    let mut grouped: Vec<_> = years.into_iter().rev().collect();
    for (_, list) in grouped.iter_mut() {
        list.sort_by(|a, b| b.start_date.cmp(&a.start_date).then_with(|| a.name.cmp(&b.name)));
    }
    grouped
}

#[component]
fn CompetitionCard(competition: CompetitionSummary) -> impl IntoView {
    let params = FavoriteParams::Competition { year: competition.year, ijs_id: competition.ijs_id.clone() };
    let href = params.page().path();
    let dates = format_date_range(competition.start_date, competition.end_date);

    view! {
        <li class="competition-card">
            <a href=href>{competition.name.clone()}</a>
            <span class="competition-dates">{dates}</span>
            <span class="competition-location">{competition.location.clone().unwrap_or_default()}</span>
            <FavoriteButton params=params name=competition.name />
        </li>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let (competitions, set_competitions) = signal(Loadable::<Vec<CompetitionSummary>>::Loading);
    let (filter, set_filter) = signal(String::new());

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let result = api::list_competitions(&api).await;
            if let Err(e) = &result {
                ctx.report("Loading competitions", e);
            }
            set_competitions.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page home-page">
            <header class="page-header">
                <h1>"Competitions"</h1>
                <input
                    class="filter-input"
                    type="search"
                    placeholder="Filter by name"
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </header>
            {move || match competitions.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(list) => {
                    let groups = group_by_year(&list, &filter.get());
                    if groups.is_empty() {
                        return view! { <p class="empty">"No competitions match."</p> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(year, comps)| {
                            view! {
                                <section class="season">
                                    <h2>{year}</h2>
                                    <ul class="competition-list">
                                        {comps
                                            .into_iter()
                                            .map(|c| view! { <CompetitionCard competition=c /> })
                                            .collect_view()}
                                    </ul>
                                </section>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
            <p class="hint">
                "Looking for someone? Try the " <a href=Page::Search { query: None }.path()>"search"</a> "."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn comp(year: i32, id: &str, name: &str, start: (i32, u32, u32)) -> CompetitionSummary {
        CompetitionSummary {
            year,
            ijs_id: id.to_string(),
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            end_date: None,
            location: None,
        }
    }

    #[test]
    fn test_group_by_year_newest_first() {
        let list = vec![
            comp(2023, "1", "Eastern Sectionals", (2023, 11, 10)),
            comp(2024, "2", "Skate América", (2024, 10, 18)),
            comp(2024, "3", "Nationals", (2024, 1, 22)),
        ];
        let groups = group_by_year(&list, "");
        assert_eq!(groups.iter().map(|(y, _)| *y).collect::<Vec<_>>(), vec![2024, 2023]);
        assert_eq!(groups[0].1[0].name, "Skate America");
    }

    #[test]
    fn test_filter_ignores_case_and_accents() {
        let list = vec![comp(2024, "1", "Trophée de France", (2024, 11, 1)), comp(2024, "2", "NHK Trophy", (2024, 11, 8))];
        let groups = group_by_year(&list, "TROPHEE");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[0].1[0].ijs_id, "1");
    }
}
