//! Search Page
//!
//! Results for `?q=`, grouped by kind. Hits whose name matches the query
//! regardless of word order and accents are listed first.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use skate_core::format::format_date_range;
use skate_core::models::{SearchHit, SearchResults};
use skate_core::names::compare_names;
use skate_core::routes::Page;

use crate::api;
use crate::components::{ErrorNotice, Loadable, Spinner};
use crate::context::use_app_context;

/// Exact-name hits first, otherwise server order
fn rank_hits(query: &str, mut hits: Vec<SearchHit>) -> Vec<(SearchHit, bool)> {
    hits.sort_by_key(|hit| !compare_names(query, &hit.name));
    hits.into_iter()
        .map(|hit| {
            let exact = compare_names(query, &hit.name);
            (hit, exact)
        })
        .collect()
}

fn hit_list(title: &'static str, query: &str, hits: Vec<SearchHit>, page: fn(u64) -> Page) -> impl IntoView {
    let show = !hits.is_empty();
    let items = rank_hits(query, hits)
        .into_iter()
        .map(|(hit, exact)| {
            view! {
                <li class:exact=exact>
                    <a href=page(hit.id).path()>{hit.name}</a>
                    <span class="hit-detail">{hit.detail.unwrap_or_default()}</span>
                    {exact.then(|| view! { <span class="badge">"Exact match"</span> })}
                </li>
            }
        })
        .collect_view();
    show.then(|| {
        view! {
            <section class="search-group">
                <h2>{title}</h2>
                <ul>{items}</ul>
            </section>
        }
    })
}

#[component]
fn SearchResultsView(query: String, results: SearchResults) -> impl IntoView {
    if results.is_empty() {
        return view! { <p class="empty">{format!("Nothing found for \u{201c}{query}\u{201d}.")}</p> }.into_any();
    }
    let total = results.total();
    let competitions = results
        .competitions
        .into_iter()
        .map(|c| {
            let page = Page::Competition { year: c.year, ijs_id: c.ijs_id };
            view! {
                <li>
                    <a href=page.path()>{c.name}</a>
                    <span class="hit-detail">{format_date_range(c.start_date, c.end_date)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <p class="result-count">{format!("{total} results")}</p>
        {hit_list("Skaters", &query, results.skaters, |id| Page::Skater { id })}
        <section class="search-group">
            <h2>"Competitions"</h2>
            <ul>{competitions}</ul>
        </section>
        {hit_list("Officials", &query, results.officials, |id| Page::Official { id })}
        {hit_list("Clubs", &query, results.clubs, |id| Page::Club { id })}
    }
    .into_any()
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_app_context();
    let query_map = use_query_map();
    let navigate = use_navigate();
    let query = Memo::new(move |_| query_map.with(|q| q.get("q")).unwrap_or_default());
    let (input, set_input) = signal(query.get_untracked());
    let (results, set_results) = signal(None::<Loadable<SearchResults>>);

    Effect::new(move |_| {
        let q = query.get();
        set_input.set(q.clone());
        if q.trim().is_empty() {
            set_results.set(None);
            return;
        }
        set_results.set(Some(Loadable::Loading));
        let api = ctx.api();
        spawn_local(async move {
            let result = api::search(&api, &q).await;
            if let Err(e) = &result {
                ctx.report("Search", e);
            }
            set_results.set(Some(Loadable::from_result(result)));
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        navigate(&Page::Search { query: Some(input.get_untracked()) }.path(), Default::default());
    };

    view! {
        <div class="page search-page">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Search skaters, competitions, officials, clubs"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            {move || match results.get() {
                None => view! { <p class="hint">"Type a name to search."</p> }.into_any(),
                Some(Loadable::Loading) => view! { <Spinner /> }.into_any(),
                Some(Loadable::Failed(message)) => view! { <ErrorNotice message=message /> }.into_any(),
                Some(Loadable::Ready(r)) => view! { <SearchResultsView query=query.get_untracked() results=r /> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u64, name: &str) -> SearchHit {
        SearchHit { id, name: name.to_string(), detail: None }
    }

    #[test]
    fn test_exact_name_matches_first() {
        let ranked = rank_hits("yuzuru hanyu", vec![hit(1, "Yuzuru Hanyu Fan"), hit(2, "HANYU Yuzuru")]);
        assert_eq!(ranked[0].0.id, 2);
        assert!(ranked[0].1);
        assert!(!ranked[1].1);
    }
}
