//! Event Results Table

use leptos::prelude::*;
use skate_core::format::format_score;
use skate_core::models::EventResults;
use skate_core::routes::Page;

#[component]
pub fn ResultsTable(results: EventResults) -> impl IntoView {
    let is_six_o = results.is_six_o;

    let rows = results
        .results
        .into_iter()
        .map(|row| {
            let place = if row.withdrawn {
                "WD".to_string()
            } else {
                row.placement.map(|p| p.to_string()).unwrap_or_default()
            };
            let skater = match row.skater_id {
                Some(id) => view! { <a href=Page::Skater { id }.path()>{row.skater_name}</a> }.into_any(),
                None => view! { <span>{row.skater_name}</span> }.into_any(),
            };
            let club = match (row.club_id, row.club) {
                (Some(id), Some(name)) => view! { <a href=Page::Club { id }.path()>{name}</a> }.into_any(),
                (_, name) => view! { <span>{name.unwrap_or_default()}</span> }.into_any(),
            };
            let result = if is_six_o {
                row.majority.unwrap_or_else(|| "–".to_string())
            } else {
                format_score(row.score)
            };
            view! {
                <tr class:withdrawn=row.withdrawn>
                    <td class="place">{place}</td>
                    <td>{skater}</td>
                    <td>{club}</td>
                    <td class="numeric">{result}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="results-table">
            <thead>
                <tr>
                    <th>"Place"</th>
                    <th>"Skater"</th>
                    <th>"Club"</th>
                    <th>{if is_six_o { "Majority" } else { "Score" }}</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
