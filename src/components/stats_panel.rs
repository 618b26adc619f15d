//! Skater Stats Panel

use leptos::prelude::*;
use skate_core::format::{format_score, format_signed, ordinal};
use skate_core::models::SkaterHistoryEntry;
use skate_core::routes::Page;
use skate_core::scoring::ScoringSystem;
use skate_core::stats::{personal_best, PersonalBest, SegmentKind, SkaterStats};

fn best_value(best: &PersonalBest) -> String {
    match best.system {
        ScoringSystem::Ijs => format_score(Some(best.value)),
        ScoringSystem::SixOh => format!("{} (majority)", ordinal(best.value as u32)),
    }
}

fn source_link(entry: &SkaterHistoryEntry) -> impl IntoView {
    let page = Page::Competition { year: entry.year, ijs_id: entry.ijs_id.clone() };
    view! { <a href=page.path()>{format!("{} {}", entry.year, entry.competition_name)}</a> }
}

#[component]
pub fn StatsPanel(history: Vec<SkaterHistoryEntry>) -> impl IntoView {
    let stats = SkaterStats::from_history(&history);

    let best_total = personal_best(&history, SegmentKind::Total).map(|best| {
        view! {
            <div class="stat-card">
                <h4>"Best total"</h4>
                <p class="stat-value">{best_value(&best)}</p>
                <p class="stat-source">{source_link(&best.entry)}</p>
            </div>
        }
    });

    let bests = stats
        .personal_bests
        .iter()
        .map(|best| {
            view! {
                <tr>
                    <td>{best.kind.label()}</td>
                    <td>{best.system.label()}</td>
                    <td class="numeric">{best_value(best)}</td>
                    <td>{source_link(&best.entry)}</td>
                </tr>
            }
        })
        .collect_view();

    let top_element = stats.top_element.map(|top| {
        view! {
            <div class="stat-card">
                <h4>"Top element"</h4>
                <p class="stat-value">{top.element.code.clone()} " " {format!("{:.2}", top.element.total)}</p>
                <p class="stat-source">{source_link(&top.entry)}</p>
            </div>
        }
    });

    let mean_goe = stats.highest_mean_goe.map(|best| {
        view! {
            <div class="stat-card">
                <h4>"Highest mean GOE"</h4>
                <p class="stat-value">{format_signed(best.mean_goe)} " over " {best.element_count} " elements"</p>
                <p class="stat-source">{source_link(&best.entry)}</p>
            </div>
        }
    });

    view! {
        <section class="stats-panel">
            <div class="stat-counts">
                <div class="stat-card">
                    <h4>"Competitions"</h4>
                    <p class="stat-value">{stats.competitions}</p>
                </div>
                <div class="stat-card">
                    <h4>"Podiums"</h4>
                    <p class="stat-value">{stats.podiums}</p>
                </div>
                <div class="stat-card">
                    <h4>"Wins"</h4>
                    <p class="stat-value">{stats.wins}</p>
                </div>
                {best_total}
                {top_element}
                {mean_goe}
            </div>
            <Show when={
                let empty = stats.personal_bests.is_empty();
                move || !empty
            }>
                <h3>"Personal bests"</h3>
            </Show>
            <table class="personal-bests">
                <tbody>{bests}</tbody>
            </table>
        </section>
    }
}
