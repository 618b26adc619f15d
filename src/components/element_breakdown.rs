//! Judges' Detail Breakdown
//!
//! Elements with base value, panel GOE and each judge's mark, followed by
//! program components and deductions.

use leptos::prelude::*;
use skate_core::format::{format_score, format_signed};
use skate_core::models::JudgeDetails;

#[component]
pub fn ElementBreakdown(details: JudgeDetails) -> impl IntoView {
    let total_deductions = details.total_deductions();
    let tes = details.total_element_score;
    let pcs = details.total_component_score;

    let elements = details
        .elements
        .into_iter()
        .enumerate()
        .map(|(i, element)| {
            let marks = element.judge_marks.iter().map(|m| format!("{m:+}")).collect::<Vec<_>>().join(" ");
            view! {
                <tr>
                    <td>{i + 1}</td>
                    <td class="element-code">{element.code}</td>
                    <td class="element-info">{element.info.unwrap_or_default()}</td>
                    <td class="numeric">{format!("{:.2}", element.base_value)}</td>
                    <td class="numeric" class:positive={element.goe > 0.0} class:negative={element.goe < 0.0}>
                        {format_signed(element.goe)}
                    </td>
                    <td class="judge-marks">{marks}</td>
                    <td class="numeric">{format!("{:.2}", element.total)}</td>
                </tr>
            }
        })
        .collect_view();

    let components = details
        .components
        .into_iter()
        .map(|component| {
            let marks = component.judge_marks.iter().map(|m| format!("{m:.2}")).collect::<Vec<_>>().join(" ");
            view! {
                <tr>
                    <td>{component.name}</td>
                    <td class="numeric">{format!("{:.2}", component.factor)}</td>
                    <td class="judge-marks">{marks}</td>
                    <td class="numeric">{format!("{:.2}", component.score)}</td>
                </tr>
            }
        })
        .collect_view();

    let deductions = details
        .deductions
        .into_iter()
        .map(|d| view! { <li>{d.name} ": " {format_signed(-d.points.abs())}</li> })
        .collect_view();

    view! {
        <div class="element-breakdown">
            <table class="elements-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Element"</th>
                        <th>"Info"</th>
                        <th>"Base"</th>
                        <th>"GOE"</th>
                        <th>"Judges"</th>
                        <th>"Score"</th>
                    </tr>
                </thead>
                <tbody>{elements}</tbody>
            </table>
            <p class="subtotal">"Total element score: " {format_score(tes)}</p>

            <table class="components-table">
                <thead>
                    <tr>
                        <th>"Component"</th>
                        <th>"Factor"</th>
                        <th>"Judges"</th>
                        <th>"Score"</th>
                    </tr>
                </thead>
                <tbody>{components}</tbody>
            </table>
            <p class="subtotal">"Total component score: " {format_score(pcs)}</p>

            <Show when=move || { total_deductions > 0.0 }>
                <p class="subtotal">"Deductions: " {format_signed(-total_deductions)}</p>
            </Show>
            <ul class="deductions">{deductions}</ul>
        </div>
    }
}
