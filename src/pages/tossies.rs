//! Tossies Page
//!
//! Received tossies. Opening one rolls its type here, stores it through the
//! API and then plays the reveal animation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use skate_core::models::TossieReceipt;
use skate_core::tossies::{roll_tossie_type, TossieType};

use crate::api;
use crate::components::{ErrorNotice, Loadable, Spinner, TossieModal};
use crate::context::use_app_context;
use crate::store::{store_set_unopened, use_app_store};

/// Unopened first, then newest
fn sorted_receipts(mut receipts: Vec<TossieReceipt>) -> Vec<TossieReceipt> {
    receipts.sort_by(|a, b| a.is_opened().cmp(&b.is_opened()).then_with(|| b.created_at.cmp(&a.created_at)));
    receipts
}

pub(crate) fn unopened(receipts: &[TossieReceipt]) -> usize {
    receipts.iter().filter(|r| !r.is_opened()).count()
}

#[component]
fn ReceiptCard(receipt: TossieReceipt, #[prop(into)] on_open: Callback<u64>, opening: Signal<bool>) -> impl IntoView {
    let id = receipt.id;
    let sender = receipt.sender_label().to_string();
    let received = receipt.created_at.map(|at| at.format("%b %-d, %Y").to_string()).unwrap_or_default();
    let message = receipt.message.clone().map(|m| view! { <p class="tossie-message">{m}</p> });

    let body = match receipt.tossie_kind() {
        Some(kind) => view! {
            <div class=format!("tossie-card opened {}", kind.rarity().css_class())>
                <span class="tossie-emoji">{kind.emoji()}</span>
                <span class="tossie-name">{kind.name()}</span>
                <span class="tossie-rarity">{kind.rarity().label()}</span>
            </div>
        }
        .into_any(),
        None if receipt.is_opened() => view! { <div class="tossie-card opened">"🎁 A mystery tossie"</div> }.into_any(),
        None => view! {
            <div class="tossie-card unopened">
                <span class="tossie-emoji">"🎁"</span>
                <button class="open-btn" disabled=move || opening.get() on:click=move |_| on_open.run(id)>
                    "Open"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <li class="receipt">
            {body}
            <p class="tossie-from">"From " {sender} <span class="tossie-date">{received}</span></p>
            {message}
        </li>
    }
}

#[component]
pub fn TossiesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (receipts, set_receipts) = signal(Loadable::<Vec<TossieReceipt>>::Loading);
    let (opening, set_opening) = signal(false);
    let (revealing, set_revealing) = signal(None::<(TossieType, String)>);

    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let result = api::received_tossies(&api).await.map(sorted_receipts);
            match &result {
                Ok(list) => store_set_unopened(&store, unopened(list)),
                Err(e) => ctx.report("Loading tossies", e),
            }
            set_receipts.set(Loadable::from_result(result));
        });
    });

    let on_open = move |id: u64| {
        if opening.get_untracked() {
            return;
        }
        set_opening.set(true);
        let tossie = roll_tossie_type();
        tracing::info!("opening tossie {id} as {}", tossie.slug());
        let api = ctx.api();
        spawn_local(async move {
            match api::open_tossie(&api, id, tossie).await {
                Ok(opened) => {
                    let sender = opened.sender_label().to_string();
                    // the server may already hold a type from another device
                    let shown = opened.tossie_kind().unwrap_or(tossie);
                    set_receipts.update(|state| {
                        if let Loadable::Ready(list) = state {
                            if let Some(slot) = list.iter_mut().find(|r| r.id == id) {
                                *slot = opened;
                            }
                            store_set_unopened(&store, unopened(list));
                        }
                    });
                    set_revealing.set(Some((shown, sender)));
                }
                Err(e) => ctx.report("Opening tossie", &e),
            }
            set_opening.set(false);
        });
    };

    view! {
        <div class="page tossies-page">
            <h1>"Tossies"</h1>
            {move || match receipts.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(list) if list.is_empty() => {
                    view! { <p class="empty">"No tossies yet. Share your profile so fans can send some!"</p> }.into_any()
                }
                Loadable::Ready(list) => view! {
                    <ul class="receipts">
                        {list
                            .into_iter()
                            .map(|receipt| view! { <ReceiptCard receipt=receipt on_open=on_open opening=opening.into() /> })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
            {move || revealing.get().map(|(tossie, sender)| {
                view! { <TossieModal tossie=tossie sender=sender on_close=move |_| set_revealing.set(None) /> }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(id: u64, tossie_type: Option<&str>, day: u32) -> TossieReceipt {
        let json = serde_json::json!({
            "id": id,
            "tossieType": tossie_type,
            "createdAt": format!("2024-03-{day:02}T12:00:00Z"),
        });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_unopened_sort_first() {
        let sorted = sorted_receipts(vec![receipt(1, Some("rose"), 1), receipt(2, None, 2), receipt(3, None, 5)]);
        assert_eq!(sorted.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(unopened(&sorted), 2);
    }
}
