//! Tossie Opening Modal
//!
//! Plays entrance → reveal → exit for a freshly opened tossie. Each phase
//! schedules the next with a timeout; the pending timeout is dropped (and so
//! cancelled) when the modal unmounts.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use skate_core::tossies::{OpeningPhase, TossieType};

#[component]
pub fn TossieModal(
    tossie: TossieType,
    #[prop(into)] sender: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (phase, set_phase) = signal(OpeningPhase::Entrance);
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let current = phase.get();
        match current.duration_ms() {
            Some(ms) => {
                let pending = Timeout::new(ms, move || set_phase.set(current.next()));
                timer.set_value(Some(pending));
            }
            None => {
                timer.set_value(None);
                on_close.run(());
            }
        }
    });
    on_cleanup(move || {
        timer.try_update_value(Option::take);
    });

    // clicking during the reveal skips straight to the exit
    let skip = move |_| {
        if phase.get_untracked() == OpeningPhase::Reveal {
            set_phase.set(OpeningPhase::Exit);
        }
    };

    let rarity = tossie.rarity();

    view! {
        <div class="modal-backdrop" on:click=skip>
            <div class=move || phase.get().css_class()>
                <Show
                    when=move || phase.get() != OpeningPhase::Entrance
                    fallback=|| view! { <div class="tossie-box">"🎁"</div> }
                >
                    <div class=format!("tossie-reveal {}", rarity.css_class())>
                        <div class="tossie-emoji">{tossie.emoji()}</div>
                        <h2>{tossie.name()}</h2>
                        <p class="tossie-rarity">{rarity.label()} " " {tossie.category().label()}</p>
                        <p class="tossie-sender">"from " {sender.clone()}</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
