//! Feedback Page
//!
//! Free-text report sent with the page it came from and the recent client
//! log lines.

use leptos::prelude::*;
use leptos::task::spawn_local;
use skate_core::models::FeedbackSubmission;

use crate::api;
use crate::context::{use_app_context, ToastKind};

const MAX_MESSAGE_CHARS: usize = 2_000;

fn browser_details() -> (String, String) {
    let Some(window) = web_sys::window() else {
        return (String::new(), String::new());
    };
    let referrer = window.document().map(|d| d.referrer()).unwrap_or_default();
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    (referrer, user_agent)
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let ctx = use_app_context();
    let (message, set_message) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);

    let too_long = move || message.with(|m| m.chars().count() > MAX_MESSAGE_CHARS);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = message.get_untracked();
        if text.trim().is_empty() || too_long() || sending.get_untracked() {
            return;
        }
        let (page, user_agent) = browser_details();
        let feedback = FeedbackSubmission {
            message: text.trim().to_string(),
            email: Some(email.get_untracked().trim().to_string()).filter(|e| !e.is_empty()),
            page,
            user_agent,
            logs: console_logger::recent_lines(),
        };
        set_sending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::submit_feedback(&api, &feedback).await {
                Ok(()) => {
                    tracing::info!("feedback sent ({} log lines)", feedback.logs.len());
                    ctx.notify(ToastKind::Success, "Thanks for the feedback!");
                    set_message.set(String::new());
                    set_sent.set(true);
                }
                Err(e) => ctx.report("Sending feedback", &e),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="page feedback-page">
            <h1>"Feedback"</h1>
            <Show when=move || sent.get()>
                <p class="notice">"Received. We read every report."</p>
            </Show>
            <form class="feedback-form" on:submit=on_submit>
                <label>
                    "What happened?"
                    <textarea
                        rows="8"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <p class="char-count" class:over=too_long>
                    {move || format!("{}/{MAX_MESSAGE_CHARS}", message.with(|m| m.chars().count()))}
                </p>
                <label>
                    "Email (optional, for a reply)"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <p class="hint">"Recent diagnostic logs from this tab are attached."</p>
                <button type="submit" disabled=move || sending.get() || too_long()>
                    {move || if sending.get() { "Sending..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}
