//! Add-to-calendar links

use chrono::Utc;
use leptos::prelude::*;
use skate_core::calendar::{google_calendar_url, ics_data_url, outlook_calendar_url, CalendarEvent};

#[component]
pub fn CalendarLinks(event: CalendarEvent, #[prop(into)] uid: String) -> impl IntoView {
    let google = google_calendar_url(&event);
    let outlook = outlook_calendar_url(&event);
    let ics = ics_data_url(&event, &uid, Utc::now());
    let file_name = format!("{}.ics", uid.replace(['/', ' ', '@'], "-"));

    view! {
        <div class="calendar-links">
            <span class="calendar-label">"Add to calendar:"</span>
            <a href=google target="_blank" rel="noopener">"Google"</a>
            <a href=outlook target="_blank" rel="noopener">"Outlook"</a>
            <a href=ics download=file_name rel="external">"iCal (.ics)"</a>
        </div>
    }
}
