//! Public User Profile
//!
//! Renders a user's customization (colors, images, bio, links, pins) and
//! lets signed-in visitors send them a tossie.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use skate_core::models::{ProfileCustomization, SendTossieRequest, UserProfile};
use skate_core::profile::is_hex_color;
use skate_core::routes::Page;
use skate_core::uploads::get_thumbnail_url;

use crate::api;
use crate::components::{ErrorNotice, Loadable, Spinner};
use crate::context::{use_app_context, ToastKind};
use crate::markdown::render_bio;
use crate::storage::BrowserStorage;

const MAX_TOSSIE_MESSAGE_CHARS: usize = 140;

/// Inline CSS custom properties for the profile colors; invalid values are skipped
pub(crate) fn theme_style(custom: &ProfileCustomization) -> String {
    [("--profile-primary", &custom.primary_color), ("--profile-accent", &custom.accent_color)]
        .into_iter()
        .filter_map(|(var, color)| color.as_deref().filter(|c| is_hex_color(c)).map(|c| format!("{var}: {c};")))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared by the public page and the editor preview
#[component]
pub fn ProfileView(profile: UserProfile) -> impl IntoView {
    let custom = profile.customization;
    let storage = BrowserStorage::open();
    let now = Utc::now();
    let image = |url: &Option<String>| url.as_deref().map(|u| get_thumbnail_url(&storage, u, now));

    let banner = image(&custom.banner_url).map(|src| view! { <img class="profile-banner" src=src alt="" /> });
    let avatar = image(&custom.avatar_url).map(|src| view! { <img class="profile-avatar" src=src alt="" /> });
    let bio = custom.bio.as_deref().map(|bio| view! { <div class="profile-bio" inner_html=render_bio(bio)></div> });
    let links = custom
        .social_links
        .hrefs()
        .into_iter()
        .map(|(label, href)| view! { <li><a href=href target="_blank" rel="noopener noreferrer">{label}</a></li> })
        .collect_view();
    let pins = custom
        .map_pins
        .iter()
        .map(|pin| view! { <li><a href=pin.osm_url() target="_blank" rel="noopener">"📍 " {pin.label.clone()}</a></li> })
        .collect_view();
    let favorite_skater = profile
        .favorite_skater_id
        .map(|id| view! { <p><a href=Page::Skater { id }.path()>"Favorite skater"</a></p> });

    view! {
        <article class="profile" style=theme_style(&custom)>
            {banner}
            <header class="profile-header">
                {avatar}
                <h1>{profile.user.label().to_string()}</h1>
                <span class="profile-username">"@" {profile.user.username.clone()}</span>
            </header>
            {bio}
            {favorite_skater}
            <ul class="profile-links">{links}</ul>
            <ul class="profile-pins">{pins}</ul>
            <p class="profile-tossies">{format!("🎁 {} tossies received", profile.tossies_received)}</p>
        </article>
    }
}

#[component]
fn SendTossieForm(username: String) -> impl IntoView {
    let ctx = use_app_context();
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let text = message.get_untracked().trim().to_string();
        if text.chars().count() > MAX_TOSSIE_MESSAGE_CHARS {
            ctx.notify(ToastKind::Error, format!("Keep the note under {MAX_TOSSIE_MESSAGE_CHARS} characters"));
            return;
        }
        let request = SendTossieRequest {
            recipient_username: username.clone(),
            message: Some(text).filter(|t| !t.is_empty()),
        };
        set_sending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::send_tossie(&api, &request).await {
                Ok(()) => {
                    ctx.notify(ToastKind::Success, format!("Tossie sent to {}!", request.recipient_username));
                    set_message.set(String::new());
                }
                Err(e) => ctx.report("Sending tossie", &e),
            }
            set_sending.set(false);
        });
    };

    view! {
        <form class="send-tossie" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a note (optional)"
                maxlength=MAX_TOSSIE_MESSAGE_CHARS.to_string()
                prop:value=move || message.get()
                on:input=move |ev| set_message.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || sending.get()>"🎁 Toss a gift"</button>
        </form>
    }
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (profile, set_profile) = signal(Loadable::<UserProfile>::Loading);

    Effect::new(move |_| {
        let Some(username) = params.with(|p| p.get("username")) else {
            set_profile.set(Loadable::Failed("Unknown user".to_string()));
            return;
        };
        set_profile.set(Loadable::Loading);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_user_profile(&api, &username).await;
            if let Err(e) = &result {
                ctx.report("Loading profile", e);
            }
            set_profile.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page user-profile-page">
            {move || match profile.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(p) => {
                    let username = p.user.username.clone();
                    let can_send = ctx.user().is_some_and(|me| me.username != username);
                    view! {
                        <ProfileView profile=p />
                        {can_send.then(|| view! { <SendTossieForm username=username /> })}
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_style_skips_invalid_colors() {
        let custom = ProfileCustomization {
            primary_color: Some("#1e90ff".into()),
            accent_color: Some("red; background: url(x)".into()),
            ..Default::default()
        };
        assert_eq!(theme_style(&custom), "--profile-primary: #1e90ff;");
    }
}
