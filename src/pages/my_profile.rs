//! Profile Editor
//!
//! Edits the signed-in user's customization with a live preview. Uploaded
//! images are flagged as recent so the preview shows the original until
//! the server has produced the thumbnail.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skate_core::models::{MapPin, ProfileCustomization, SocialLinks, UserProfile};
use skate_core::profile::{validate_customization, ProfileFieldError, MAX_BIO_CHARS, MAX_MAP_PINS};
use skate_core::uploads::flag_recently_uploaded;
use wasm_bindgen::JsCast;

use super::user_profile::ProfileView;
use crate::api::{self, ImagePurpose};
use crate::components::{DeleteConfirmButton, ErrorNotice, Loadable, Spinner};
use crate::context::{use_app_context, ToastKind};
use crate::storage::BrowserStorage;

fn opt(value: String) -> Option<String> {
    Some(value)
}

/// Text input bound to one optional customization field
#[component]
fn TextField(
    #[prop(into)] label: String,
    draft: RwSignal<ProfileCustomization>,
    get: fn(&ProfileCustomization) -> Option<String>,
    set: fn(&mut ProfileCustomization, Option<String>),
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).unwrap_or_default())
                on:input=move |ev| draft.update(|d| set(d, opt(event_target_value(&ev))))
            />
        </label>
    }
}

#[component]
fn PinEditor(draft: RwSignal<ProfileCustomization>) -> impl IntoView {
    let (label, set_label) = signal(String::new());
    let (latitude, set_latitude) = signal(String::new());
    let (longitude, set_longitude) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (Ok(lat), Ok(lon)) = (latitude.get_untracked().trim().parse::<f64>(), longitude.get_untracked().trim().parse::<f64>())
        else {
            set_error.set(Some("Latitude and longitude must be numbers".to_string()));
            return;
        };
        draft.update(|d| d.map_pins.push(MapPin { label: label.get_untracked(), latitude: lat, longitude: lon }));
        set_label.set(String::new());
        set_latitude.set(String::new());
        set_longitude.set(String::new());
        set_error.set(None);
    };

    view! {
        <fieldset class="pin-editor">
            <legend>{format!("Map pins (up to {MAX_MAP_PINS})")}</legend>
            <ul>
                {move || {
                    draft
                        .with(|d| d.map_pins.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, pin)| {
                            view! {
                                <li>
                                    {format!("{} ({:.4}, {:.4})", pin.label, pin.latitude, pin.longitude)}
                                    <DeleteConfirmButton
                                        button_class="pin-remove-btn"
                                        on_confirm=move |_| draft.update(|d| {
                                            if index < d.map_pins.len() {
                                                d.map_pins.remove(index);
                                            }
                                        })
                                    />
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <form class="pin-add" on:submit=on_add>
                <input type="text" placeholder="Label" prop:value=move || label.get() on:input=move |ev| set_label.set(event_target_value(&ev)) />
                <input type="text" placeholder="Latitude" prop:value=move || latitude.get() on:input=move |ev| set_latitude.set(event_target_value(&ev)) />
                <input type="text" placeholder="Longitude" prop:value=move || longitude.get() on:input=move |ev| set_longitude.set(event_target_value(&ev)) />
                <button type="submit">"Add pin"</button>
            </form>
            {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
        </fieldset>
    }
}

#[component]
fn ProfileEditor(profile: UserProfile) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(profile.customization.clone());
    let (errors, set_errors) = signal(Vec::<ProfileFieldError>::new());
    let (saving, set_saving) = signal(false);
    let (uploading, set_uploading) = signal(false);
    let base = StoredValue::new(profile);

    let upload = move |ev: web_sys::Event, purpose: ImagePurpose| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_uploading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::upload_image(&api, &file, purpose).await {
                Ok(uploaded) => {
                    let ttl = ctx.config().upload_flag_ttl;
                    if let Err(e) = flag_recently_uploaded(&BrowserStorage::open(), &uploaded.url, ttl, Utc::now()) {
                        tracing::warn!("upload flag not stored: {e}");
                    }
                    draft.update(|d| match purpose {
                        ImagePurpose::Avatar => d.avatar_url = Some(uploaded.url.clone()),
                        ImagePurpose::Banner => d.banner_url = Some(uploaded.url.clone()),
                    });
                    ctx.notify(ToastKind::Info, "Image uploaded; save to keep it");
                }
                Err(e) => ctx.report("Uploading image", &e),
            }
            set_uploading.set(false);
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let custom = draft.get_untracked().normalized();
        let problems = validate_customization(&custom);
        if !problems.is_empty() {
            tracing::debug!("profile has {} invalid fields", problems.len());
            set_errors.set(problems);
            return;
        }
        set_errors.set(Vec::new());
        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::update_customization(&api, &custom).await {
                Ok(saved) => {
                    draft.set(saved.customization);
                    ctx.notify(ToastKind::Success, "Profile saved");
                }
                Err(e) => ctx.report("Saving profile", &e),
            }
            set_saving.set(false);
        });
    };

    let preview = move || {
        let mut profile = base.get_value();
        profile.customization = draft.get();
        view! { <ProfileView profile=profile /> }
    };
    let bio_len = move || draft.with(|d| d.bio.as_deref().map_or(0, |b| b.chars().count()));

    view! {
        <div class="profile-editor">
            <form class="profile-form" on:submit=on_save>
                <TextField label="Primary color" placeholder="#1e90ff" draft=draft
                    get=|d| d.primary_color.clone() set=|d, v| d.primary_color = v />
                <TextField label="Accent color" placeholder="#ff69b4" draft=draft
                    get=|d| d.accent_color.clone() set=|d, v| d.accent_color = v />
                <label class="field">
                    <span>"Avatar"</span>
                    <input type="file" accept="image/*" on:change=move |ev| upload(ev, ImagePurpose::Avatar) />
                </label>
                <label class="field">
                    <span>"Banner"</span>
                    <input type="file" accept="image/*" on:change=move |ev| upload(ev, ImagePurpose::Banner) />
                </label>
                <Show when=move || uploading.get()>
                    <p class="hint">"Uploading..."</p>
                </Show>
                <label class="field">
                    <span>"Bio (Markdown)"</span>
                    <textarea
                        rows="6"
                        prop:value=move || draft.with(|d| d.bio.clone().unwrap_or_default())
                        on:input=move |ev| draft.update(|d| d.bio = opt(event_target_value(&ev)))
                    ></textarea>
                    <span class="char-count" class:over=move || { bio_len() > MAX_BIO_CHARS }>
                        {move || format!("{}/{MAX_BIO_CHARS}", bio_len())}
                    </span>
                </label>
                <fieldset class="social-links">
                    <legend>"Social links"</legend>
                    <TextField label="Instagram" placeholder="@handle" draft=draft
                        get=|d| d.social_links.instagram.clone() set=|d, v| d.social_links.instagram = v />
                    <TextField label="X" placeholder="@handle" draft=draft
                        get=|d| d.social_links.twitter.clone() set=|d, v| d.social_links.twitter = v />
                    <TextField label="TikTok" placeholder="@handle" draft=draft
                        get=|d| d.social_links.tiktok.clone() set=|d, v| d.social_links.tiktok = v />
                    <TextField label="YouTube" placeholder="@handle" draft=draft
                        get=|d| d.social_links.youtube.clone() set=|d, v| d.social_links.youtube = v />
                    <TextField label="Website" placeholder="https://" draft=draft
                        get=|d| d.social_links.website.clone() set=|d, v| d.social_links.website = v />
                    <button type="button" class="link-btn" on:click=move |_| draft.update(|d| d.social_links = SocialLinks::default())>
                        "Clear links"
                    </button>
                </fieldset>
                <ul class="field-errors">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e.to_string()}</li> }).collect_view()}
                </ul>
                <button type="submit" disabled=move || saving.get() || uploading.get()>
                    {move || if saving.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
            <PinEditor draft=draft />
            <section class="profile-preview">
                <h2>"Preview"</h2>
                {preview}
            </section>
        </div>
    }
}

#[component]
pub fn MyProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let (profile, set_profile) = signal(Loadable::<UserProfile>::Loading);

    Effect::new(move |_| {
        if !ctx.is_signed_in() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = api::get_my_profile(&api).await;
            if let Err(e) = &result {
                ctx.report("Loading your profile", e);
            }
            set_profile.set(Loadable::from_result(result));
        });
    });

    view! {
        <div class="page my-profile-page">
            <h1>"Your profile"</h1>
            {move || match profile.get() {
                Loadable::Loading => view! { <Spinner /> }.into_any(),
                Loadable::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
                Loadable::Ready(p) => {
                    let public = skate_core::routes::Page::UserProfile { username: p.user.username.clone() };
                    view! {
                        <p><a href=public.path()>"View public profile"</a></p>
                        <ProfileEditor profile=p />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
