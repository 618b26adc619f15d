//! Progressive Web App Glue
//!
//! Browser side of the install banner: display-mode detection, the deferred
//! `beforeinstallprompt` event and service worker registration.

use js_sys::{Function, Promise, Reflect};
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub const SERVICE_WORKER_PATH: &str = "/sw.js";

/// Running as an installed app (standalone display mode or iOS home screen)
pub fn is_standalone() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let display_mode = window
        .match_media("(display-mode: standalone)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    let ios_standalone = Reflect::get(&window.navigator(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    display_mode || ios_standalone
}

/// Show the native install dialog for a deferred `beforeinstallprompt`
/// event; resolves to whether the user accepted.
pub async fn prompt_install(event: &web_sys::Event) -> Result<bool, JsValue> {
    let prompt: Function = Reflect::get(event, &JsValue::from_str("prompt"))?.dyn_into()?;
    let shown = prompt.call0(event)?;
    if let Ok(promise) = shown.dyn_into::<Promise>() {
        JsFuture::from(promise).await?;
    }

    let choice: Promise = Reflect::get(event, &JsValue::from_str("userChoice"))?.dyn_into()?;
    let choice = JsFuture::from(choice).await?;
    let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))?;
    Ok(outcome.as_string().as_deref() == Some("accepted"))
}

pub fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        tracing::debug!("service workers unsupported");
        return;
    }
    let registration = navigator.service_worker().register(SERVICE_WORKER_PATH);
    spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(_) => tracing::info!("service worker registered"),
            Err(e) => tracing::warn!("service worker registration failed: {e:?}"),
        }
    });
}
