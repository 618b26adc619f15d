//! Login Page
//!
//! Google Identity Services renders its own button; the credential it hands
//! back is exchanged for an API token.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use skate_core::models::GoogleCredential;
use skate_core::routes::Page;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::api;
use crate::context::use_app_context;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn gis_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn gis_render_button(parent: &web_sys::HtmlElement, options: &JsValue) -> Result<(), JsValue>;
}

fn gis_config(client_id: &str, callback: &Closure<dyn Fn(JsValue)>) -> Result<JsValue, JsValue> {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"client_id".into(), &client_id.into())?;
    js_sys::Reflect::set(&config, &"callback".into(), callback.as_ref())?;
    Ok(config.into())
}

fn button_options() -> Result<JsValue, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"theme".into(), &"outline".into())?;
    js_sys::Reflect::set(&options, &"size".into(), &"large".into())?;
    js_sys::Reflect::set(&options, &"text".into(), &"signin_with".into())?;
    Ok(options.into())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let container = NodeRef::<Div>::new();
    let (error, set_error) = signal(None::<String>);
    let handler = StoredValue::new_local(None::<Closure<dyn Fn(JsValue)>>);

    // already signed in: nothing to do here
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if ctx.is_signed_in() {
                navigate(&Page::MyProfile.path(), Default::default());
            }
        }
    });

    Effect::new(move |_| {
        let Some(parent) = container.get() else {
            return;
        };
        let Some(client_id) = ctx.config().google_client_id else {
            set_error.set(Some("Sign-in is not configured for this site.".to_string()));
            return;
        };

        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            let credential = match serde_wasm_bindgen::from_value::<GoogleCredential>(response) {
                Ok(c) => c.credential,
                Err(e) => {
                    tracing::error!("unexpected Google response: {e}");
                    set_error.set(Some("Google sign-in failed.".to_string()));
                    return;
                }
            };
            let api = ctx.api();
            spawn_local(async move {
                match api::sign_in_with_google(&api, credential).await {
                    Ok(auth) => ctx.sign_in(auth),
                    Err(e) => {
                        ctx.report("Signing in", &e);
                        set_error.set(Some(e.to_string()));
                    }
                }
            });
        });

        let rendered = gis_config(&client_id, &callback)
            .and_then(|config| gis_initialize(&config))
            .and_then(|_| button_options())
            .and_then(|options| gis_render_button(&parent, &options));
        if let Err(e) = rendered {
            tracing::error!("Google Identity Services unavailable: {e:?}");
            set_error.set(Some("Google sign-in could not be loaded. Check your connection or content blockers.".to_string()));
        }
        handler.set_value(Some(callback));
    });

    view! {
        <div class="page login-page">
            <h1>"Sign in"</h1>
            <p>"Sign in to customize your profile and send or open tossies. Favorites work without an account."</p>
            <div class="google-button" node_ref=container></div>
            {move || error.get().map(|message| view! { <p class="error-notice">{message}</p> })}
        </div>
    }
}
