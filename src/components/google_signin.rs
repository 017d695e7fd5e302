//! Google Sign-In Button
//!
//! Binds the Google Identity Services widget and hands the raw credential
//! token to the owner. What happens with the credential is the owner's
//! decision.

use js_sys::{Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize)]
    fn google_id_initialize(config: &JsValue);

    #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton)]
    fn google_id_render_button(parent: &web_sys::Element, options: &JsValue);
}

const BUTTON_HOST_ID: &str = "google-signin-button";

fn gis_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("google"))
        .map(|value| !value.is_undefined())
        .unwrap_or(false)
}

#[component]
pub fn GoogleSignIn(
    #[prop(into)] on_credential: Callback<String>,
    #[prop(into)] on_error: Callback<()>,
) -> impl IntoView {
    let (available, set_available) = signal(true);

    Effect::new(move |_| {
        if !gis_available() {
            web_sys::console::warn_1(&"[GoogleSignIn] GIS script not loaded".into());
            set_available.set(false);
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(host) = document.get_element_by_id(BUTTON_HOST_ID) else {
            return;
        };

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|value| value.as_string());
            match credential {
                Some(token) => on_credential.run(token),
                None => on_error.run(()),
            }
        });

        let init = Object::new();
        let _ = Reflect::set(
            &init,
            &JsValue::from_str("client_id"),
            &JsValue::from_str(config::GOOGLE_CLIENT_ID),
        );
        let _ = Reflect::set(&init, &JsValue::from_str("callback"), callback.as_ref());
        google_id_initialize(&init);

        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("theme"),
            &JsValue::from_str("outline"),
        );
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("size"),
            &JsValue::from_str("large"),
        );
        google_id_render_button(&host, &options);

        // The widget keeps calling back for the page's lifetime
        callback.forget();
    });

    view! {
        <div class="google-signin">
            <div id=BUTTON_HOST_ID></div>
            <Show when=move || !available.get()>
                <button type="button" class="google-signin-fallback" disabled=true>
                    "Sign in with Google (unavailable)"
                </button>
            </Show>
        </div>
    }
}
