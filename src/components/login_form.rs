//! Login Form Component
//!
//! Credential form plus the Google sign-in button. Successful logins
//! fetch the session identity, update the auth context and redirect by
//! role.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::GoogleSignIn;
use crate::context::AuthContext;
use crate::models::LoginRequest;
use crate::store::{notify_error, notify_success, use_notifications};

/// Route to land on after a successful login
fn redirect_target(role: &str) -> &'static str {
    if role == "admin" {
        "/admin/orders"
    } else {
        "/"
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let navigate = use_navigate();
    let auth = expect_context::<AuthContext>();
    let notifications = use_notifications();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let email = email.get().trim().to_string();
            let password = password.get();
            if email.is_empty() || !email.contains('@') {
                notify_error(&notifications, "Error", "Please enter a valid email!");
                return;
            }
            if password.is_empty() {
                notify_error(&notifications, "Error", "Please input your password!");
                return;
            }

            let navigate = navigate.clone();
            set_submitting.set(true);
            spawn_local(async move {
                let request = LoginRequest { email, password };
                match api::login_user(&request).await {
                    Ok(response) if response.succeeded() => match api::get_current_login().await {
                        Ok(user) => {
                            notify_success(
                                &notifications,
                                "Successful",
                                "You have successfully logged in.",
                            );
                            let target = redirect_target(&user.role);
                            auth.sign_in(user);
                            navigate(target, Default::default());
                        }
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("[Login] Session fetch failed: {}", err).into(),
                            );
                            notify_error(&notifications, "Error", "Something went wrong!");
                        }
                    },
                    Ok(response) => {
                        let message = response
                            .em
                            .unwrap_or_else(|| "Something went wrong!".to_string());
                        notify_error(&notifications, "Error", &message);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[Login] {}", err).into());
                        notify_error(&notifications, "Error", "Something went wrong!");
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    // The backend has no Google credential exchange endpoint yet, so a
    // received credential cannot start a session.
    let on_google_credential = move |credential: String| {
        web_sys::console::log_1(
            &format!("[Login] Google credential received ({} bytes)", credential.len()).into(),
        );
        notify_error(
            &notifications,
            "Error",
            "Google sign-in is not connected to the backend yet.",
        );
    };

    let on_google_error = move |_: ()| {
        notify_error(&notifications, "Error", "Google login failed!");
    };

    view! {
        <div class="login-form">
            <form on:submit=on_submit>
                <img src="/assets/logo.png" class="login-logo" alt="" />
                <h1 class="login-title">"Sign In"</h1>
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="login-submit" disabled=move || submitting.get()>
                    "Sign In"
                </button>

                <GoogleSignIn on_credential=on_google_credential on_error=on_google_error />

                <div class="login-back">
                    <A href="/">"Back to HomePage"</A>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::redirect_target;

    #[test]
    fn admin_goes_to_order_management() {
        assert_eq!(redirect_target("admin"), "/admin/orders");
    }

    #[test]
    fn other_roles_go_home() {
        assert_eq!(redirect_target("customer"), "/");
        assert_eq!(redirect_target(""), "/");
    }
}
