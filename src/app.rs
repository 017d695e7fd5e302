//! Shirt-Shop Frontend App
//!
//! Root component: contexts, router and page layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{CartBadge, LoginForm, OrdersAdmin, ShirtDetail, SidebarUser, ToastHost};
use crate::context::{AuthContext, AuthState, CartContext};
use crate::store::NotificationState;

#[component]
pub fn App() -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());
    let (cart_version, set_cart_version) = signal(0u32);

    let auth = AuthContext::new((auth_state, set_auth_state));
    provide_context(auth);
    provide_context(CartContext::new((cart_version, set_cart_version)));
    provide_context(Store::new(NotificationState::default()));

    // Restore the session on startup
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_login().await {
                Ok(user) => {
                    web_sys::console::log_1(
                        &format!("[App] Session restored for {}", user.email).into(),
                    );
                    auth.sign_in(user);
                }
                Err(_) => {
                    web_sys::console::log_1(&"[App] No active session".into());
                }
            }
        });
    });

    let user_name = move || {
        auth.auth
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    view! {
        <Router>
            <div class="app-layout">
                <header class="app-header">
                    <A href="/">
                        <span class="app-brand">"Shirt Shop"</span>
                    </A>
                    <nav class="app-nav">
                        <A href="/admin/orders">"Orders"</A>
                        <Show
                            when=move || auth.auth.get().is_authenticated
                            fallback=|| view! { <A href="/login">"Sign In"</A> }
                        >
                            <span class="nav-user">{user_name}</span>
                        </Show>
                        <CartBadge />
                    </nav>
                </header>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/login") view=LoginPage />
                        <Route path=path!("/shirt/:id") view=ShirtDetail />
                        <Route path=path!("/admin/orders") view=OrdersAdmin />
                        <Route path=path!("/user/my-profile") view=UserProfilePage />
                        <Route path=path!("/user/setting") view=UserSettingPage />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Shirt Shop"</h1>
            <p>"Official club shirts, player versions and fan kits."</p>
        </div>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    view! { <LoginForm /> }
}

#[component]
fn UserProfilePage() -> impl IntoView {
    view! {
        <div class="user-layout">
            <SidebarUser />
            <section class="user-content">
                <h1>"My Profile"</h1>
            </section>
        </div>
    }
}

#[component]
fn UserSettingPage() -> impl IntoView {
    view! {
        <div class="user-layout">
            <SidebarUser />
            <section class="user-content">
                <h1>"Setting"</h1>
            </section>
        </div>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Back to HomePage"</A>
        </div>
    }
}
