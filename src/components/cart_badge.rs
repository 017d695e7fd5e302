//! Cart Badge Component
//!
//! Header cart indicator; re-renders whenever the cart context is
//! invalidated.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::CartContext;

#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = expect_context::<CartContext>();

    Effect::new(move |_| {
        let version = cart.cart_version.get();
        if version > 0 {
            web_sys::console::log_1(&format!("[CartBadge] Cart invalidated (v{})", version).into());
        }
    });

    view! {
        <A href="/">
            <span class="cart-badge" title="Cart">
                "🛒"
                <Show when=move || { cart.cart_version.get() > 0 }>
                    <span class="cart-dot"></span>
                </Show>
            </span>
        </A>
    }
}
