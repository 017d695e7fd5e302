//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::AuthUser;

/// Session identity, last-write-wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<AuthUser>,
}

/// Auth context provided at the app root
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session state - read
    pub auth: ReadSignal<AuthState>,
    set_auth: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new(auth: (ReadSignal<AuthState>, WriteSignal<AuthState>)) -> Self {
        Self {
            auth: auth.0,
            set_auth: auth.1,
        }
    }

    /// Replace the session state after a login or session fetch
    pub fn set_auth(&self, state: AuthState) {
        self.set_auth.set(state);
    }

    pub fn sign_in(&self, user: AuthUser) {
        self.set_auth(AuthState {
            is_authenticated: true,
            user: Some(user),
        });
    }
}

/// Cart context provided at the app root
#[derive(Clone, Copy)]
pub struct CartContext {
    /// Bumped after every successful add-to-cart - read
    pub cart_version: ReadSignal<u32>,
    set_cart_version: WriteSignal<u32>,
}

impl CartContext {
    pub fn new(cart_version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            cart_version: cart_version.0,
            set_cart_version: cart_version.1,
        }
    }

    /// Invalidate cart-dependent views
    pub fn update_cart(&self) {
        self.set_cart_version.update(|v| *v += 1);
    }
}
