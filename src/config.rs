//! Build-Time Configuration
//!
//! Overridable via environment variables at compile time.

/// Base URL of the storefront backend API
pub const API_BASE: &str = match option_env!("SHIRT_SHOP_API_BASE") {
    Some(url) => url,
    None => "http://localhost:5005",
};

/// Google Identity Services client id for the OAuth button
pub const GOOGLE_CLIENT_ID: &str = match option_env!("SHIRT_SHOP_GOOGLE_CLIENT_ID") {
    Some(id) => id,
    None => "shirt-shop-dev.apps.googleusercontent.com",
};
