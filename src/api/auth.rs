//! Auth Endpoints

use crate::models::{AuthUser, LoginRequest, LoginResponse};

/// Exchange credentials for a session
pub async fn login_user(request: &LoginRequest) -> Result<LoginResponse, String> {
    super::post_json("/api/auth/login", request).await
}

/// Fetch the identity of the current session
pub async fn get_current_login() -> Result<AuthUser, String> {
    super::get_json("/api/auth/me").await
}
