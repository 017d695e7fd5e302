//! Cart Endpoints

use crate::models::CartAddRequest;

/// Add a shirt to the basket; returns the server's success flag
pub async fn add_to_cart(request: &CartAddRequest) -> Result<bool, String> {
    super::post_json("/api/cart", request).await
}
