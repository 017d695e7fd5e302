//! Shirt Endpoints

use crate::models::Shirt;

/// Fetch one product by id
pub async fn get_shirt_by_id(id: u64) -> Result<Shirt, String> {
    super::get_json(&format!("/api/shirts/{}", id)).await
}
