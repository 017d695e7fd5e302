//! Order Endpoints
//!
//! Admin order search and status mutation.

use crate::models::{OrderPage, SearchOrderRequest, UpdateOrderStatusRequest};

/// Search orders by keyword/status, server-paged
pub async fn search_orders(request: &SearchOrderRequest) -> Result<OrderPage, String> {
    super::post_json("/api/orders/search", request).await
}

/// Move an order to a new status; returns the server's success flag
pub async fn update_order_status(request: &UpdateOrderStatusRequest) -> Result<bool, String> {
    super::put_json("/api/orders/status", request).await
}
