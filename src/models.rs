//! Frontend Models
//!
//! Data structures mirroring the backend API payloads.
//! The backend speaks camelCase JSON.

use serde::{Deserialize, Serialize};

/// One line item of an order (read-only display data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub shirt_name: String,
    pub shirt_description: String,
    pub shirt_url_img: String,
    pub size_name: String,
    pub size_description: String,
    pub price: f64,
    pub quantity: u32,
}

/// Customer order as returned by the order search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub user_name: String,
    /// Raw backend timestamp; `"0001-01-01T00:00:00"` means "no date set"
    pub date: String,
    pub total_price: f64,
    pub status: i32,
    #[serde(default)]
    pub order_details: Vec<OrderLineItem>,
}

/// Server-side paging metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_item: u64,
}

/// One page of order search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPage {
    pub page_data: Vec<Order>,
    pub page_info: PageInfo,
}

/// Order search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOrderRequest {
    pub page_num: u32,
    pub page_size: u32,
    /// Keyword matched against order ids; empty means "all"
    pub order_id: String,
    /// `None` means "any status"
    pub status: Option<i32>,
}

/// Status mutation issued by the admin status-update control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: u64,
    pub status: i32,
}

/// Size option offered on the product detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShirtSize {
    pub size_id: u64,
    pub size_name: String,
    pub quantity: u32,
}

/// Product record as returned by the shirt endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shirt {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub url_img: String,
    pub player_name: String,
    pub number: u32,
    pub type_shirt_name: String,
    /// 1 = available, anything else = out of stock
    pub status: i32,
    #[serde(default)]
    pub list_size: Vec<ShirtSize>,
    pub club_name: String,
    pub club_established_year: String,
    pub club_logo: String,
    pub description: String,
}

/// Identity returned by the current-session endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Credentials sent to the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login endpoint response; `token` present on success, `EM` carries the
/// server error message on failure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(rename = "EM", default)]
    pub em: Option<String>,
}

impl LoginResponse {
    pub fn succeeded(&self) -> bool {
        self.token.is_some()
    }
}

/// Add-to-cart request, one per submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddRequest {
    pub shirt_id: u64,
    pub quantity: u32,
    pub size_id: u64,
}

impl CartAddRequest {
    /// Builds the request from the current selection. A missing size is a
    /// local precondition failure and must not reach the network.
    pub fn from_selection(
        shirt_id: u64,
        quantity: u32,
        size_id: Option<u64>,
    ) -> Result<Self, String> {
        let size_id =
            size_id.ok_or_else(|| "Please select a size before adding to basket.".to_string())?;
        Ok(Self {
            shirt_id,
            quantity: quantity.max(1),
            size_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_uses_backend_field_names() {
        let req = SearchOrderRequest {
            page_num: 1,
            page_size: 5,
            order_id: "123".to_string(),
            status: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["pageNum"], 1);
        assert_eq!(json["pageSize"], 5);
        assert_eq!(json["orderId"], "123");
        assert!(json["status"].is_null());
    }

    #[test]
    fn order_page_parses_backend_shape() {
        let json = r#"{
            "pageData": [{
                "id": 42,
                "userName": "Nguyen Van A",
                "date": "2024-11-03T09:15:00",
                "totalPrice": 450000.0,
                "status": 7,
                "orderDetails": [{
                    "shirtName": "Home Kit 24/25",
                    "shirtDescription": "Official home shirt",
                    "shirtUrlImg": "https://img.example/home.png",
                    "sizeName": "L",
                    "sizeDescription": "Large",
                    "price": 450000.0,
                    "quantity": 1
                }]
            }],
            "pageInfo": { "page": 1, "size": 5, "totalItem": 11 }
        }"#;
        let page: OrderPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page_data.len(), 1);
        assert_eq!(page.page_data[0].user_name, "Nguyen Van A");
        assert_eq!(page.page_data[0].order_details[0].size_name, "L");
        assert_eq!(page.page_info.total_item, 11);
    }

    #[test]
    fn login_response_reads_server_message() {
        let failure: LoginResponse = serde_json::from_str(r#"{"EM":"Wrong password"}"#).unwrap();
        assert!(!failure.succeeded());
        assert_eq!(failure.em.as_deref(), Some("Wrong password"));

        let success: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert!(success.succeeded());
    }

    #[test]
    fn cart_request_requires_a_size() {
        let err = CartAddRequest::from_selection(3, 2, None).unwrap_err();
        assert!(err.contains("select a size"));

        let req = CartAddRequest::from_selection(3, 0, Some(9)).unwrap();
        assert_eq!(req.size_id, 9);
        assert_eq!(req.quantity, 1);
    }

    #[test]
    fn shirt_parses_size_list() {
        let json = r#"{
            "id": 3,
            "name": "Away Kit",
            "price": 380000.0,
            "urlImg": "https://img.example/away.png",
            "playerName": "Son",
            "number": 7,
            "typeShirtName": "Player version",
            "status": 1,
            "listSize": [{ "sizeId": 2, "sizeName": "M", "quantity": 4 }],
            "clubName": "Tottenham",
            "clubEstablishedYear": "1882-01-01T00:00:00",
            "clubLogo": "https://img.example/logo.png",
            "description": "Season 24/25 away shirt"
        }"#;
        let shirt: Shirt = serde_json::from_str(json).unwrap();
        assert_eq!(shirt.list_size[0].size_id, 2);
        assert_eq!(shirt.status, 1);
    }
}
