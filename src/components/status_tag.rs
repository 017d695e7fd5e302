//! Status Tag Component

use leptos::prelude::*;

use crate::status::OrderStatus;

/// Colored tag for an order status wire code
#[component]
pub fn StatusTag(status: i32) -> impl IntoView {
    let status = OrderStatus::from_code(status);

    view! {
        <span class=status.tag_class()>{status.label()}</span>
    }
}
