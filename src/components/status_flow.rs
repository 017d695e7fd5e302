//! Status Flow Component
//!
//! Horizontal strip showing the happy-path order progression above the
//! admin table.

use leptos::prelude::*;

use crate::status::OrderStatus;

#[component]
pub fn StatusFlow() -> impl IntoView {
    view! {
        <ol class="status-flow">
            {OrderStatus::FLOW
                .iter()
                .map(|step| view! { <li class="status-flow-step">{step.label()}</li> })
                .collect_view()}
        </ol>
    }
}
