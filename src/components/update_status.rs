//! Status Update Control
//!
//! Per-row admin control that moves an order to a new status and asks the
//! owning table to re-fetch on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::UpdateOrderStatusRequest;
use crate::status::OrderStatus;
use crate::store::{notify_error, notify_success, use_notifications};

#[component]
pub fn UpdateStatusControl(
    /// Wire code of the order's current status
    status: i32,
    order_id: u64,
    #[prop(into)] on_status_updated: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let choices = OrderStatus::from_code(status).transition_choices();

    if choices.is_empty() {
        return view! { <span class="status-done">"—"</span> }.into_any();
    }

    let (selected, set_selected) = signal(choices[0].code());
    let (saving, set_saving) = signal(false);

    let apply = move |_| {
        let request = UpdateOrderStatusRequest {
            order_id,
            status: selected.get_untracked(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_order_status(&request).await {
                Ok(true) => {
                    notify_success(&notifications, "Successful", "Order status updated.");
                    on_status_updated.run(());
                }
                Ok(false) => {
                    notify_error(&notifications, "Error", "Status update was refused.");
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[UpdateStatus] Order {}: {}", order_id, err).into(),
                    );
                    notify_error(&notifications, "Error", "Failed to update order status.");
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <span class="update-status">
            <select on:change=move |ev| {
                if let Ok(code) = event_target_value(&ev).parse::<i32>() {
                    set_selected.set(code);
                }
            }>
                {choices
                    .iter()
                    .copied()
                    .map(|choice| {
                        view! {
                            <option value=choice.code().to_string()>{choice.label()}</option>
                        }
                    })
                    .collect_view()}
            </select>
            <button disabled=move || saving.get() on:click=apply>
                "Apply"
            </button>
        </span>
    }
    .into_any()
}
