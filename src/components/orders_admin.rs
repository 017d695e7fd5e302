//! Order Admin View
//!
//! Tabbed, paginated, searchable order table with a line-item detail
//! modal and per-row status updates.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    OrderDetailsModal, PaginationBar, SearchBox, StatusFlow, StatusTag, UpdateStatusControl,
};
use crate::format::{format_order_date, format_price};
use crate::models::{Order, OrderLineItem};
use crate::search::{OrderSearchState, OrdersTab};
use crate::store::{notify_error, use_notifications};

#[component]
pub fn OrdersAdmin() -> impl IntoView {
    let notifications = use_notifications();
    let (state, set_state) = signal(OrderSearchState::default());
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (total_item, set_total_item) = signal(0u64);
    let (loading, set_loading) = signal(false);
    let (modal_items, set_modal_items) = signal(None::<Vec<OrderLineItem>>);

    // Overlapping fetches are not fenced; the last response to resolve wins
    let fetch_orders = move || {
        let request = state.get_untracked().request(None);
        set_loading.set(true);
        spawn_local(async move {
            match api::search_orders(&request).await {
                Ok(page) => {
                    web_sys::console::log_1(
                        &format!(
                            "[Orders] Page {} loaded, {} of {} orders",
                            page.page_info.page,
                            page.page_data.len(),
                            page.page_info.total_item
                        )
                        .into(),
                    );
                    set_orders.set(page.page_data);
                    set_total_item.set(page.page_info.total_item);
                    set_state.update(|s| s.apply_page_info(&page.page_info));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Orders] Search failed: {}", err).into());
                    notify_error(&notifications, "Error", "Unable to load orders.");
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load
    Effect::new(move |_| fetch_orders());

    let on_tab = move |tab: OrdersTab| {
        if state.get_untracked().tab == tab {
            return;
        }
        set_state.update(|s| s.switch_tab(tab));
        fetch_orders();
    };

    let on_search = move |keyword: String| {
        set_state.update(|s| s.submit_keyword(&keyword));
        fetch_orders();
    };

    let on_reset = move |_: ()| {
        set_state.update(|s| s.reset());
        fetch_orders();
    };

    let on_page_change = move |(page, page_size): (u32, u32)| {
        set_state.update(|s| s.change_page(page, page_size));
        fetch_orders();
    };

    let keyword = Signal::derive(move || state.get().keyword.clone());
    let page = Signal::derive(move || state.get().page);
    let page_size = Signal::derive(move || state.get().page_size);

    view! {
        <div class="orders-admin">
            <StatusFlow />

            <div class="orders-tabs">
                {[OrdersTab::All, OrdersTab::Rejected]
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if state.get().tab == tab {
                                        "orders-tab active"
                                    } else {
                                        "orders-tab"
                                    }
                                }
                                on:click=move |_| on_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <SearchBox keyword=keyword on_search=on_search on_reset=on_reset />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Customer Name"</th>
                        <th>"Order Date"</th>
                        <th class="price-header">"Total Price"</th>
                        <th>"Order Status"</th>
                        <th>"View Details"</th>
                        <th>"Change Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| order.id
                        children=move |order| {
                            let details = order.order_details.clone();
                            view! {
                                <tr>
                                    <td>{order.id}</td>
                                    <td>{order.user_name.clone()}</td>
                                    <td>{format_order_date(&order.date)}</td>
                                    <td class="price-cell">{format_price(order.total_price)}</td>
                                    <td><StatusTag status=order.status /></td>
                                    <td>
                                        <button
                                            class="link-btn"
                                            on:click=move |_| set_modal_items.set(Some(details.clone()))
                                        >
                                            "View Details"
                                        </button>
                                    </td>
                                    <td>
                                        <UpdateStatusControl
                                            status=order.status
                                            order_id=order.id
                                            on_status_updated=move |_: ()| fetch_orders()
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <PaginationBar
                page=page
                page_size=page_size
                total_item=total_item
                on_change=on_page_change
            />

            <OrderDetailsModal
                items=modal_items
                on_close=move |_: ()| set_modal_items.set(None)
            />
        </div>
    }
}
