//! Order Details Modal
//!
//! Overlay listing the line items of one order. Closing it has no side
//! effects beyond hiding it.

use leptos::prelude::*;

use crate::format::format_price;
use crate::models::OrderLineItem;

#[component]
pub fn OrderDetailsModal(
    /// Line items of the selected order; `None` hides the modal
    items: ReadSignal<Option<Vec<OrderLineItem>>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || items.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Order Details"</h2>
                        <button class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    <ul class="order-line-items">
                        <For
                            each=move || {
                                items
                                    .get()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .enumerate()
                                    .collect::<Vec<_>>()
                            }
                            key=|(i, _)| *i
                            children=move |(_, item): (usize, OrderLineItem)| {
                                view! {
                                    <li class="order-line-item">
                                        <img class="line-item-img" src=item.shirt_url_img.clone() alt=item.shirt_name.clone() />
                                        <div class="line-item-body">
                                            <span class="line-item-name">{item.shirt_name.clone()}</span>
                                            <span class="line-item-description">{item.shirt_description.clone()}</span>
                                            <p>{format!("Size: {} ({})", item.size_name, item.size_description)}</p>
                                            <p>{format!("Price: {}", format_price(item.price))}</p>
                                            <p>{format!("Quantity: {}", item.quantity)}</p>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div class="modal-footer">
                        <button class="modal-cancel" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="modal-ok" on:click=move |_| on_close.run(())>
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
