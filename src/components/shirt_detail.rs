//! Product Detail View
//!
//! Fetches one shirt from the route id, renders its details and submits
//! add-to-basket requests.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::context::CartContext;
use crate::format::{format_established_year, format_price};
use crate::models::{CartAddRequest, Shirt};
use crate::store::{notify_error, notify_success, use_notifications};

#[component]
pub fn ShirtDetail() -> impl IntoView {
    let params = use_params_map();
    let cart = expect_context::<CartContext>();
    let notifications = use_notifications();

    let (shirt, set_shirt) = signal(None::<Shirt>);
    let (main_image, set_main_image) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);
    let (selected_size_id, set_selected_size_id) = signal(None::<u64>);
    let (club_open, set_club_open) = signal(true);
    let (description_open, set_description_open) = signal(false);

    Effect::new(move |_| {
        let id = params
            .with(|p| p.get("id"))
            .and_then(|raw| raw.parse::<u64>().ok());
        // Without an id there is nothing to fetch; the view stays loading
        let Some(id) = id else {
            web_sys::console::warn_1(&"[ShirtDetail] Missing shirt id in route".into());
            return;
        };
        spawn_local(async move {
            match api::get_shirt_by_id(id).await {
                Ok(data) => {
                    set_main_image.set(data.url_img.clone());
                    set_shirt.set(Some(data));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ShirtDetail] {}", err).into());
                    notify_error(&notifications, "Error", "Unable to load shirt details.");
                }
            }
        });
    });

    let add_to_basket = move |_| {
        let Some(shirt_id) = shirt.get_untracked().map(|data| data.id) else {
            return;
        };
        let request = match CartAddRequest::from_selection(
            shirt_id,
            quantity.get_untracked(),
            selected_size_id.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                notify_error(&notifications, "Error", &message);
                return;
            }
        };
        spawn_local(async move {
            match api::add_to_cart(&request).await {
                Ok(true) => {
                    notify_success(&notifications, "Success", "Added to basket successfully.");
                    cart.update_cart();
                }
                Ok(false) => {
                    notify_error(&notifications, "Error", "Failed to add to basket.");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ShirtDetail] Add to cart: {}", err).into());
                    notify_error(&notifications, "Error", "Failed to add to basket.");
                }
            }
        });
    };

    view! {
        <div class="shirt-detail">
            <nav class="breadcrumb">
                <A href="/">"Home"</A>
                <span class="breadcrumb-sep">"/"</span>
                <span>"Detail"</span>
            </nav>

            <Show
                when=move || shirt.get().is_some()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                {move || {
                    shirt
                        .get()
                        .map(|data| {
                            let availability =
                                if data.status == 1 { "Available" } else { "Out of stock" };
                            view! {
                                <div class="shirt-detail-body">
                                    <div class="shirt-image">
                                        <img
                                            src=move || main_image.get()
                                            alt=data.name.clone()
                                        />
                                    </div>
                                    <div class="shirt-info">
                                        <h1>{data.name.clone()}</h1>
                                        <p class="shirt-price">{format_price(data.price)}</p>

                                        <div class="shirt-panel">
                                            <h2>"General Information"</h2>
                                            <p>{format!("Player: {}", data.player_name)}</p>
                                            <p>{format!("Number: {}", data.number)}</p>
                                            <p>{format!("Type: {}", data.type_shirt_name)}</p>
                                            <p>{format!("Status: {}", availability)}</p>
                                        </div>

                                        <div class="shirt-panel">
                                            <h2>"Size and Quantity"</h2>
                                            <select
                                                class="size-select"
                                                on:change=move |ev| {
                                                    set_selected_size_id
                                                        .set(event_target_value(&ev).parse::<u64>().ok())
                                                }
                                            >
                                                <option
                                                    value=""
                                                    disabled=true
                                                    selected=move || selected_size_id.get().is_none()
                                                >
                                                    "Select a size"
                                                </option>
                                                {data
                                                    .list_size
                                                    .iter()
                                                    .map(|size| {
                                                        view! {
                                                            <option value=size.size_id.to_string()>
                                                                {format!(
                                                                    "{} - {} available",
                                                                    size.size_name,
                                                                    size.quantity
                                                                )}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </div>

                                        <div class="basket-row">
                                            <input
                                                type="number"
                                                min="1"
                                                class="quantity-input"
                                                prop:value=move || quantity.get().to_string()
                                                on:input=move |ev| {
                                                    if let Ok(value) =
                                                        event_target_value(&ev).parse::<u32>()
                                                    {
                                                        set_quantity.set(value.max(1));
                                                    }
                                                }
                                            />
                                            <button class="basket-btn" on:click=add_to_basket>
                                                "Add to Basket"
                                            </button>
                                        </div>

                                        <div class="shirt-collapse">
                                            <button
                                                class="collapse-header"
                                                on:click=move |_| set_club_open.update(|v| *v = !*v)
                                            >
                                                "Club"
                                            </button>
                                            <Show when=move || club_open.get()>
                                                <div class="collapse-panel">
                                                    <p>{format!("Club Name: {}", data.club_name)}</p>
                                                    <p>
                                                        {format!(
                                                            "Established Year: {}",
                                                            format_established_year(&data.club_established_year)
                                                        )}
                                                    </p>
                                                    <img
                                                        class="club-logo"
                                                        src=data.club_logo.clone()
                                                        alt=data.club_name.clone()
                                                    />
                                                </div>
                                            </Show>
                                            <button
                                                class="collapse-header"
                                                on:click=move |_| {
                                                    set_description_open.update(|v| *v = !*v)
                                                }
                                            >
                                                "Description"
                                            </button>
                                            <Show when=move || description_open.get()>
                                                <div class="collapse-panel">
                                                    <p>{data.description.clone()}</p>
                                                </div>
                                            </Show>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
