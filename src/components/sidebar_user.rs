//! User Sidebar Component
//!
//! Navigation menu for the user area, highlighting the current route.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Menu entries as (route, label)
const MENU_ITEMS: &[(&str, &str)] = &[
    ("/user/my-profile", "My Profile"),
    ("/user/setting", "Setting"),
];

#[component]
pub fn SidebarUser() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let pathname = location.pathname;

    view! {
        <nav class="user-sidebar">
            {MENU_ITEMS
                .iter()
                .map(|(route, label)| {
                    let navigate = navigate.clone();
                    let route = *route;
                    view! {
                        <button
                            class=move || {
                                if pathname.get() == route {
                                    "sidebar-item active"
                                } else {
                                    "sidebar-item"
                                }
                            }
                            on:click=move |_| navigate(route, Default::default())
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
