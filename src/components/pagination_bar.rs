//! Pagination Bar Component
//!
//! Table footer with page buttons and a page-size selector. Emits
//! `(page, page_size)` on every change; the owner re-issues the search.

use leptos::prelude::*;

use crate::search::{page_count, page_window, PAGE_SIZE_OPTIONS};

#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] page_size: Signal<u32>,
    #[prop(into)] total_item: Signal<u64>,
    #[prop(into)] on_change: Callback<(u32, u32)>,
) -> impl IntoView {
    let pages = move || page_count(total_item.get(), page_size.get());

    view! {
        <div class="pagination-bar">
            <button
                class="page-btn"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.run((page.get() - 1, page_size.get()))
            >
                "‹"
            </button>
            <For
                each=move || page_window(page.get(), pages())
                key=|p| *p
                children=move |p| {
                    view! {
                        <button
                            class=move || {
                                if page.get() == p { "page-btn active" } else { "page-btn" }
                            }
                            on:click=move |_| on_change.run((p, page_size.get()))
                        >
                            {p}
                        </button>
                    }
                }
            />
            <button
                class="page-btn"
                disabled=move || page.get() >= pages()
                on:click=move |_| on_change.run((page.get() + 1, page_size.get()))
            >
                "›"
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run((1, size));
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .copied()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || page_size.get() == size
                            >
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <span class="pagination-total">
                {move || format!("{} orders", total_item.get())}
            </span>
        </div>
    }
}
