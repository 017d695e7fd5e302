//! Search Box Component
//!
//! Keyword input with debounced live search, explicit submit and a reset
//! control.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay before a typed keyword is searched
const SEARCH_DEBOUNCE_MS: u32 = 400;

#[component]
pub fn SearchBox(
    /// Keyword owned by the parent view
    #[prop(into)] keyword: Signal<String>,
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    // Bumping the generation cancels any pending debounce
    let (generation, set_generation) = signal(0u32);

    // Follow the parent when it resets or replaces the keyword
    Effect::new(move |_| set_draft.set(keyword.get()));

    let schedule_search = move |value: String| {
        let current = generation.get_untracked() + 1;
        set_generation.set(current);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_untracked() == current {
                on_search.run(value);
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_generation.update(|g| *g += 1);
        on_search.run(draft.get());
    };

    view! {
        <form class="order-search" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search by keyword"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_draft.set(value.clone());
                    schedule_search(value);
                }
            />
            <button type="submit">"Search"</button>
            <button
                type="button"
                class="search-reset"
                title="Reset"
                on:click=move |_| {
                    set_generation.update(|g| *g += 1);
                    on_reset.run(());
                }
            >
                "⟳"
            </button>
        </form>
    }
}
