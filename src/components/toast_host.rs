//! Toast Host Component
//!
//! Renders the process-wide notification store as a stack of toasts.

use leptos::prelude::*;

use crate::store::{dismiss_toast, use_notifications, NotificationStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast-title">{toast.title.clone()}</span>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| dismiss_toast(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
