//! Notification Store
//!
//! Process-wide toast notifications with fine-grained reactivity via
//! Leptos reactive_stores.

use leptos::prelude::*;
use reactive_stores::Store;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

/// One user-facing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Global notification state
#[derive(Clone, Debug, Default, Store)]
pub struct NotificationState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Id for the next toast
    pub next_id: u64,
}

/// Type alias for the store
pub type NotificationStore = Store<NotificationState>;

/// Get the notification store from context
pub fn use_notifications() -> NotificationStore {
    expect_context::<NotificationStore>()
}

// ========================
// Store Helper Functions
// ========================

fn store_push_toast(store: &NotificationStore, kind: ToastKind, title: &str, message: &str) {
    let id = {
        let next_id_field = store.next_id();
        let mut next_id = next_id_field.write();
        let id = *next_id;
        *next_id += 1;
        id
    };
    store.toasts().write().push(Toast {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
    });
}

/// Show a success notification
pub fn notify_success(store: &NotificationStore, title: &str, message: &str) {
    store_push_toast(store, ToastKind::Success, title, message);
}

/// Show an error notification
pub fn notify_error(store: &NotificationStore, title: &str, message: &str) {
    store_push_toast(store, ToastKind::Error, title, message);
}

/// Dismiss a toast by id
pub fn dismiss_toast(store: &NotificationStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
