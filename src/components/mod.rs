//! UI Components
//!
//! Leptos components for the storefront.

mod cart_badge;
mod google_signin;
mod login_form;
mod order_details_modal;
mod orders_admin;
mod pagination_bar;
mod search_box;
mod shirt_detail;
mod sidebar_user;
mod status_flow;
mod status_tag;
mod toast_host;
mod update_status;

pub use cart_badge::CartBadge;
pub use google_signin::GoogleSignIn;
pub use login_form::LoginForm;
pub use order_details_modal::OrderDetailsModal;
pub use orders_admin::OrdersAdmin;
pub use pagination_bar::PaginationBar;
pub use search_box::SearchBox;
pub use shirt_detail::ShirtDetail;
pub use sidebar_user::SidebarUser;
pub use status_flow::StatusFlow;
pub use status_tag::StatusTag;
pub use toast_host::ToastHost;
pub use update_status::UpdateStatusControl;
