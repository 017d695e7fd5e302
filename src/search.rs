//! Order Search State
//!
//! Request-building state for the admin order table: active tab, paging
//! and the current keyword. Pure so the fetch contract is testable.

use crate::models::{PageInfo, SearchOrderRequest};
use crate::status::REJECTED_CODE;

/// Admin order table tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdersTab {
    All,
    Rejected,
}

impl OrdersTab {
    pub fn label(&self) -> &'static str {
        match self {
            OrdersTab::All => "All Orders",
            OrdersTab::Rejected => "Rejected Orders",
        }
    }
}

/// Search state owned by the order admin view
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSearchState {
    pub tab: OrdersTab,
    pub page: u32,
    pub page_size: u32,
    pub keyword: String,
}

pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Page sizes offered by the table footer
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [5, 10, 20];

impl Default for OrderSearchState {
    fn default() -> Self {
        Self {
            tab: OrdersTab::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            keyword: String::new(),
        }
    }
}

impl OrderSearchState {
    /// Build the request for the current state. The rejected tab always
    /// forces status 7, whatever the caller passes; the all tab passes the
    /// given status through (`None` = any).
    pub fn request(&self, status: Option<i32>) -> SearchOrderRequest {
        SearchOrderRequest {
            page_num: self.page,
            page_size: self.page_size,
            order_id: self.keyword.clone(),
            status: match self.tab {
                OrdersTab::Rejected => Some(REJECTED_CODE),
                OrdersTab::All => status,
            },
        }
    }

    /// Table pagination change: new page/size, keyword untouched
    pub fn change_page(&mut self, page: u32, page_size: u32) {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
    }

    /// Search submit: new keyword, back to page 1
    pub fn submit_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.to_string();
        self.page = 1;
    }

    /// Reset control: clear the keyword, back to page 1
    pub fn reset(&mut self) {
        self.keyword.clear();
        self.page = 1;
    }

    /// Tab change: back to page 1, keyword untouched
    pub fn switch_tab(&mut self, tab: OrdersTab) {
        self.tab = tab;
        self.page = 1;
    }

    /// Adopt the paging echoed back by the server
    pub fn apply_page_info(&mut self, info: &PageInfo) {
        self.page = info.page.max(1);
        self.page_size = info.size.max(1);
    }
}

/// Number of pages for a total item count at a page size
pub fn page_count(total_item: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_item.div_ceil(u64::from(page_size));
    pages.clamp(1, u64::from(u32::MAX)) as u32
}

/// Page buttons shown by the table footer
pub const PAGE_WINDOW: u32 = 5;

/// Up to [`PAGE_WINDOW`] page numbers around the current page
pub fn page_window(current: u32, pages: u32) -> Vec<u32> {
    let end = (current + PAGE_WINDOW / 2).clamp(PAGE_WINDOW.min(pages), pages);
    let start = end.saturating_sub(PAGE_WINDOW - 1).max(1);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tab_passes_status_through() {
        let mut state = OrderSearchState::default();
        state.submit_keyword("123");
        let req = state.request(None);
        assert_eq!(req.page_num, 1);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(req.order_id, "123");
        assert_eq!(req.status, None);

        assert_eq!(state.request(Some(3)).status, Some(3));
    }

    #[test]
    fn rejected_tab_always_forces_status_seven() {
        let mut state = OrderSearchState::default();
        state.submit_keyword("123");
        state.switch_tab(OrdersTab::Rejected);

        assert_eq!(state.request(None).status, Some(7));
        assert_eq!(state.request(Some(3)).status, Some(7));
        // Keyword survives the tab switch, page resets
        assert_eq!(state.request(None).order_id, "123");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn pagination_preserves_keyword() {
        let mut state = OrderSearchState::default();
        state.submit_keyword("ord-9");
        state.change_page(3, 10);

        let req = state.request(None);
        assert_eq!(req.page_num, 3);
        assert_eq!(req.page_size, 10);
        assert_eq!(req.order_id, "ord-9");
    }

    #[test]
    fn submit_resets_to_first_page() {
        let mut state = OrderSearchState::default();
        state.change_page(4, 10);
        state.submit_keyword("77");
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn reset_clears_keyword_and_page() {
        let mut state = OrderSearchState::default();
        state.submit_keyword("abc");
        state.change_page(2, 5);
        state.reset();
        assert_eq!(state.keyword, "");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn server_page_info_is_adopted() {
        let mut state = OrderSearchState::default();
        state.apply_page_info(&PageInfo {
            page: 2,
            size: 10,
            total_item: 35,
        });
        assert_eq!(state.page, 2);
        assert_eq!(state.page_size, 10);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(35, 10), 4);
    }

    #[test]
    fn page_window_stays_in_range() {
        assert_eq!(page_window(1, 2), vec![1, 2]);
        assert_eq!(page_window(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 9), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 9), vec![5, 6, 7, 8, 9]);
    }
}
