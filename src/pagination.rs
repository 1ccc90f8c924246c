use serde::Serialize;

/// Fixed page size used for every list request.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// One rendered page of items.
///
/// The catalog service exposes no total count, so there is no known upper
/// bound: "Next" is always offered and only "Previous" can be disabled.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: u32) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            page,
            has_prev: page > 1,
            has_next: true,
        }
    }
}
