//! Query state driving the product listing.
//!
//! The listing page keeps one [`QueryState`] per page instance. The URL query
//! string is the single source of truth on navigation: [`QueryState::from_query_str`]
//! parses it leniently, and every user action goes through
//! [`QueryState::apply`], after which the next URL is derived from the state
//! with [`QueryState::to_query_string`]. The two directions never run
//! concurrently, so the synchronizer cannot loop.

use serde::{Deserialize, Serialize};

/// Field the product list is sorted by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Price,
    Title,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Title => "title",
        }
    }

    /// Lenient parse; anything unrecognized falls back to the default.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "title" => SortField::Title,
            _ => SortField::Price,
        }
    }
}

/// Direction the product list is sorted in.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Lenient parse; anything unrecognized falls back to the default.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// The combined filter/sort/page parameters driving the current list request.
///
/// Invariant: `page >= 1`. An empty `search` or `category` means "no filter".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub search: String,
    pub category: String,
    #[serde(rename = "sortBy")]
    pub sort_by: SortField,
    #[serde(rename = "sortOrder")]
    pub sort_order: SortOrder,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            category: String::new(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// A user action mutating the query state.
///
/// Filter and sort changes reset the page to 1; explicit page navigation
/// leaves every other field untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryIntent {
    SetSearch(String),
    SetCategory(String),
    SetSortField(SortField),
    SetSortOrder(SortOrder),
    GoToPage(u32),
    NextPage,
    PrevPage,
}

/// Raw query parameters as they appear in the URL, before coercion.
#[derive(Debug, Default, Deserialize)]
struct RawQuery {
    #[serde(default)]
    page: Option<String>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "sortBy")]
    sort_by: Option<String>,
    #[serde(default, rename = "sortOrder")]
    sort_order: Option<String>,
}

impl QueryState {
    /// Parses a raw URL query string, silently defaulting missing or
    /// malformed fields. Never rejects.
    pub fn from_query_str(query: &str) -> Self {
        let raw: RawQuery = serde_html_form::from_str(query).unwrap_or_default();

        Self {
            page: raw
                .page
                .and_then(|p| p.trim().parse::<u32>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(1),
            search: raw
                .search
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            category: raw
                .category
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            sort_by: raw
                .sort_by
                .map(|s| SortField::parse_or_default(s.trim()))
                .unwrap_or_default(),
            sort_order: raw
                .sort_order
                .map(|s| SortOrder::parse_or_default(s.trim()))
                .unwrap_or_default(),
        }
    }

    /// Serializes the full canonical parameter set, suitable for the page URL.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    /// Applies a user intent. The only mutation path for the query state.
    pub fn apply(&mut self, intent: QueryIntent) {
        match intent {
            QueryIntent::SetSearch(search) => {
                self.search = search.trim().to_string();
                self.page = 1;
            }
            QueryIntent::SetCategory(category) => {
                self.category = category.trim().to_string();
                self.page = 1;
            }
            QueryIntent::SetSortField(field) => {
                self.sort_by = field;
                self.page = 1;
            }
            QueryIntent::SetSortOrder(order) => {
                self.sort_order = order;
                self.page = 1;
            }
            QueryIntent::GoToPage(page) => {
                self.page = page.max(1);
            }
            QueryIntent::NextPage => {
                self.page = self.page.saturating_add(1);
            }
            QueryIntent::PrevPage => {
                self.page = self.page.saturating_sub(1).max(1);
            }
        }
    }

    /// Whether a previous page exists. "Previous" is disabled exactly when
    /// this is false; there is no known upper bound for "Next".
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Search filter, `None` when empty.
    pub fn search(&self) -> Option<&str> {
        Some(self.search.as_str()).filter(|s| !s.is_empty())
    }

    /// Category filter, `None` when empty.
    pub fn category(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|s| !s.is_empty())
    }

    /// Number of items to skip for the current page.
    pub fn skip(&self, per_page: usize) -> usize {
        (self.page.max(1) as usize - 1) * per_page
    }
}
