//! Listing state coordinator for interactive frontends.
//!
//! Owns one [`QueryState`] per page instance and routes every mutation
//! through [`ListingController::dispatch`]. Each issued fetch is tagged with
//! a monotonically increasing generation; a response is installed only when
//! its generation is still the latest, so a slow response to a superseded
//! query can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::{CatalogReader, ListQuery};
use crate::domain::product::Product;
use crate::domain::query::{QueryIntent, QueryState};

/// Message surfaced when a list fetch fails. Terminal, never retried.
pub const PRODUCTS_LOAD_ERROR: &str = "Failed to load products";

/// Snapshot of the listing view model.
#[derive(Clone, Debug, Default)]
pub struct ListingState {
    pub query: QueryState,
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct ListingController<R: CatalogReader + ?Sized> {
    catalog: Arc<R>,
    state: Mutex<ListingState>,
    generation: AtomicU64,
}

impl<R: CatalogReader + ?Sized> ListingController<R> {
    pub fn new(catalog: Arc<R>) -> Self {
        Self {
            catalog,
            state: Mutex::new(ListingState::default()),
            generation: AtomicU64::new(0),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ListingState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Current view model.
    pub fn snapshot(&self) -> ListingState {
        self.lock_state().clone()
    }

    /// Applies a user intent and issues exactly one list request for the
    /// resulting query state.
    pub async fn dispatch(&self, intent: QueryIntent) {
        let (query, token) = {
            let mut state = self.lock_state();
            state.query.apply(intent);
            state.loading = true;
            state.error = None;
            (state.query.clone(), self.next_generation())
        };
        self.fetch(query, token).await;
    }

    /// Adopts an externally navigated URL query string and refetches.
    pub async fn sync_url(&self, query_str: &str) {
        let query = QueryState::from_query_str(query_str);
        let token = {
            let mut state = self.lock_state();
            state.query = query.clone();
            state.loading = true;
            state.error = None;
            self.next_generation()
        };
        self.fetch(query, token).await;
    }

    /// Refetches the current query state, e.g. on initial load.
    pub async fn refresh(&self) {
        let (query, token) = {
            let mut state = self.lock_state();
            state.loading = true;
            state.error = None;
            (state.query.clone(), self.next_generation())
        };
        self.fetch(query, token).await;
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn fetch(&self, query: QueryState, token: u64) {
        let result = self.catalog.list_products(ListQuery::from(&query)).await;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != token {
            // A newer request has been issued; this response is stale.
            return;
        }

        match result {
            Ok(products) => {
                state.products = products;
                state.error = None;
            }
            Err(err) => {
                log::error!("Failed to list products: {err}");
                state.error = Some(PRODUCTS_LOAD_ERROR.to_string());
            }
        }
        state.loading = false;
    }
}
