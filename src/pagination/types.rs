//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by all strategies.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage<P> {
    /// More pages available, request them with these parameters
    Continue(P),
    /// No more pages
    Done,
}

impl<P> NextPage<P> {
    /// Parameters for the next request, if any
    pub fn into_params(self) -> Option<P> {
        match self {
            Self::Continue(params) => Some(params),
            Self::Done => None,
        }
    }
}

/// Tracks pagination state during one traversal
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Page number of the most recent request (offset pagination)
    pub page: u32,
    /// Page size sent from the second request on (offset pagination)
    pub page_size: Option<u32>,
    /// Records counted towards the reported total (offset pagination)
    pub total_fetched: u64,
    /// Every token already sent in this traversal (token pagination)
    pub seen_tokens: HashSet<String>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Create state with a starting continuation token
    pub fn with_token(token: Option<&str>) -> Self {
        let mut state = Self::default();
        if let Some(token) = token {
            state.record_token(token);
        }
        state
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Remember a token, returning `false` if it was already sent in this traversal
    pub fn record_token(&mut self, token: &str) -> bool {
        self.seen_tokens.insert(token.to_string())
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// One page of results
pub trait Page {
    /// Record type carried by the page
    type Item;

    /// Consume the page, returning its records in order
    fn into_items(self) -> Vec<Self::Item>;
}

/// A page from an offset-paginated endpoint
pub trait OffsetPage: Page {
    /// Number of records the server reports for this page
    fn item_count(&self) -> usize;

    /// Number of records across all pages, when the server reports it
    fn total_count(&self) -> Option<u64>;
}

/// A page from a continuation-token endpoint
pub trait TokenPage: Page {
    /// Token to present on the next request, if the server issued one
    fn next_token(&self) -> Option<&str>;
}

/// Parameters of an offset-paginated endpoint
pub trait OffsetParams: Clone {
    /// Requested page number
    fn page(&self) -> Option<u32>;

    /// Requested page size
    fn results_per_page(&self) -> Option<u32>;

    /// Copy of these parameters for another page
    #[must_use]
    fn with_paging(&self, page: u32, results_per_page: Option<u32>) -> Self;
}

/// Parameters of a continuation-token endpoint
pub trait TokenParams: Clone {
    /// Token to send with the request
    fn continuation_token(&self) -> Option<&str>;

    /// Copy of these parameters carrying another token
    #[must_use]
    fn with_continuation_token(&self, token: &str) -> Self;
}

/// Executes a single page request
///
/// Implemented by [`crate::UsaJobsClient`] for every endpoint's parameter
/// type. Paginators call it once per page and never retry.
#[async_trait]
pub trait Invoke<P: Sync>: Sync {
    /// Parsed response for one request
    type Page: Send;

    /// Perform one request
    async fn invoke(&self, params: &P) -> Result<Self::Page>;
}
