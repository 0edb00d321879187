//! Pagination strategy implementations
//!
//! Each strategy handles a specific pagination pattern.

use super::items::flatten_items;
use super::types::{
    Invoke, NextPage, OffsetPage, OffsetParams, Page, PaginationState, TokenPage, TokenParams,
};
use crate::error::{Error, Result};
use futures::stream::{self, Stream};
use tracing::{debug, info};

// ============================================================================
// Offset Pagination
// ============================================================================

/// Page number pagination (e.g., the job search endpoint)
///
/// Sends `Page` and `ResultsPerPage` and infers the end of data from the
/// counts the server reports:
/// - an empty page ends the traversal
/// - reaching the reported total ends the traversal
/// - without a total, a page shorter than the page size ends the traversal
///
/// The first request keeps the caller's `ResultsPerPage` (or leaves it out).
/// Later requests always carry it, using the size of the first page when the
/// caller did not choose one.
#[derive(Debug, Clone)]
pub struct OffsetPaginator<P> {
    params: P,
}

impl<P: OffsetParams> OffsetPaginator<P> {
    /// Create a new offset paginator starting from the given parameters
    pub fn new(params: P) -> Self {
        Self { params }
    }

    /// Initial state for a traversal
    ///
    /// When starting past the first page with a known page size, the skipped
    /// pages count towards the reported total.
    pub fn initial_state(&self) -> PaginationState {
        let page = self.params.page().unwrap_or(1);
        let mut state = PaginationState::with_page(page);
        state.page_size = self.params.results_per_page();
        if let Some(size) = state.page_size {
            state.add_fetched(u64::from(page.saturating_sub(1)) * u64::from(size));
        }
        state
    }

    /// Parameters for the first request
    pub fn initial_params(&self, state: &PaginationState) -> P {
        self.params.with_paging(state.page, state.page_size)
    }

    /// Process a response and determine if there's a next page
    pub fn process_response<T: OffsetPage>(
        &self,
        page: &T,
        state: &mut PaginationState,
    ) -> NextPage<P> {
        let count = page.item_count();
        state.add_fetched(count as u64);
        debug!(
            page = state.page,
            items = count,
            total = ?page.total_count(),
            "Fetched search page"
        );

        if count == 0 {
            return NextPage::Done;
        }

        let page_size = *state.page_size.get_or_insert(count as u32);

        let exhausted = match page.total_count() {
            Some(total) => state.total_fetched >= total,
            None => count < page_size as usize,
        };
        if exhausted {
            return NextPage::Done;
        }

        state.next_page();
        NextPage::Continue(self.params.with_paging(state.page, Some(page_size)))
    }

    /// Lazily fetch pages, one request per poll
    pub fn pages<'a, E>(self, endpoint: &'a E) -> impl Stream<Item = Result<E::Page>> + 'a
    where
        E: Invoke<P>,
        E::Page: OffsetPage,
        P: Send + Sync + 'a,
    {
        let state = self.initial_state();
        let first = self.initial_params(&state);

        stream::try_unfold(
            (self, state, Some(first)),
            move |(paginator, mut state, next)| async move {
                let Some(params) = next else {
                    return Ok(None);
                };
                let page = endpoint.invoke(&params).await?;
                let next = paginator.process_response(&page, &mut state).into_params();
                if next.is_none() {
                    info!(
                        last_page = state.page,
                        records = state.total_fetched,
                        "Search pagination complete"
                    );
                }
                Ok::<_, Error>(Some((page, (paginator, state, next))))
            },
        )
    }

    /// Lazily fetch records, requesting a page only when the previous one is drained
    pub fn items<'a, E>(
        self,
        endpoint: &'a E,
    ) -> impl Stream<Item = Result<<E::Page as Page>::Item>> + 'a
    where
        E: Invoke<P>,
        E::Page: OffsetPage + 'a,
        P: Send + Sync + 'a,
    {
        flatten_items(self.pages(endpoint))
    }
}

// ============================================================================
// Continuation Token Pagination
// ============================================================================

/// Continuation token pagination (e.g., the historic announcement endpoints)
///
/// Presents the server's opaque token on the next request and stops once no
/// token is returned. A token that was already sent during this traversal
/// fails with [`Error::CycleDetected`] instead of looping forever.
#[derive(Debug, Clone)]
pub struct TokenPaginator<P> {
    params: P,
}

impl<P: TokenParams> TokenPaginator<P> {
    /// Create a new token paginator starting from the given parameters
    pub fn new(params: P) -> Self {
        Self { params }
    }

    /// Initial state for a traversal
    pub fn initial_state(&self) -> PaginationState {
        PaginationState::with_token(self.params.continuation_token())
    }

    /// Parameters for the first request
    pub fn initial_params(&self) -> P {
        self.params.clone()
    }

    /// Process a response and determine if there's a next page
    pub fn process_response<T: TokenPage>(
        &self,
        page: &T,
        state: &mut PaginationState,
    ) -> Result<NextPage<P>> {
        state.next_page();

        let Some(token) = page.next_token().filter(|token| !token.is_empty()) else {
            debug!(page = state.page, "No continuation token returned");
            return Ok(NextPage::Done);
        };

        if !state.record_token(token) {
            return Err(Error::cycle_detected(token));
        }

        debug!(page = state.page, token, "Following continuation token");
        Ok(NextPage::Continue(
            self.params.with_continuation_token(token),
        ))
    }

    /// Lazily fetch pages, one request per poll
    pub fn pages<'a, E>(self, endpoint: &'a E) -> impl Stream<Item = Result<E::Page>> + 'a
    where
        E: Invoke<P>,
        E::Page: TokenPage,
        P: Send + Sync + 'a,
    {
        let state = self.initial_state();
        let first = self.initial_params();

        stream::try_unfold(
            (self, state, Some(first)),
            move |(paginator, mut state, next)| async move {
                let Some(params) = next else {
                    return Ok(None);
                };
                let page = endpoint.invoke(&params).await?;
                let next = paginator.process_response(&page, &mut state)?.into_params();
                if next.is_none() {
                    info!(pages = state.page, "Token pagination complete");
                }
                Ok::<_, Error>(Some((page, (paginator, state, next))))
            },
        )
    }

    /// Lazily fetch records, requesting a page only when the previous one is drained
    pub fn items<'a, E>(
        self,
        endpoint: &'a E,
    ) -> impl Stream<Item = Result<<E::Page as Page>::Item>> + 'a
    where
        E: Invoke<P>,
        E::Page: TokenPage + 'a,
        P: Send + Sync + 'a,
    {
        flatten_items(self.pages(endpoint))
    }
}
