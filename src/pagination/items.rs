//! Item flattening over page streams

use super::types::Page;
use crate::error::Result;
use futures::stream::{self, Stream, TryStreamExt};

/// Flatten a stream of pages into a stream of their records
///
/// Records are yielded in page order. The next page is only polled once every
/// record of the current page has been consumed, and the first error ends the
/// stream.
pub fn flatten_items<S, T>(pages: S) -> impl Stream<Item = Result<T::Item>>
where
    S: Stream<Item = Result<T>>,
    T: Page,
{
    pages
        .map_ok(|page| stream::iter(page.into_items().into_iter().map(Ok)))
        .try_flatten()
}
