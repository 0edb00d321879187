//! Pagination module
//!
//! Supports: Offset (page number + page size), Continuation Token
//!
//! # Overview
//!
//! Paginators drive an [`Invoke`] implementation one page at a time and turn
//! the responses into a lazy `Stream` of pages. Each strategy inspects the
//! page it just received to decide whether another request is needed and
//! which parameters it should carry. [`flatten_items`] turns a page stream
//! into a stream of the records inside those pages.

mod items;
mod strategies;
mod types;

pub use items::flatten_items;
pub use strategies::{OffsetPaginator, TokenPaginator};
pub use types::{
    Invoke, NextPage, OffsetPage, OffsetParams, Page, PaginationState, TokenPage, TokenParams,
};
