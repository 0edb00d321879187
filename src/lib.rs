// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # USAJOBS API
//!
//! A typed client for the public USAJOBS REST API.
//!
//! ## Features
//!
//! - **Job Search**: Current announcements with offset pagination
//! - **Historic JOAs**: Past announcements with continuation tokens
//! - **Announcement Text**: Full text of historic announcements
//! - **Validated Parameters**: Constraint violations surface before any request
//! - **Lazy Streams**: Pages and records are fetched one request at a time
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use usajobs_api::{ClientConfig, SearchQuery, UsaJobsClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = UsaJobsClient::new(
//!         ClientConfig::builder()
//!             .auth_user("someone@example.com")
//!             .auth_key("...")
//!             .build(),
//!     )?;
//!
//!     let params = SearchQuery {
//!         keyword: Some("nurse".into()),
//!         ..Default::default()
//!     }
//!     .validate()?;
//!
//!     let jobs = client.search_jobs(params);
//!     futures::pin_mut!(jobs);
//!     while let Some(job) = jobs.try_next().await? {
//!         println!("{} {}", job.id, job.position_title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UsaJobsClient                           │
//! │  search()   historic_joa()   announcement_text()   *_pages()    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬──────────────────────┐
//! │    Params    │        Pagination         │       Endpoints      │
//! ├──────────────┼───────────────────────────┼──────────────────────┤
//! │ QueryWriter  │ OffsetPaginator           │ SearchResponse       │
//! │ Validation   │ TokenPaginator            │ HistoricJoaResponse  │
//! │              │ flatten_items             │ AnnouncementText     │
//! └──────────────┴───────────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Query parameter serialization
pub mod params;

/// Pagination strategies
pub mod pagination;

/// Endpoint parameters and response models
pub mod endpoints;

/// Single-shot HTTP client
pub mod http;

/// Client configuration
pub mod config;

/// USAJOBS API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use client::UsaJobsClient;
pub use config::ClientConfig;
pub use endpoints::{
    AnnouncementTextItem, AnnouncementTextParams, AnnouncementTextResponse, Endpoint,
    HistoricJoaItem, HistoricJoaParams, HistoricJoaQuery, HistoricJoaResponse, JobSummary,
    SearchParams, SearchQuery, SearchResponse,
};
pub use pagination::{flatten_items, Invoke, OffsetPaginator, TokenPaginator};
pub use params::{QueryWriter, ToQueryParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
