//! Endpoint definitions
//!
//! Declarative descriptions of the USAJOBS endpoints: query parameters,
//! response shapes and request metadata.
//!
//! | Endpoint | Path | Pagination |
//! |----------|------|------------|
//! | Job Search | `/api/search` | page number |
//! | Historic JOAs | `/api/historicjoa` | continuation token |
//! | Announcement Text | `/api/historicjoa/announcementtext` | continuation token |

mod announcement_text;
mod de;
mod historic_joa;
mod jobs;
mod paging;
mod search;

pub use announcement_text::{AnnouncementTextItem, AnnouncementTextParams, AnnouncementTextResponse};
pub use historic_joa::{
    HistoricHiringPath, HistoricJoaItem, HistoricJoaParams, HistoricJoaQuery,
    HistoricJoaResponse, HistoricJobCategory, HistoricPositionLocation,
};
pub use jobs::{
    JobCategory, JobGrade, JobLocation, JobSummary, PositionOfferingType, PositionRemuneration,
    PositionSchedule, SearchResponse, SearchResult, UserArea, UserAreaDetails, WhoMayApplyInfo,
};
pub use paging::{Paging, PagingMetadata, TokenResponse};
pub use search::{
    Fields, HiringPath, SearchParams, SearchQuery, SortDirection, SortField, WhoMayApply,
};

use crate::params::ToQueryParams;
use crate::types::Method;
use serde::de::DeserializeOwned;

/// Request metadata for one endpoint, implemented on its parameter type
pub trait Endpoint: ToQueryParams {
    /// HTTP method
    const METHOD: Method;

    /// Path relative to the API base URL
    const PATH: &'static str;

    /// Parsed response body
    type Response: DeserializeOwned + Send;
}

#[cfg(test)]
mod tests;
