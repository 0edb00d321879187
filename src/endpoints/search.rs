//! Job Search endpoint parameters
//!
//! See <https://developer.usajobs.gov/api-reference/get-api-search>.

use super::jobs::SearchResponse;
use super::Endpoint;
use crate::error::{Error, Result};
use crate::pagination::OffsetParams;
use crate::params::{QueryWriter, ToQueryParams};
use crate::types::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Upper bound the API accepts for `ResultsPerPage`
pub const MAX_RESULTS_PER_PAGE: u32 = 500;

/// Upper bound the API accepts for `DatePosted`
pub const MAX_DATE_POSTED_DAYS: u32 = 60;

// ============================================================================
// Enumerated parameter values
// ============================================================================

/// Sort the search by the specified field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    OpenDate,
    CloseDate,
    OrganizationName,
    JobTitle,
    PositionTitle,
    OpeningDate,
    ClosingDate,
    HoName,
    SalaryMin,
    Location,
    Department,
    Title,
    Agency,
    Salary,
}

impl SortField {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenDate => "opendate",
            Self::CloseDate => "closedate",
            Self::OrganizationName => "organizationname",
            Self::JobTitle => "jobtitle",
            Self::PositionTitle => "positiontitle",
            Self::OpeningDate => "openingdate",
            Self::ClosingDate => "closingdate",
            Self::HoName => "honame",
            Self::SalaryMin => "salarymin",
            Self::Location => "location",
            Self::Department => "department",
            Self::Title => "title",
            Self::Agency => "agency",
            Self::Salary => "salary",
        }
    }
}

/// Sort direction applied to [`SortField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "Asc",
            Self::Desc => "Desc",
        }
    }
}

/// Candidate designation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WhoMayApply {
    All,
    Public,
    Status,
}

impl WhoMayApply {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Public => "Public",
            Self::Status => "Status",
        }
    }
}

/// Amount of detail returned for each result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fields {
    /// Job summary only
    Min,
    Full,
}

impl Fields {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Full => "Full",
        }
    }
}

/// Hiring path filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiringPath {
    Public,
    Vet,
    #[serde(rename = "nguard")]
    NGuard,
    Disability,
    Native,
    #[serde(rename = "mspouse")]
    MSpouse,
    Student,
    Ses,
    Peace,
    Overseas,
    FedInternalSearch,
    Graduates,
    FedExcepted,
    FedCompetitive,
    FedTransition,
    Land,
    SpecialAuthorities,
}

impl HiringPath {
    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Vet => "vet",
            Self::NGuard => "nguard",
            Self::Disability => "disability",
            Self::Native => "native",
            Self::MSpouse => "mspouse",
            Self::Student => "student",
            Self::Ses => "ses",
            Self::Peace => "peace",
            Self::Overseas => "overseas",
            Self::FedInternalSearch => "fed-internal-search",
            Self::Graduates => "graduates",
            Self::FedExcepted => "fed-excepted",
            Self::FedCompetitive => "fed-competitive",
            Self::FedTransition => "fed-transition",
            Self::Land => "land",
            Self::SpecialAuthorities => "special-authorities",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(SortField, SortDirection, WhoMayApply, Fields, HiringPath);

// ============================================================================
// Query
// ============================================================================

/// Unvalidated search filters
///
/// Field names are the idiomatic snake_case names; the wire names are applied
/// when serializing. Call [`SearchQuery::validate`] (or deserialize a
/// [`SearchParams`] directly) to obtain parameters that can be sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchQuery {
    pub keyword: Option<String>,
    pub position_title: Option<String>,

    pub remuneration_min: Option<u32>,
    pub remuneration_max: Option<u32>,
    pub pay_grade_high: Option<String>,
    pub pay_grade_low: Option<String>,

    pub job_category_codes: Vec<String>,
    pub position_schedule_type_codes: Vec<String>,
    pub position_offering_type_codes: Vec<String>,

    pub organization: Vec<String>,
    pub location_names: Vec<String>,
    /// Miles around each location; requires `location_names`
    pub radius: Option<u32>,

    pub travel_percentage: Vec<String>,
    pub relocation: Option<bool>,
    pub security_clearance_required: Vec<String>,
    pub position_sensitivity: Vec<String>,

    pub who_may_apply: Option<WhoMayApply>,
    pub hiring_paths: Vec<HiringPath>,

    pub salary_bucket: Vec<String>,
    pub grade_bucket: Vec<String>,

    pub supervisory_status: Option<String>,
    /// Only jobs posted within this many days (0-60)
    pub date_posted_days: Option<u32>,
    pub job_grade_codes: Vec<String>,
    pub mission_critical_tags: Vec<String>,

    pub sort_field: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size (1-500)
    pub results_per_page: Option<u32>,
    pub fields: Option<Fields>,

    pub remote_indicator: Option<bool>,
}

impl SearchQuery {
    /// Check field ranges and cross-field constraints
    pub fn validate(self) -> Result<SearchParams> {
        if let Some(radius) = self.radius {
            if radius == 0 {
                return Err(Error::validation("Radius", "must be greater than 0"));
            }
            if self.location_names.is_empty() {
                return Err(Error::validation(
                    "Radius",
                    "requires at least one LocationName",
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.remuneration_min, self.remuneration_max) {
            if max < min {
                return Err(Error::validation(
                    "RemunerationMaximumAmount",
                    "must be >= RemunerationMinimumAmount",
                ));
            }
        }

        if self.page == Some(0) {
            return Err(Error::validation("Page", "must be >= 1"));
        }

        if let Some(size) = self.results_per_page {
            if !(1..=MAX_RESULTS_PER_PAGE).contains(&size) {
                return Err(Error::validation(
                    "ResultsPerPage",
                    format!("must be between 1 and {MAX_RESULTS_PER_PAGE}"),
                ));
            }
        }

        if let Some(days) = self.date_posted_days {
            if days > MAX_DATE_POSTED_DAYS {
                return Err(Error::validation(
                    "DatePosted",
                    format!("must be between 0 and {MAX_DATE_POSTED_DAYS}"),
                ));
            }
        }

        Ok(SearchParams(self))
    }
}

// ============================================================================
// Params
// ============================================================================

/// Validated, immutable Job Search parameters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "SearchQuery")]
pub struct SearchParams(SearchQuery);

impl SearchParams {
    /// Validate a query
    pub fn new(query: SearchQuery) -> Result<Self> {
        query.validate()
    }

    /// Unwrap into the editable query
    pub fn into_query(self) -> SearchQuery {
        self.0
    }
}

impl Deref for SearchParams {
    type Target = SearchQuery;

    fn deref(&self) -> &SearchQuery {
        &self.0
    }
}

impl TryFrom<SearchQuery> for SearchParams {
    type Error = Error;

    fn try_from(query: SearchQuery) -> Result<Self> {
        query.validate()
    }
}

impl ToQueryParams for SearchParams {
    fn write_query(&self, writer: &mut QueryWriter) {
        let q = &self.0;
        writer
            .text("Keyword", q.keyword.as_deref())
            .text("PositionTitle", q.position_title.as_deref())
            .value("RemunerationMinimumAmount", q.remuneration_min)
            .value("RemunerationMaximumAmount", q.remuneration_max)
            .text("PayGradeHigh", q.pay_grade_high.as_deref())
            .text("PayGradeLow", q.pay_grade_low.as_deref())
            .list("JobCategoryCode", &q.job_category_codes)
            .list("PositionScheduleTypeCode", &q.position_schedule_type_codes)
            .list("PositionOfferingTypeCode", &q.position_offering_type_codes)
            .list("Organization", &q.organization)
            .list("LocationName", &q.location_names)
            .value("Radius", q.radius)
            .list("TravelPercentage", &q.travel_percentage)
            .flag("RelocationIndicator", q.relocation)
            .list("SecurityClearanceRequired", &q.security_clearance_required)
            .list("PositionSensitivity", &q.position_sensitivity)
            .value("WhoMayApply", q.who_may_apply)
            .list("HiringPath", &q.hiring_paths)
            .list("SalaryBucket", &q.salary_bucket)
            .list("GradeBucket", &q.grade_bucket)
            .text("SupervisoryStatus", q.supervisory_status.as_deref())
            .value("DatePosted", q.date_posted_days)
            .list("JobGradeCode", &q.job_grade_codes)
            .list("MissionCriticalTags", &q.mission_critical_tags)
            .value("SortField", q.sort_field)
            .value("SortDirection", q.sort_direction)
            .value("Page", q.page)
            .value("ResultsPerPage", q.results_per_page)
            .value("Fields", q.fields)
            .flag("RemoteIndicator", q.remote_indicator);
    }
}

impl OffsetParams for SearchParams {
    fn page(&self) -> Option<u32> {
        self.0.page
    }

    fn results_per_page(&self) -> Option<u32> {
        self.0.results_per_page
    }

    fn with_paging(&self, page: u32, results_per_page: Option<u32>) -> Self {
        let mut query = self.0.clone();
        query.page = Some(page);
        query.results_per_page = results_per_page;
        Self(query)
    }
}

impl Endpoint for SearchParams {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/api/search";
    type Response = SearchResponse;
}
