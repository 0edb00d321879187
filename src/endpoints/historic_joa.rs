//! Historic Job Opportunity Announcements endpoint
//!
//! See <https://developer.usajobs.gov/api-reference/get-api-historicjoa>.

use super::de::{lenient_f64, one_or_many, yes_no};
use super::paging::TokenResponse;
use super::Endpoint;
use crate::error::{Error, Result};
use crate::pagination::TokenParams;
use crate::params::{QueryWriter, ToQueryParams};
use crate::types::Method;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Wire name of the continuation token parameter
pub(crate) const CONTINUATION_TOKEN_PARAM: &str = "continuationtoken";

// ============================================================================
// Query
// ============================================================================

/// Unvalidated historic announcement filters
///
/// Code filters accept either a single string or a list when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoricJoaQuery {
    #[serde(deserialize_with = "one_or_many")]
    pub hiring_agency_codes: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub hiring_department_codes: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub position_series: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub announcement_numbers: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub usajobs_control_numbers: Vec<String>,
    pub start_position_open_date: Option<NaiveDate>,
    pub end_position_open_date: Option<NaiveDate>,
    pub start_position_close_date: Option<NaiveDate>,
    pub end_position_close_date: Option<NaiveDate>,
    /// Token returned by a previous page
    pub continuation_token: Option<String>,
}

impl HistoricJoaQuery {
    /// Check that every date range is ordered
    pub fn validate(self) -> Result<HistoricJoaParams> {
        check_range(
            "EndPositionOpenDate",
            self.start_position_open_date,
            self.end_position_open_date,
        )?;
        check_range(
            "EndPositionCloseDate",
            self.start_position_close_date,
            self.end_position_close_date,
        )?;
        Ok(HistoricJoaParams(self))
    }
}

fn check_range(field: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(Error::validation(
            field,
            format!("{end} is before the range start {start}"),
        )),
        _ => Ok(()),
    }
}

// ============================================================================
// Params
// ============================================================================

/// Validated, immutable Historic JOA parameters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "HistoricJoaQuery")]
pub struct HistoricJoaParams(HistoricJoaQuery);

impl HistoricJoaParams {
    /// Validate a query
    pub fn new(query: HistoricJoaQuery) -> Result<Self> {
        query.validate()
    }

    /// Unwrap into the editable query
    pub fn into_query(self) -> HistoricJoaQuery {
        self.0
    }
}

impl Deref for HistoricJoaParams {
    type Target = HistoricJoaQuery;

    fn deref(&self) -> &HistoricJoaQuery {
        &self.0
    }
}

impl TryFrom<HistoricJoaQuery> for HistoricJoaParams {
    type Error = Error;

    fn try_from(query: HistoricJoaQuery) -> Result<Self> {
        query.validate()
    }
}

impl ToQueryParams for HistoricJoaParams {
    fn write_query(&self, writer: &mut QueryWriter) {
        let q = &self.0;
        writer
            .list("HiringAgencyCodes", &q.hiring_agency_codes)
            .list("HiringDepartmentCodes", &q.hiring_department_codes)
            .list("PositionSeries", &q.position_series)
            .list("AnnouncementNumbers", &q.announcement_numbers)
            .list("USAJOBSControlNumbers", &q.usajobs_control_numbers)
            .date("StartPositionOpenDate", q.start_position_open_date)
            .date("EndPositionOpenDate", q.end_position_open_date)
            .date("StartPositionCloseDate", q.start_position_close_date)
            .date("EndPositionCloseDate", q.end_position_close_date)
            .text(CONTINUATION_TOKEN_PARAM, q.continuation_token.as_deref());
    }
}

impl TokenParams for HistoricJoaParams {
    fn continuation_token(&self) -> Option<&str> {
        self.0.continuation_token.as_deref()
    }

    fn with_continuation_token(&self, token: &str) -> Self {
        let mut query = self.0.clone();
        query.continuation_token = Some(token.to_string());
        Self(query)
    }
}

impl Endpoint for HistoricJoaParams {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/api/historicjoa";
    type Response = HistoricJoaResponse;
}

// ============================================================================
// Response
// ============================================================================

/// Hiring path entry of a historic announcement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricHiringPath {
    #[serde(default)]
    pub hiring_path: Option<String>,
}

/// Job series entry of a historic announcement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricJobCategory {
    #[serde(default)]
    pub series: Option<String>,
}

/// Location entry of a historic announcement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricPositionLocation {
    #[serde(default)]
    pub position_location_city: Option<String>,
    #[serde(default)]
    pub position_location_state: Option<String>,
    #[serde(default)]
    pub position_location_country: Option<String>,
}

/// One historic job opportunity announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricJoaItem {
    pub usajobs_control_number: u64,
    #[serde(default)]
    pub hiring_agency_code: Option<String>,
    #[serde(default)]
    pub hiring_agency_name: Option<String>,
    #[serde(default)]
    pub hiring_department_code: Option<String>,
    #[serde(default)]
    pub hiring_department_name: Option<String>,
    #[serde(default)]
    pub agency_level: Option<u32>,
    #[serde(default)]
    pub agency_level_sort: Option<String>,
    #[serde(default)]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub work_schedule: Option<String>,
    #[serde(default)]
    pub pay_scale: Option<String>,
    #[serde(default)]
    pub salary_type: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub travel_requirement: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    pub telework_eligible: Option<bool>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    pub security_clearance_required: Option<bool>,
    #[serde(default)]
    pub security_clearance: Option<String>,
    #[serde(default)]
    pub who_may_apply: Option<String>,
    #[serde(default)]
    pub announcement_closing_type_code: Option<String>,
    #[serde(default)]
    pub announcement_closing_type_description: Option<String>,
    #[serde(default)]
    pub position_open_date: Option<String>,
    #[serde(default)]
    pub position_close_date: Option<String>,
    #[serde(default)]
    pub position_expire_date: Option<String>,
    #[serde(default)]
    pub announcement_number: Option<String>,
    #[serde(default)]
    pub hiring_subelement_name: Option<String>,
    #[serde(default)]
    pub position_title: Option<String>,
    #[serde(default)]
    pub minimum_grade: Option<String>,
    #[serde(default)]
    pub maximum_grade: Option<String>,
    #[serde(default)]
    pub promotion_potential: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub minimum_salary: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub maximum_salary: Option<f64>,
    #[serde(default, deserialize_with = "yes_no")]
    pub supervisory_status: Option<bool>,
    #[serde(default, deserialize_with = "yes_no")]
    pub drug_test_required: Option<bool>,
    #[serde(default, deserialize_with = "yes_no")]
    pub relocation_expenses_reimbursed: Option<bool>,
    /// Free text on some postings (e.g. `"Few"`), so kept as a string
    #[serde(default)]
    pub total_openings: Option<String>,
    #[serde(default, deserialize_with = "yes_no")]
    pub disable_apply_online: Option<bool>,
    #[serde(default)]
    pub position_opening_status: Option<String>,
    #[serde(default)]
    pub hiring_paths: Vec<HistoricHiringPath>,
    #[serde(default)]
    pub job_categories: Vec<HistoricJobCategory>,
    #[serde(default)]
    pub position_locations: Vec<HistoricPositionLocation>,
}

/// Historic JOA response body
pub type HistoricJoaResponse = TokenResponse<HistoricJoaItem>;
