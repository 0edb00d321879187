//! Job Search response models

use super::de::lenient_f64;
use crate::pagination::{OffsetPage, Page};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Key some responses use to wrap the job fields of a result item
const DESCRIPTOR_KEY: &str = "MatchedObjectDescriptor";

/// Job series classification associated with a posting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCategory {
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Job grade (e.g. GS) tied to the posting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobGrade {
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "CurrentGrade", default)]
    pub current_grade: Option<String>,
}

/// Work schedule for the position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSchedule {
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Appointment type (e.g. permanent, term)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionOfferingType {
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Salary range entry for the position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionRemuneration {
    #[serde(rename = "MinimumRange", default, deserialize_with = "lenient_f64")]
    pub minimum: Option<f64>,
    #[serde(rename = "MaximumRange", default, deserialize_with = "lenient_f64")]
    pub maximum: Option<f64>,
    #[serde(rename = "RateIntervalCode", default)]
    pub rate_interval_code: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

/// Structured job location entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobLocation {
    #[serde(rename = "LocationName", default)]
    pub name: Option<String>,
    #[serde(rename = "LocationCode", default)]
    pub code: Option<String>,
    #[serde(rename = "CountryCode", default)]
    pub country_code: Option<String>,
    #[serde(rename = "CountrySubDivisionCode", default)]
    pub state_code: Option<String>,
    #[serde(rename = "CityName", default)]
    pub city_name: Option<String>,
    #[serde(rename = "Latitude", default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

/// Structured `WhoMayApply` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoMayApplyInfo {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
}

/// Metadata stored under `UserArea.Details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAreaDetails {
    #[serde(rename = "JobSummary", default)]
    pub job_summary: Option<String>,
    #[serde(rename = "HiringPath", default)]
    pub hiring_path: Option<String>,
    #[serde(rename = "WhoMayApply", default)]
    pub who_may_apply: Option<WhoMayApplyInfo>,
}

/// Wrapper for additional USAJOBS metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserArea {
    #[serde(rename = "Details", default)]
    pub details: Option<UserAreaDetails>,
}

/// Normalized representation of a search result item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(rename = "MatchedObjectId")]
    pub id: String,
    #[serde(rename = "PositionID", default)]
    pub position_id: Option<String>,
    #[serde(rename = "PositionTitle")]
    pub position_title: String,
    #[serde(rename = "PositionURI", default)]
    pub position_uri: Option<String>,
    /// URIs to apply for the job offering
    #[serde(rename = "ApplyURI", default)]
    pub apply_uri: Vec<String>,
    #[serde(rename = "OrganizationName", default)]
    pub organization_name: Option<String>,
    #[serde(rename = "DepartmentName", default)]
    pub department_name: Option<String>,
    #[serde(rename = "PositionLocationDisplay", default)]
    pub locations_display: Option<String>,
    #[serde(rename = "PositionLocation", default)]
    pub locations: Vec<JobLocation>,
    #[serde(rename = "JobCategory", default)]
    pub job_categories: Vec<JobCategory>,
    #[serde(rename = "JobGrade", default)]
    pub job_grades: Vec<JobGrade>,
    #[serde(rename = "PositionSchedule", default)]
    pub position_schedules: Vec<PositionSchedule>,
    #[serde(rename = "PositionOfferingType", default)]
    pub position_offerings: Vec<PositionOfferingType>,
    #[serde(rename = "UserArea", default)]
    pub user_area: Option<UserArea>,
    #[serde(rename = "QualificationSummary", default)]
    pub qualification_summary: Option<String>,
    #[serde(rename = "MinimumRange", default, deserialize_with = "lenient_f64")]
    pub min_salary: Option<f64>,
    #[serde(rename = "MaximumRange", default, deserialize_with = "lenient_f64")]
    pub max_salary: Option<f64>,
    #[serde(rename = "PositionRemuneration", default)]
    pub position_remuneration: Vec<PositionRemuneration>,
    #[serde(rename = "PublicationStartDate", default)]
    pub publication_start_date: Option<String>,
    #[serde(rename = "ApplicationCloseDate", default)]
    pub application_close_date: Option<String>,
}

impl JobSummary {
    fn details(&self) -> Option<&UserAreaDetails> {
        self.user_area.as_ref()?.details.as_ref()
    }

    /// Most descriptive summary available for the job
    pub fn summary(&self) -> Option<&str> {
        self.details()
            .and_then(|details| details.job_summary.as_deref())
            .filter(|summary| !summary.is_empty())
            .or(self.qualification_summary.as_deref())
    }

    /// Salary range, preferring the remuneration entries over the flat fields
    pub fn salary_range(&self) -> (Option<f64>, Option<f64>) {
        let min = self
            .position_remuneration
            .iter()
            .filter_map(|r| r.minimum)
            .reduce(f64::min);
        let max = self
            .position_remuneration
            .iter()
            .filter_map(|r| r.maximum)
            .reduce(f64::max);

        if min.is_some() || max.is_some() {
            (min, max)
        } else {
            (self.min_salary, self.max_salary)
        }
    }

    /// Hiring path codes listed in the user area
    pub fn hiring_paths(&self) -> Vec<String> {
        self.details()
            .and_then(|details| details.hiring_path.as_deref())
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|path| !path.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Items on this page
    #[serde(rename = "SearchResultCount", default)]
    pub result_count: Option<u64>,
    /// Items across all pages
    #[serde(rename = "SearchResultCountAll", default)]
    pub result_total: Option<u64>,
    /// Raw result items, parsed on demand by [`SearchResult::jobs`]
    #[serde(rename = "SearchResultItems", default)]
    pub items: Vec<Value>,
}

impl SearchResult {
    /// Parse the result items, skipping malformed payloads
    pub fn jobs(&self) -> Vec<JobSummary> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match parse_job(item) {
                Ok(job) => Some(job),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed search result item");
                    None
                }
            })
            .collect()
    }

    /// Items on this page, as reported by the server
    pub fn item_count(&self) -> usize {
        self.result_count
            .map_or(self.items.len(), |count| count as usize)
    }
}

/// Parse one result item, unwrapping its descriptor when present
fn parse_job(item: &Value) -> serde_json::Result<JobSummary> {
    let descriptor = item
        .get(DESCRIPTOR_KEY)
        .filter(|d| d.as_object().is_some_and(|fields| !fields.is_empty()))
        .unwrap_or(item);
    JobSummary::deserialize(descriptor)
}

/// Job Search response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "LanguageCode", default)]
    pub language: Option<String>,
    /// Parameters echoed back by the server
    #[serde(rename = "SearchParameters", default)]
    pub search_parameters: Option<Value>,
    #[serde(rename = "SearchResult", default)]
    pub search_result: Option<SearchResult>,
}

impl SearchResponse {
    /// Parsed jobs on this page
    pub fn jobs(&self) -> Vec<JobSummary> {
        self.search_result
            .as_ref()
            .map(SearchResult::jobs)
            .unwrap_or_default()
    }
}

impl Page for SearchResponse {
    type Item = JobSummary;

    fn into_items(self) -> Vec<JobSummary> {
        self.jobs()
    }
}

impl OffsetPage for SearchResponse {
    fn item_count(&self) -> usize {
        self.search_result
            .as_ref()
            .map_or(0, SearchResult::item_count)
    }

    fn total_count(&self) -> Option<u64> {
        self.search_result.as_ref()?.result_total
    }
}
