//! Historic announcement text endpoint
//!
//! Accepts the same filters as the Historic JOA endpoint and returns the
//! long-form text sections of each announcement.

use super::historic_joa::{HistoricJoaParams, HistoricJoaQuery};
use super::paging::TokenResponse;
use super::Endpoint;
use crate::error::{Error, Result};
use crate::pagination::TokenParams;
use crate::params::{QueryWriter, ToQueryParams};
use crate::types::Method;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Validated announcement text parameters
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "HistoricJoaQuery")]
pub struct AnnouncementTextParams(HistoricJoaParams);

impl AnnouncementTextParams {
    /// Validate a query
    pub fn new(query: HistoricJoaQuery) -> Result<Self> {
        query.validate().map(Self)
    }
}

impl From<HistoricJoaParams> for AnnouncementTextParams {
    fn from(params: HistoricJoaParams) -> Self {
        Self(params)
    }
}

impl TryFrom<HistoricJoaQuery> for AnnouncementTextParams {
    type Error = Error;

    fn try_from(query: HistoricJoaQuery) -> Result<Self> {
        Self::new(query)
    }
}

impl Deref for AnnouncementTextParams {
    type Target = HistoricJoaQuery;

    fn deref(&self) -> &HistoricJoaQuery {
        &self.0
    }
}

impl ToQueryParams for AnnouncementTextParams {
    fn write_query(&self, writer: &mut QueryWriter) {
        self.0.write_query(writer);
    }
}

impl TokenParams for AnnouncementTextParams {
    fn continuation_token(&self) -> Option<&str> {
        self.0.continuation_token()
    }

    fn with_continuation_token(&self, token: &str) -> Self {
        Self(self.0.with_continuation_token(token))
    }
}

impl Endpoint for AnnouncementTextParams {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/api/historicjoa/announcementtext";
    type Response = AnnouncementTextResponse;
}

/// Text sections of one historic announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementTextItem {
    pub usajobs_control_number: u64,
    #[serde(default)]
    pub announcement_number: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub hiring_path_explanation: Option<String>,
    #[serde(default)]
    pub duties: Option<String>,
    #[serde(default)]
    pub major_duties_list: Option<String>,
    #[serde(default)]
    pub requirements_conditions_of_employment: Option<String>,
    #[serde(default)]
    pub requirements_qualifications: Option<String>,
    #[serde(default)]
    pub requirements_education: Option<String>,
    #[serde(default)]
    pub required_standard_documents: Option<String>,
    #[serde(default)]
    pub required_documents: Option<String>,
    #[serde(default)]
    pub how_to_apply: Option<String>,
    #[serde(default)]
    pub evaluations: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub other_information: Option<String>,
}

/// Announcement text response body
pub type AnnouncementTextResponse = TokenResponse<AnnouncementTextItem>;
