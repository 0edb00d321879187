//! USAJOBS API client
//!
//! [`UsaJobsClient`] performs single requests against each endpoint and
//! exposes paginated streams of pages and records on top of them.

use crate::config::ClientConfig;
use crate::endpoints::{
    AnnouncementTextItem, AnnouncementTextParams, AnnouncementTextResponse, Endpoint,
    HistoricJoaItem, HistoricJoaParams, HistoricJoaResponse, JobSummary, SearchParams,
    SearchResponse,
};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{Invoke, OffsetPaginator, TokenPaginator};
use async_trait::async_trait;
use futures::Stream;
use tracing::debug;

/// Client for the USAJOBS REST API
#[derive(Debug)]
pub struct UsaJobsClient {
    http: HttpClient,
    config: ClientConfig,
}

impl UsaJobsClient {
    /// Create a client from explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(config.http_config()?)?;
        Ok(Self { http, config })
    }

    /// Create a client configured from `USAJOBS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request for any endpoint
    pub async fn execute<P: Endpoint>(&self, params: &P) -> Result<P::Response> {
        let query = params.to_params();
        debug!(path = P::PATH, params = ?query, "Calling USAJOBS endpoint");
        self.http.request_json(P::METHOD, P::PATH, &query).await
    }

    // ========================================================================
    // Job Search
    // ========================================================================

    /// Fetch a single page of job search results
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
        self.execute(params).await
    }

    /// Lazily fetch every page of job search results
    pub fn search_pages(
        &self,
        params: SearchParams,
    ) -> impl Stream<Item = Result<SearchResponse>> + '_ {
        OffsetPaginator::new(params).pages(self)
    }

    /// Lazily fetch every job matching the search
    pub fn search_jobs(&self, params: SearchParams) -> impl Stream<Item = Result<JobSummary>> + '_ {
        OffsetPaginator::new(params).items(self)
    }

    // ========================================================================
    // Historic JOAs
    // ========================================================================

    /// Fetch a single page of historic announcements
    pub async fn historic_joa(&self, params: &HistoricJoaParams) -> Result<HistoricJoaResponse> {
        self.execute(params).await
    }

    /// Lazily fetch every page of historic announcements
    pub fn historic_joa_pages(
        &self,
        params: HistoricJoaParams,
    ) -> impl Stream<Item = Result<HistoricJoaResponse>> + '_ {
        TokenPaginator::new(params).pages(self)
    }

    /// Lazily fetch every historic announcement
    pub fn historic_joa_items(
        &self,
        params: HistoricJoaParams,
    ) -> impl Stream<Item = Result<HistoricJoaItem>> + '_ {
        TokenPaginator::new(params).items(self)
    }

    // ========================================================================
    // Announcement Text
    // ========================================================================

    /// Fetch a single page of announcement text
    pub async fn announcement_text(
        &self,
        params: &AnnouncementTextParams,
    ) -> Result<AnnouncementTextResponse> {
        self.execute(params).await
    }

    /// Lazily fetch every page of announcement text
    pub fn announcement_text_pages(
        &self,
        params: AnnouncementTextParams,
    ) -> impl Stream<Item = Result<AnnouncementTextResponse>> + '_ {
        TokenPaginator::new(params).pages(self)
    }

    /// Lazily fetch the text of every matching announcement
    pub fn announcement_text_items(
        &self,
        params: AnnouncementTextParams,
    ) -> impl Stream<Item = Result<AnnouncementTextItem>> + '_ {
        TokenPaginator::new(params).items(self)
    }
}

#[async_trait]
impl<P> Invoke<P> for UsaJobsClient
where
    P: Endpoint + Sync,
{
    type Page = P::Response;

    async fn invoke(&self, params: &P) -> Result<P::Response> {
        self.execute(params).await
    }
}
