//! Continuation-token response envelope shared by the historic endpoints

use crate::pagination::{Page, TokenPage};
use serde::{Deserialize, Serialize};

/// Paging metadata block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingMetadata {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// Paging block: metadata plus a link to the next page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub metadata: Option<PagingMetadata>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Response body of a continuation-token endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse<T> {
    #[serde(default)]
    pub paging: Option<Paging>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for TokenResponse<T> {
    fn default() -> Self {
        Self {
            paging: None,
            data: Vec::new(),
        }
    }
}

impl<T> TokenResponse<T> {
    /// Continuation token for the next page, if paging metadata is present
    pub fn next_token(&self) -> Option<&str> {
        self.paging
            .as_ref()?
            .metadata
            .as_ref()?
            .continuation_token
            .as_deref()
    }

    /// Total number of records across all pages, when reported
    pub fn total_count(&self) -> Option<u64> {
        self.paging.as_ref()?.metadata.as_ref()?.total_count
    }

    /// Link to the next page, when reported
    pub fn next_link(&self) -> Option<&str> {
        self.paging.as_ref()?.next.as_deref()
    }
}

impl<T> Page for TokenResponse<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self.data
    }
}

impl<T> TokenPage for TokenResponse<T> {
    fn next_token(&self) -> Option<&str> {
        TokenResponse::next_token(self)
    }
}
