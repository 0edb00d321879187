//! HTTP client module
//!
//! Provides the transport used by [`crate::UsaJobsClient`].
//!
//! # Features
//!
//! - **Base URL handling**: relative endpoint paths are joined onto the API root
//! - **Default headers**: credentials are attached to every request
//! - **Status mapping**: non-2xx responses become [`crate::Error::HttpStatus`]

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
