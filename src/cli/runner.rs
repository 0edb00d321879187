//! CLI runner - executes commands

use crate::cli::commands::{Action, Cli};
use crate::client::UsaJobsClient;
use crate::config::ClientConfig;
use crate::endpoints::{
    AnnouncementTextParams, HistoricJoaParams, HistoricJoaQuery, SearchParams, SearchQuery,
};
use crate::error::{Error, Result, ResultExt};
use futures::{Stream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = UsaJobsClient::new(self.client_config()?)?;
        debug!(action = ?self.cli.action, base_url = %client.config().base_url, "Running command");

        match self.cli.action {
            Action::Search => {
                let params = SearchParams::try_from(self.parse_data::<SearchQuery>()?)?;
                if self.cli.paginate() {
                    self.output_pages(client.search_pages(params)).await
                } else {
                    self.output(&client.search(&params).await?)
                }
            }
            Action::HistoricJoa => {
                let params = HistoricJoaParams::try_from(self.parse_data::<HistoricJoaQuery>()?)?;
                if self.cli.paginate() {
                    self.output_pages(client.historic_joa_pages(params)).await
                } else {
                    self.output(&client.historic_joa(&params).await?)
                }
            }
            Action::AnnouncementText => {
                let params =
                    AnnouncementTextParams::try_from(self.parse_data::<HistoricJoaQuery>()?)?;
                if self.cli.paginate() {
                    self.output_pages(client.announcement_text_pages(params)).await
                } else {
                    self.output(&client.announcement_text(&params).await?)
                }
            }
        }
    }

    /// Environment configuration overridden by command-line flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env();

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(user) = &self.cli.auth_user {
            config.auth_user = Some(user.clone());
        }
        if let Some(key) = &self.cli.auth_key {
            config.auth_key = Some(key.clone());
        }
        if let Some(seconds) = self.cli.timeout {
            let timeout = Duration::try_from_secs_f64(seconds)
                .map_err(|e| Error::config(format!("Invalid timeout '{seconds}': {e}")))?;
            config.timeout = Some(timeout);
        }
        if self.cli.no_ssl_verify {
            config.ssl_verify = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse `--data` into raw endpoint parameters
    fn parse_data<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match &self.cli.data {
            Some(data) => serde_json::from_str(data).context("Invalid --data JSON"),
            None => Ok(T::default()),
        }
    }

    /// Print every page of a paginated response
    async fn output_pages<T, S>(&self, pages: S) -> Result<()>
    where
        T: Serialize,
        S: Stream<Item = Result<T>>,
    {
        let limit = self.cli.max_pages.unwrap_or(usize::MAX);
        let pages = pages.take(limit);
        futures::pin_mut!(pages);

        let mut count = 0usize;
        while let Some(page) = pages.try_next().await? {
            self.output(&page)?;
            count += 1;
        }
        info!(pages = count, "Finished printing pages");
        Ok(())
    }

    /// Output a value as JSON
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = if self.cli.prettify {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        writeln!(std::io::stdout().lock(), "{json}")?;
        Ok(())
    }
}
