//! Query writer and serialization trait

use crate::types::StringMap;
use chrono::NaiveDate;
use std::fmt::Display;

/// Separator used for multi-valued parameters
pub const LIST_SEPARATOR: &str = ";";

/// Wire form of a boolean parameter
pub fn format_flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Collects normalized query parameters keyed by their wire name
///
/// Each parameter struct walks its own fields through a writer, so the
/// mapping from Rust field to wire name lives next to the field definition.
#[derive(Debug, Clone, Default)]
pub struct QueryWriter {
    params: StringMap,
}

impl QueryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a string parameter
    pub fn text(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value.to_string());
        }
        self
    }

    /// Write any displayable scalar (integers, enums)
    pub fn value<T: Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value.to_string());
        }
        self
    }

    /// Write a boolean parameter
    pub fn flag(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, format_flag(value).to_string());
        }
        self
    }

    /// Write a calendar date as `YYYY-MM-DD`
    pub fn date(&mut self, key: &str, value: Option<NaiveDate>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value.format("%Y-%m-%d").to_string());
        }
        self
    }

    /// Write a multi-valued parameter
    pub fn list<T: Display>(&mut self, key: &str, values: &[T]) -> &mut Self {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        self.insert(key, joined);
        self
    }

    /// Consume the writer and return the query map
    pub fn finish(self) -> StringMap {
        self.params
    }

    fn insert(&mut self, key: &str, value: String) {
        if value.is_empty() {
            return;
        }
        self.params.insert(key.to_string(), value);
    }
}

/// Types that can be sent as USAJOBS query parameters
pub trait ToQueryParams {
    /// Write every set field into the writer
    fn write_query(&self, writer: &mut QueryWriter);

    /// Serialize into the wire-format query map
    fn to_params(&self) -> StringMap {
        let mut writer = QueryWriter::new();
        self.write_query(&mut writer);
        writer.finish()
    }
}
