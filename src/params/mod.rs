//! Query parameter serialization
//!
//! Converts typed parameter structs into the flat `key -> value` query map
//! the USAJOBS API expects.
//!
//! # Normalization rules
//!
//! - absent values and empty strings are omitted
//! - booleans become `"True"` / `"False"`
//! - lists are joined with `;`, empty lists are omitted
//! - enums use their wire value, dates use `YYYY-MM-DD`

mod writer;

pub use writer::{format_flag, QueryWriter, ToQueryParams, LIST_SEPARATOR};
