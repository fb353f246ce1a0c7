//! Error types for findata.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for findata operations.
pub type Result<T> = std::result::Result<T, FindataError>;

/// Errors that abort an adapter call.
///
/// Element-level faults (one array entry lacking a field) never surface
/// here: they are absorbed by the extraction loop and only shorten the
/// returned sequence.
#[derive(Error, Debug)]
pub enum FindataError {
    /// The transport buffer could not grow to hold the response.
    #[error("Allocation failed: could not reserve {requested} bytes for response body")]
    Allocation {
        /// Number of additional bytes that were requested.
        requested: usize,
    },

    /// Network, TLS or deadline failure.
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("JSON parse error at line {line}, column {column}: {message}")]
    Parse {
        /// Line of the first invalid byte (1-based).
        line: usize,
        /// Column of the first invalid byte (1-based).
        column: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// A node required by the response shape is absent or mistyped.
    #[error("Missing or malformed node: {path}")]
    StructuralMissing {
        /// Dotted path of the missing node.
        path: String,
    },

    /// The provider answered with no body at all.
    #[error("Empty response body")]
    EmptyBody,

    /// A label has no known provider code.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// HTML scraping failed.
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// Invalid date or year range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
}

impl FindataError {
    /// Builds a [`FindataError::StructuralMissing`] for the given path.
    #[must_use]
    pub fn missing(path: impl Into<String>) -> Self {
        Self::StructuralMissing { path: path.into() }
    }
}

/// Error for labels that cannot be mapped to a provider code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No entry for the label in the given table.
    #[error("Unknown {kind}: {label}")]
    Unknown {
        /// Which table was consulted (e.g. "country", "currency").
        kind: &'static str,
        /// The label that failed to map.
        label: String,
    },
}

impl MappingError {
    /// Creates an unknown-label error.
    #[must_use]
    pub fn unknown(kind: &'static str, label: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            label: label.into(),
        }
    }
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// Start year is after end year.
    #[error("Invalid year range: {start} > {end}")]
    InvalidYears {
        /// The start year.
        start: i32,
        /// The end year.
        end: i32,
    },

    /// A year string is not a four digit year.
    #[error("Invalid year: {0:?}")]
    InvalidYear(String),
}

/// Error for date labels that fail validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The label is empty.
    #[error("Date label is empty")]
    Empty,

    /// The label exceeds the maximum length.
    #[error("Date label {label:?} is {len} characters long (max {max})")]
    TooLong {
        /// The rejected label.
        label: String,
        /// Its length in bytes.
        len: usize,
        /// The maximum accepted length.
        max: usize,
    },
}
