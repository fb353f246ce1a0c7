//! Defensive navigation of provider JSON payloads.
//!
//! Two failure scopes exist. Structural nodes (the results array, the
//! observation list) are looked up with [`node_at`] and [`array_at`], and a
//! miss fails the whole call with [`FindataError::StructuralMissing`].
//! Per-element fields are read with the `field_*` helpers, and a miss is an
//! [`ElementError`] that [`collect_elements`] logs before skipping that
//! element.

use chrono::NaiveDate;
use findata_types::{DateLabel, FindataError, LabelError, Result, parse_lenient_f64};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// A fault confined to one array element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// The element is not a JSON object.
    #[error("element is not an object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing field {0:?}")]
    Missing(String),

    /// A field has the wrong JSON type.
    #[error("field {field:?} is not a {expected}")]
    Mistyped {
        /// Field name.
        field: String,
        /// Expected JSON type.
        expected: &'static str,
    },

    /// A date field does not hold a `YYYY-MM-DD` date.
    #[error("field {field:?} holds invalid date {value:?}")]
    InvalidDate {
        /// Field name.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A label field fails length validation.
    #[error("invalid label: {0}")]
    Label(#[from] LabelError),
}

/// A record that can be projected from one array element.
pub trait FromElement: Sized {
    /// Reads the record's fields from the element.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if any required field is absent or
    /// mistyped.
    fn from_element(element: &Value) -> std::result::Result<Self, ElementError>;
}

/// Parses a complete response body.
///
/// # Errors
///
/// Returns [`FindataError::Parse`] with the parser's position. The raw body
/// is logged at debug level for diagnostics.
pub fn parse_body(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(line = e.line(), column = e.column(), error = %e, "Failed to parse JSON response");
        debug!(body = %String::from_utf8_lossy(body), "Raw response body");
        FindataError::Parse {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    })
}

/// Follows object keys from `root`.
///
/// # Errors
///
/// Returns [`FindataError::StructuralMissing`] naming the path up to the
/// first key that is absent or whose parent is not an object.
pub fn node_at<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut node = root;
    for (depth, key) in path.iter().enumerate() {
        node = node
            .get(*key)
            .ok_or_else(|| FindataError::missing(path[..=depth].join(".")))?;
    }
    Ok(node)
}

/// Follows object keys from `root` to an array.
///
/// # Errors
///
/// Returns [`FindataError::StructuralMissing`] if the path is absent or does
/// not end at an array.
pub fn array_at<'a>(root: &'a Value, path: &[&str]) -> Result<&'a [Value]> {
    node_at(root, path)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| FindataError::missing(display_path(path)))
}

/// Returns the top-level array of a body.
///
/// # Errors
///
/// Returns [`FindataError::StructuralMissing`] if the root is not an array.
pub fn root_array(root: &Value) -> Result<&[Value]> {
    root.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| FindataError::missing("$"))
}

fn display_path(path: &[&str]) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.join(".")
    }
}

/// Projects every element, skipping (and logging) those that fail.
///
/// The output keeps the relative order of the retained elements.
pub fn collect_elements<T: FromElement>(source: &str, elements: &[Value]) -> Vec<T> {
    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match T::from_element(element) {
            Ok(record) => records.push(record),
            Err(e) => warn!(source, index, error = %e, "Skipping malformed element"),
        }
    }
    if records.len() < elements.len() {
        debug!(
            source,
            kept = records.len(),
            total = elements.len(),
            "Dropped malformed elements"
        );
    }
    records
}

fn field<'a>(element: &'a Value, name: &str) -> std::result::Result<&'a Value, ElementError> {
    let object = element.as_object().ok_or(ElementError::NotAnObject)?;
    match object.get(name) {
        Some(Value::Null) | None => Err(ElementError::Missing(name.to_string())),
        Some(value) => Ok(value),
    }
}

/// Reads a string field.
///
/// # Errors
///
/// Returns an error if the field is absent or not a string.
pub fn field_str<'a>(element: &'a Value, name: &str) -> std::result::Result<&'a str, ElementError> {
    field(element, name)?
        .as_str()
        .ok_or_else(|| ElementError::Mistyped {
            field: name.to_string(),
            expected: "string",
        })
}

/// Reads a numeric field given either as a JSON number or a quoted string.
///
/// Quoted values are converted leniently: garbage yields `0.0`.
///
/// # Errors
///
/// Returns an error if the field is absent or neither a number nor a string.
pub fn field_number(element: &Value, name: &str) -> std::result::Result<f64, ElementError> {
    let value = field(element, name)?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ElementError::Mistyped {
            field: name.to_string(),
            expected: "number",
        }),
        Value::String(s) => Ok(parse_lenient_f64(s)),
        _ => Err(ElementError::Mistyped {
            field: name.to_string(),
            expected: "number",
        }),
    }
}

/// Reads a numeric field that must be a quoted string.
///
/// # Errors
///
/// Returns an error if the field is absent or not a string.
pub fn field_quoted_number(element: &Value, name: &str) -> std::result::Result<f64, ElementError> {
    field_str(element, name).map(parse_lenient_f64)
}

/// Reads a `YYYY-MM-DD` date field.
///
/// # Errors
///
/// Returns an error if the field is absent, not a string or not a date.
pub fn field_date(element: &Value, name: &str) -> std::result::Result<NaiveDate, ElementError> {
    let raw = field_str(element, name)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ElementError::InvalidDate {
        field: name.to_string(),
        value: raw.to_string(),
    })
}

/// Reads a bounded date label field.
///
/// # Errors
///
/// Returns an error if the field is absent, not a string or too long.
pub fn field_label(element: &Value, name: &str) -> std::result::Result<DateLabel, ElementError> {
    Ok(DateLabel::new(field_str(element, name)?)?)
}
