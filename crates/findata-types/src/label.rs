//! Length-bounded date labels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::LabelError;

/// A provider date or period label such as `2024-01-15`, `2024-03` or `2019`.
///
/// Labels are validated at construction: they must be non-empty and at most
/// [`DateLabel::MAX_LEN`] bytes. Over-long labels are rejected rather than
/// truncated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateLabel(String);

impl DateLabel {
    /// Maximum label length (`YYYY-MM-DD`).
    pub const MAX_LEN: usize = 10;

    /// Creates a label, validating its length.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty or longer than [`Self::MAX_LEN`].
    pub fn new(label: impl Into<String>) -> Result<Self, LabelError> {
        let label = label.into();
        if label.is_empty() {
            return Err(LabelError::Empty);
        }
        if label.len() > Self::MAX_LEN {
            return Err(LabelError::TooLong {
                len: label.len(),
                max: Self::MAX_LEN,
                label,
            });
        }
        Ok(Self(label))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DateLabel {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DateLabel {
    type Error = LabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for DateLabel {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<DateLabel> for String {
    fn from(label: DateLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for DateLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_labels() {
        assert_eq!(DateLabel::new("2024-01-15").unwrap().as_str(), "2024-01-15");
        assert_eq!(DateLabel::new("2024-03").unwrap().as_str(), "2024-03");
        assert_eq!("2019".parse::<DateLabel>().unwrap().to_string(), "2019");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(DateLabel::new(""), Err(LabelError::Empty));
    }

    #[test]
    fn test_rejects_too_long() {
        let err = DateLabel::new("2024-01-15T00:00").unwrap_err();
        assert!(matches!(err, LabelError::TooLong { len: 16, max: 10, .. }));
    }

    #[test]
    fn test_serde_validates() {
        let label: DateLabel = serde_json::from_str("\"2020\"").unwrap();
        assert_eq!(label.as_str(), "2020");
        assert!(serde_json::from_str::<DateLabel>("\"2020-01-01-extra\"").is_err());
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"2020\"");
    }
}
