//! Error types for statute documents.
//!
//! `DetailsError` is what library consumers see; `MalformedUnitError`
//! carries the position of a bad provision node so the offending part of a
//! units file can be found without re-reading it by hand.

use std::fmt;
use std::path::PathBuf;

use statute_patterns::{PatternError, Rule};
use thiserror::Error;

/// Why a provision node was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitErrorReason {
    /// The node is not a key/value mapping.
    NotAMapping,

    /// The node has no usable `item` label.
    MissingItem,

    /// A field holds a value of the wrong type.
    InvalidField { field: String },

    /// `units` is present but is not a sequence.
    UnitsNotASequence,
}

impl fmt::Display for UnitErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMapping => f.write_str("node is not a mapping"),
            Self::MissingItem => f.write_str("node has no 'item'"),
            Self::InvalidField { field } => write!(f, "'{field}' has an unexpected type"),
            Self::UnitsNotASequence => f.write_str("'units' is not a sequence"),
        }
    }
}

/// A provision node that could not be turned into a [`Unit`](crate::Unit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed unit at {position}{}: {reason}", .near.as_ref().map(|i| format!(" (near '{i}')")).unwrap_or_default())]
pub struct MalformedUnitError {
    /// Path to the node, e.g. `units[0].units[2]`.
    pub position: String,

    /// The closest item label known at the failure point: the node's own
    /// label when it has one, otherwise its parent's.
    pub near: Option<String>,

    pub reason: UnitErrorReason,
}

/// Main error type for the details library.
#[derive(Debug, Error)]
pub enum DetailsError {
    /// A units artifact failed structural validation.
    #[error(transparent)]
    MalformedUnit(#[from] MalformedUnitError),

    /// The rule has no serial title, so the statute cannot be addressed.
    #[error("No serial title for {0}")]
    MissingSerialTitle(Rule),

    /// A required metadata field is absent or blank.
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// A date that is not a valid calendar date.
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD (e.g., 1949-06-18)")]
    InvalidDate(String),

    /// No statute folder for the rule under the base directory.
    #[error("No statute found for {rule} under {}", .base.display())]
    NotFound { rule: Rule, base: PathBuf },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Category or rule error from the patterns library.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Result type alias for details operations.
pub type Result<T> = std::result::Result<T, DetailsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_unit_display_with_item() {
        let err = MalformedUnitError {
            position: "units[0].units[2]".to_string(),
            near: Some("Chapter 1".to_string()),
            reason: UnitErrorReason::MissingItem,
        };
        assert_eq!(
            err.to_string(),
            "Malformed unit at units[0].units[2] (near 'Chapter 1'): node has no 'item'"
        );
    }

    #[test]
    fn test_malformed_unit_display_without_item() {
        let err = MalformedUnitError {
            position: "units[1]".to_string(),
            near: None,
            reason: UnitErrorReason::InvalidField {
                field: "caption".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Malformed unit at units[1]: 'caption' has an unexpected type"
        );
    }

    #[test]
    fn test_missing_serial_title_display() {
        let rule = Rule::parse("spain", "tax").unwrap();
        let err = DetailsError::MissingSerialTitle(rule);
        assert_eq!(err.to_string(), "No serial title for spain/tax");
    }

    #[test]
    fn test_malformed_unit_converts() {
        let err: DetailsError = MalformedUnitError {
            position: "units".to_string(),
            near: None,
            reason: UnitErrorReason::UnitsNotASequence,
        }
        .into();
        assert!(matches!(err, DetailsError::MalformedUnit(_)));
    }
}
