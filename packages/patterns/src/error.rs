//! Error types for citation recognition.
//!
//! Recognition itself never fails on well-formed text: an absent citation is
//! `None`, not an error. The variants below cover building a [`Rule`] by hand
//! and constructing a pattern registry.
//!
//! [`Rule`]: crate::Rule

use thiserror::Error;

use crate::category::Category;

/// Main error type for the patterns library.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A category tag outside the closed taxonomy.
    #[error("Unknown statute category: '{0}'")]
    UnknownCategory(String),

    /// The serial token normalized to nothing.
    #[error("Empty serial identifier for {category}: '{raw}'")]
    EmptySerial { category: Category, raw: String },

    /// A registry entry failed to compile.
    #[error("Invalid pattern for {category}: {source}")]
    InvalidPattern {
        category: Category,
        #[source]
        source: regex::Error,
    },

    /// A sample declared as a match is not fully matched by its entry.
    #[error("{category} pattern misses a sample it should match: '{sample}'")]
    SampleNotMatched { category: Category, sample: String },

    /// A sample declared as an exclusion is matched by its entry.
    #[error("{category} pattern matches a sample it should exclude: '{sample}'")]
    SampleNotExcluded { category: Category, sample: String },

    /// Two categories claim the same marker.
    #[error("'{sample}' is claimed by both {first} and {second}")]
    AmbiguousCategory {
        sample: String,
        first: Category,
        second: Category,
    },

    /// More than one serial entry registered for a category.
    #[error("Serial pattern for {0} registered twice")]
    DuplicateCategory(Category),
}

/// Result type alias for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
