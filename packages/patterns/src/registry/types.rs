//! Types for the statute pattern registry.

use std::ops::Range;

use crate::category::Category;

/// How a match is turned into rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The `serial` capture group holds one or more serial tokens; each
    /// token becomes a rule of the entry's category.
    Serials,

    /// The match always denotes the same statute, e.g. "Spanish Civil Code"
    /// is `spain/civil`.
    Fixed(String),
}

/// Declarative description of one registry entry.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    /// Display name used in logs and diagnostics.
    pub name: String,

    /// Category of every rule this entry produces.
    pub category: Category,

    /// Regex source (the `regex` crate dialect).
    pub regex: String,

    /// How matched text becomes rules.
    pub extraction: Extraction,

    /// Words which, when they immediately precede a match, disqualify it
    /// (compared case-insensitively against the previous token).
    pub not_preceded_by: Vec<String>,

    /// Samples that must be fully matched by this entry.
    pub matches: Vec<String>,

    /// Samples that must not match at their start.
    pub excludes: Vec<String>,
}

impl PatternSpec {
    /// Create a serial entry: one of `bases` (category markers) followed by
    /// one of `serials` captured as `serial`.
    ///
    /// Markers and serials are matched case-insensitively unless a fragment
    /// opts out (see [`super::fragments::letters`]).
    #[must_use]
    pub fn serial(category: Category, bases: &[String], serials: &[String]) -> Self {
        let regex = format!(
            r"(?i)(?:{})\s*(?P<serial>{})",
            bases.join("|"),
            serials.join("|")
        );
        Self {
            name: category.label().to_string(),
            category,
            regex,
            extraction: Extraction::Serials,
            not_preceded_by: Vec::new(),
            matches: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Create a named entry that maps a fixed phrase to one statute.
    ///
    /// The phrase is matched case-insensitively and must start on a word
    /// boundary.
    #[must_use]
    pub fn named(
        name: impl Into<String>,
        category: Category,
        id: impl Into<String>,
        regex: &str,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            regex: format!(r"(?i)\b(?:{regex})"),
            extraction: Extraction::Fixed(id.into()),
            not_preceded_by: Vec::new(),
            matches: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Set the disqualifying preceding words.
    #[must_use]
    pub fn with_not_preceded_by(
        mut self,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.not_preceded_by = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the samples that must match.
    #[must_use]
    pub fn with_matches(mut self, samples: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.matches = samples.into_iter().map(Into::into).collect();
        self
    }

    /// Set the samples that must not match.
    #[must_use]
    pub fn with_excludes(mut self, samples: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes = samples.into_iter().map(Into::into).collect();
        self
    }
}

/// A located match of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Byte span of the whole citation.
    pub span: Range<usize>,

    /// Index of the entry in the registry (lower wins ties).
    pub priority: usize,

    /// Byte span of the serial capture, for serial entries.
    pub serial: Option<Range<usize>>,
}

impl Candidate {
    /// Length of the matched citation in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Whether the match is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Whether `self` should be preferred over `other`.
    ///
    /// Earlier start wins; at the same start the longer match wins; at the
    /// same length the earlier registry entry wins.
    #[must_use]
    pub fn beats(&self, other: &Candidate) -> bool {
        (self.span.start, std::cmp::Reverse(self.len()), self.priority)
            < (other.span.start, std::cmp::Reverse(other.len()), other.priority)
    }
}
