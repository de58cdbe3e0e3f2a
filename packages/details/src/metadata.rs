//! The `details.yaml` metadata schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

use crate::config::{parse_date, DEFAULT_EMAIL};
use crate::error::{DetailsError, Result};

/// A YAML scalar that may be written as text or as a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

/// The details file as written, before validation.
#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    law_title: Option<String>,
    date: Option<Scalar>,
    numeral: Option<Scalar>,
    category: Option<String>,
    aliases: Option<Vec<Option<String>>>,
    emails: Option<Vec<String>>,
    variant: Option<u32>,
}

/// Validated statute metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatuteMetadata {
    /// Official title.
    pub law_title: String,

    /// Date of approval or effectivity.
    pub date: NaiveDate,

    /// Serial number as written in the source, if recorded.
    pub numeral: Option<String>,

    /// Category tag as written in the source, if recorded.
    pub category: Option<String>,

    /// Popular names, in input order.
    pub aliases: Vec<String>,

    /// Provenance contacts.
    pub emails: Vec<String>,

    /// Disambiguates statutes sharing a category and serial number.
    pub variant: u32,
}

impl StatuteMetadata {
    /// Create metadata with defaults for the optional fields.
    #[must_use]
    pub fn new(law_title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            law_title: law_title.into(),
            date,
            numeral: None,
            category: None,
            aliases: Vec::new(),
            emails: vec![DEFAULT_EMAIL.to_string()],
            variant: 1,
        }
    }

    /// Set the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: u32) -> Self {
        self.variant = variant;
        self
    }

    /// Validate a parsed details artifact.
    ///
    /// # Errors
    /// - `MissingField` if `law_title` or `date` is absent or blank
    /// - `InvalidDate` if `date` is not a calendar date
    /// - `Yaml` if a field has the wrong shape
    pub fn from_value(value: Value, context: &str) -> Result<Self> {
        let raw: RawMetadata = serde_yaml_ng::from_value(value)?;

        let law_title = raw
            .law_title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| missing("law_title", context))?;
        let date_text = raw
            .date
            .map(Scalar::into_text)
            .ok_or_else(|| missing("date", context))?;
        let date = parse_date(&date_text)?;

        let aliases = raw
            .aliases
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        let emails = raw
            .emails
            .filter(|emails| !emails.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_EMAIL.to_string()]);

        Ok(Self {
            law_title,
            date,
            numeral: raw.numeral.map(Scalar::into_text),
            category: raw.category,
            aliases,
            emails,
            variant: raw.variant.filter(|v| *v > 0).unwrap_or(1),
        })
    }

    /// Parse and validate a details artifact from YAML text.
    ///
    /// # Errors
    /// See [`StatuteMetadata::from_value`].
    pub fn from_yaml_str(yaml: &str, context: &str) -> Result<Self> {
        let value: Value = serde_yaml_ng::from_str(yaml)?;
        Self::from_value(value, context)
    }
}

fn missing(field: &str, context: &str) -> DetailsError {
    DetailsError::MissingField {
        field: field.to_string(),
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_full() {
        let yaml = "\
law_title: An Act to Ordain and Institute the Civil Code of the Philippines
numeral: 386
category: ra
date: 1949-06-18
aliases:
  - New Civil Code
  - null
emails:
  - someone@example.com
variant: 2
";
        let meta = StatuteMetadata::from_yaml_str(yaml, "ra/386").unwrap();
        assert_eq!(meta.numeral.as_deref(), Some("386"));
        assert_eq!(meta.category.as_deref(), Some("ra"));
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(1949, 6, 18).unwrap());
        assert_eq!(meta.aliases, vec!["New Civil Code"]);
        assert_eq!(meta.emails, vec!["someone@example.com"]);
        assert_eq!(meta.variant, 2);
    }

    #[test]
    fn test_defaults() {
        let meta =
            StatuteMetadata::from_yaml_str("law_title: Some Act\ndate: June 18, 1949\n", "x")
                .unwrap();
        assert_eq!(meta.emails, vec![DEFAULT_EMAIL]);
        assert_eq!(meta.variant, 1);
        assert!(meta.aliases.is_empty());
        assert_eq!(meta.date.to_string(), "1949-06-18");
    }

    #[test]
    fn test_missing_title() {
        let err = StatuteMetadata::from_yaml_str("law_title: '  '\ndate: 1949-06-18\n", "ra/386")
            .unwrap_err();
        assert!(matches!(
            err,
            DetailsError::MissingField { ref field, .. } if field == "law_title"
        ));
        assert!(err.to_string().contains("ra/386"));
    }

    #[test]
    fn test_missing_date() {
        let err = StatuteMetadata::from_yaml_str("law_title: Some Act\n", "x").unwrap_err();
        assert!(matches!(err, DetailsError::MissingField { ref field, .. } if field == "date"));
    }

    #[test]
    fn test_invalid_date() {
        let err = StatuteMetadata::from_yaml_str("law_title: Some Act\ndate: someday\n", "x")
            .unwrap_err();
        assert!(matches!(err, DetailsError::InvalidDate(_)));
    }

    #[test]
    fn test_wrong_shape() {
        let err = StatuteMetadata::from_yaml_str("law_title: [a]\ndate: 1949-06-18\n", "x")
            .unwrap_err();
        assert!(matches!(err, DetailsError::Yaml(_)));
    }
}
