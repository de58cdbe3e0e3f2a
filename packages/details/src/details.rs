//! Assembled statute documents.

use chrono::NaiveDate;
use serde::Serialize;
use serde_yaml_ng::Value;
use statute_patterns::Rule;
use unicode_normalization::UnicodeNormalization;

use crate::config::is_appropriation;
use crate::error::{DetailsError, Result};
use crate::metadata::StatuteMetadata;
use crate::titles::{classify_titles, StatuteTitle, TitleCategory, TitleSources};
use crate::units::{Sentinel, UnitTree};

/// A statute with its provisions and titles.
///
/// Built once from a rule, its metadata and its units artifact; never
/// modified afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct StatuteDetails {
    /// Slug of category, id, date and variant, e.g. `ra-386-1949-06-18`.
    pub id: String,
    pub rule: Rule,

    /// Serial title, e.g. "Republic Act No. 386".
    pub title: String,

    /// Official title.
    pub description: String,
    pub date: NaiveDate,
    pub variant: u32,
    pub emails: Vec<String>,
    pub units: UnitTree,
    pub titles: Vec<StatuteTitle>,
}

impl StatuteDetails {
    /// Assemble a statute from already-parsed artifacts.
    ///
    /// `units` is the parsed units artifact, or `None` when the statute has
    /// no units file. Appropriation laws always get the excluded placeholder.
    ///
    /// # Errors
    /// - `MissingSerialTitle` if the rule cannot be named by its serial phrase
    /// - `MalformedUnit` if the units artifact is structurally invalid
    pub fn assemble(rule: Rule, metadata: StatuteMetadata, units: Option<&Value>) -> Result<Self> {
        let title = rule
            .serial_title()
            .ok_or_else(|| DetailsError::MissingSerialTitle(rule.clone()))?;

        let units = if is_appropriation(&metadata.law_title) {
            tracing::warn!(rule = %rule, "Appropriation law, provisions excluded");
            UnitTree::sentinel(Sentinel::Excluded)
        } else if let Some(value) = units {
            UnitTree::from_value(value)?
        } else {
            tracing::warn!(rule = %rule, "No units file, provisions not detected");
            UnitTree::sentinel(Sentinel::NotDetected)
        };

        let id = statute_slug(&rule, metadata.date, metadata.variant);
        let titles = classify_titles(
            &id,
            &TitleSources {
                official: Some(metadata.law_title.as_str()),
                serial: Some(title.as_str()),
                aliases: &metadata.aliases,
            },
            Some(&units),
        );

        tracing::debug!(id = %id, provisions = units.count(), "Assembled statute");

        Ok(Self {
            id,
            rule,
            title,
            description: metadata.law_title,
            date: metadata.date,
            variant: metadata.variant,
            emails: metadata.emails,
            units,
            titles,
        })
    }

    /// Titles of one category.
    pub fn titles_of(&self, category: TitleCategory) -> impl Iterator<Item = &StatuteTitle> {
        self.titles.iter().filter(move |t| t.category == category)
    }

    /// The short title declared in the statute's text, if any.
    #[must_use]
    pub fn short_title(&self) -> Option<&str> {
        self.titles_of(TitleCategory::Short)
            .next()
            .map(|t| t.text.as_str())
    }
}

/// Build the statute id from its rule, date and variant.
///
/// The variant is only part of the id when it disambiguates, i.e. above 1.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use statute_details::statute_slug;
/// use statute_patterns::Rule;
///
/// let rule = Rule::parse("ra", "386").unwrap();
/// let date = NaiveDate::from_ymd_opt(1949, 6, 18).unwrap();
/// assert_eq!(statute_slug(&rule, date, 1), "ra-386-1949-06-18");
/// assert_eq!(statute_slug(&rule, date, 2), "ra-386-1949-06-18-2");
/// ```
#[must_use]
pub fn statute_slug(rule: &Rule, date: NaiveDate, variant: u32) -> String {
    let mut parts = vec![
        rule.category().as_str().to_string(),
        rule.id().to_string(),
        date.format("%Y-%m-%d").to_string(),
    ];
    if variant > 1 {
        parts.push(variant.to_string());
    }
    slugify(&parts.join(" "))
}

/// Lower-case ASCII slug: accents folded, every other run of characters
/// becomes a single hyphen.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.nfkd().filter(char::is_ascii) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
