//! Statute title classification.
//!
//! A statute is known by several names. Its official title is the long
//! enacted one ("An Act to Ordain and Institute the Civil Code of the
//! Philippines"), its serial title names its category and number ("Republic
//! Act No. 386"), its short title is declared in its own text ("This Act
//! shall be known as the ...") and aliases are popular names collected by
//! hand ("New Civil Code").

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::SHORT_TITLE_SCAN_DEPTH;
use crate::units::UnitTree;

/// `known as the "..."` / `cited as <em>...</em>` declarations.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SHORT_TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:known|cited)\s+as\s+(?:the\s+)?(?:"|“|<em>|<i>)\s*(?P<title>[^"“”<]+?)[\s.,;]*(?:"|”|</em>|</i>)"#,
    )
    .expect("valid regex")
});

/// Kinds of statute titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleCategory {
    /// Full enacted title.
    Official,

    /// Category and serial number.
    Serial,

    /// Popular, undocumented name.
    Alias,

    /// Name declared in the statute's own text.
    Short,
}

impl TitleCategory {
    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Serial => "serial",
            Self::Alias => "alias",
            Self::Short => "short",
        }
    }
}

/// One name of a statute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteTitle {
    /// Id of the statute this title belongs to.
    pub statute_id: String,
    pub category: TitleCategory,
    pub text: String,
}

/// The raw title strings of one statute.
#[derive(Debug, Clone, Default)]
pub struct TitleSources<'a> {
    pub official: Option<&'a str>,
    pub serial: Option<&'a str>,
    pub aliases: &'a [String],
}

/// Find a short title declared in the first provisions of a tree.
///
/// # Examples
/// ```
/// use statute_details::{detect_short_title, Unit, UnitTree};
///
/// let tree = UnitTree::new(vec![Unit::leaf(
///     "Article 1",
///     Some(r#"This Act shall be known as the "Civil Code of the Philippines." (n)"#.into()),
/// )]);
/// assert_eq!(
///     detect_short_title(&tree).as_deref(),
///     Some("Civil Code of the Philippines")
/// );
/// ```
#[must_use]
pub fn detect_short_title(tree: &UnitTree) -> Option<String> {
    tree.contents()
        .into_iter()
        .take(SHORT_TITLE_SCAN_DEPTH)
        .find_map(short_title_in)
}

fn short_title_in(text: &str) -> Option<String> {
    let caps = SHORT_TITLE_PATTERN.captures(text)?;
    let title = caps.name("title")?.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

/// Classify a statute's titles.
///
/// Output order: aliases (input order), the detected short title, the
/// official title, the serial title. Blank strings are skipped and no
/// `(category, text)` pair appears twice. A short title that merely repeats
/// an alias is left out.
#[must_use]
pub fn classify_titles(
    statute_id: &str,
    sources: &TitleSources<'_>,
    units: Option<&UnitTree>,
) -> Vec<StatuteTitle> {
    let mut titles: Vec<StatuteTitle> = Vec::new();
    let mut push = |category: TitleCategory, text: &str| {
        let text = text.trim();
        if text.is_empty()
            || titles
                .iter()
                .any(|t| t.category == category && t.text == text)
        {
            return;
        }
        titles.push(StatuteTitle {
            statute_id: statute_id.to_string(),
            category,
            text: text.to_string(),
        });
    };

    for alias in sources.aliases {
        push(TitleCategory::Alias, alias);
    }

    if let Some(short) = units.and_then(detect_short_title) {
        let repeats_alias = sources
            .aliases
            .iter()
            .any(|alias| alias.trim().eq_ignore_ascii_case(&short));
        if repeats_alias {
            tracing::debug!(short = %short, "Short title already listed as alias");
        } else {
            push(TitleCategory::Short, &short);
        }
    }

    if let Some(official) = sources.official {
        push(TitleCategory::Official, official);
    }
    if let Some(serial) = sources.serial {
        push(TitleCategory::Serial, serial);
    }

    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;
    use pretty_assertions::assert_eq;

    fn civil_code_units() -> UnitTree {
        UnitTree::new(vec![Unit::branch(
            "Container 1",
            None,
            vec![Unit::branch(
                "Chapter 1",
                None,
                vec![
                    Unit::leaf(
                        "Article 1",
                        Some(
                            "This Act shall be known as the \"Civil Code of the Philippines.\" (n)\n"
                                .into(),
                        ),
                    ),
                    Unit::leaf(
                        "Article 2",
                        Some("Laws shall take effect after fifteen days following the completion of their publication. (1a)\n".into()),
                    ),
                ],
            )
            .with_caption("Effect and Application of Laws")],
        )
        .with_caption("Preliminary Title")])
    }

    fn summary(titles: &[StatuteTitle]) -> Vec<(&str, &str)> {
        titles
            .iter()
            .map(|t| (t.category.as_str(), t.text.as_str()))
            .collect()
    }

    #[test]
    fn test_detect_short_title_quoted() {
        assert_eq!(
            detect_short_title(&civil_code_units()).as_deref(),
            Some("Civil Code of the Philippines")
        );
    }

    #[test]
    fn test_detect_short_title_absent() {
        let tree = UnitTree::new(vec![Unit::leaf("Section 1", Some("Sample content".into()))]);
        assert_eq!(detect_short_title(&tree), None);
    }

    #[test]
    fn test_detect_short_title_variants() {
        assert_eq!(
            short_title_in("This Act may be cited as the <em>Philippine Immigration Act of 1940</em>.")
                .as_deref(),
            Some("Philippine Immigration Act of 1940")
        );
        assert_eq!(
            short_title_in("shall be known as “Maceda Law”").as_deref(),
            Some("Maceda Law")
        );
        assert_eq!(short_title_in("known as the Maceda Law"), None);
    }

    #[test]
    fn test_short_title_only_in_first_provisions() {
        let mut units: Vec<Unit> = (1..=SHORT_TITLE_SCAN_DEPTH)
            .map(|n| Unit::leaf(format!("Section {n}"), Some("Definitions.".into())))
            .collect();
        units.push(Unit::leaf(
            "Section 99",
            Some("This Act shall be known as the \"Late Act\"".into()),
        ));
        assert_eq!(detect_short_title(&UnitTree::new(units)), None);
    }

    #[test]
    fn test_classify_order() {
        let aliases = vec!["New Civil Code".to_string(), String::new()];
        let sources = TitleSources {
            official: Some("An Act to Ordain and Institute the Civil Code of the Philippines"),
            serial: Some("Republic Act No. 386"),
            aliases: &aliases,
        };
        let titles = classify_titles("ra-386-1949-06-18", &sources, Some(&civil_code_units()));
        assert_eq!(
            summary(&titles),
            vec![
                ("alias", "New Civil Code"),
                ("short", "Civil Code of the Philippines"),
                (
                    "official",
                    "An Act to Ordain and Institute the Civil Code of the Philippines"
                ),
                ("serial", "Republic Act No. 386"),
            ]
        );
        assert!(titles.iter().all(|t| t.statute_id == "ra-386-1949-06-18"));
    }

    #[test]
    fn test_short_title_matching_alias_is_dropped() {
        let aliases = vec!["civil code of the philippines".to_string()];
        let sources = TitleSources {
            official: None,
            serial: Some("Republic Act No. 386"),
            aliases: &aliases,
        };
        let titles = classify_titles("x", &sources, Some(&civil_code_units()));
        assert_eq!(
            summary(&titles),
            vec![
                ("alias", "civil code of the philippines"),
                ("serial", "Republic Act No. 386"),
            ]
        );
    }

    #[test]
    fn test_classify_dedups_aliases_and_omits_absent() {
        let aliases = vec![
            "Maceda Law".to_string(),
            " Maceda Law ".to_string(),
            "Realty Installment Buyer Act".to_string(),
        ];
        let sources = TitleSources {
            official: None,
            serial: None,
            aliases: &aliases,
        };
        let titles = classify_titles("x", &sources, None);
        assert_eq!(
            summary(&titles),
            vec![
                ("alias", "Maceda Law"),
                ("alias", "Realty Installment Buyer Act"),
            ]
        );
    }

    #[test]
    fn test_title_category_serde() {
        assert_eq!(
            serde_json::to_string(&TitleCategory::Short).unwrap(),
            "\"short\""
        );
    }
}
