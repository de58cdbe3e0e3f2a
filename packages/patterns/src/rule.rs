//! The canonical `(category, id)` pair a citation resolves to.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{PatternError, Result};
use crate::normalize::normalize;

/// A normalized statute reference, e.g. `ra/386` for Republic Act No. 386.
///
/// Equality, ordering and hashing are by `(category, id)`, which makes a
/// `Rule` the deduplication key when counting mentions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRule")]
pub struct Rule {
    category: Category,
    id: String,
}

/// Unvalidated form used when deserializing.
#[derive(Deserialize)]
struct RawRule {
    category: Category,
    id: String,
}

impl TryFrom<RawRule> for Rule {
    type Error = PatternError;

    fn try_from(raw: RawRule) -> Result<Self> {
        Self::new(raw.category, &raw.id)
    }
}

impl Rule {
    /// Create a rule, normalizing the raw serial token.
    ///
    /// # Errors
    /// Returns `EmptySerial` if nothing remains after normalization.
    ///
    /// # Examples
    /// ```
    /// use statute_patterns::{Category, Rule};
    ///
    /// let rule = Rule::new(Category::PresidentialDecree, "1474-B").unwrap();
    /// assert_eq!(rule.id(), "1474-b");
    /// assert!(Rule::new(Category::RepublicAct, " . ").is_err());
    /// ```
    pub fn new(category: Category, raw_id: &str) -> Result<Self> {
        let id = normalize(category, raw_id);
        if id.is_empty() {
            return Err(PatternError::EmptySerial {
                category,
                raw: raw_id.to_string(),
            });
        }
        Ok(Self { category, id })
    }

    /// Create a rule from a category tag and a raw id, e.g. `("ra", "386")`.
    ///
    /// # Errors
    /// Returns `UnknownCategory` or `EmptySerial`.
    pub fn parse(category: &str, raw_id: &str) -> Result<Self> {
        Self::new(category.parse()?, raw_id)
    }

    /// The statute category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The normalized serial identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable serial phrase, e.g. "Republic Act No. 386".
    #[must_use]
    pub fn serial_title(&self) -> Option<String> {
        self.category.serial_title(&self.id)
    }

    /// Relative location of the statute's folder: `<category>/<id>`.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.category.as_str()).join(&self.id)
    }

    /// Join `<category>/<id>` to a base directory.
    ///
    /// Pure path arithmetic; the file system is never consulted.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use statute_patterns::Rule;
    ///
    /// let rule = Rule::parse("ra", "386").unwrap();
    /// assert_eq!(
    ///     rule.path_for(Path::new("/corpus/statutes")),
    ///     Path::new("/corpus/statutes/ra/386")
    /// );
    /// ```
    #[must_use]
    pub fn path_for(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Reconstruct a rule from the last two components of a statute folder.
    ///
    /// Returns `None` if the path is too short, the category is unknown, or
    /// the id is not already in normalized form.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let mut components = path.components().rev();
        let id = components.next()?.as_os_str().to_str()?;
        let category = components.next()?.as_os_str().to_str()?;
        let rule = Self::parse(category, id).ok()?;
        (rule.id == id && rule.category.as_str() == category).then_some(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_normalizes() {
        let rule = Rule::new(Category::AdministrativeMatter, "02-11-10-SC").unwrap();
        assert_eq!(rule.category(), Category::AdministrativeMatter);
        assert_eq!(rule.id(), "02-11-10-sc");
    }

    #[test]
    fn test_rule_equality_after_normalization() {
        let a = Rule::new(Category::RepublicAct, "0386").unwrap();
        let b = Rule::new(Category::RepublicAct, "386").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Rule::new(Category::CommonwealthAct, "386").unwrap());
    }

    #[test]
    fn test_rule_ordering_by_category_then_id() {
        let mut rules = vec![
            Rule::parse("pd", "1").unwrap(),
            Rule::parse("ra", "9").unwrap(),
            Rule::parse("ra", "10").unwrap(),
        ];
        rules.sort();
        let tags: Vec<String> = rules.iter().map(ToString::to_string).collect();
        assert_eq!(tags, vec!["ra/10", "ra/9", "pd/1"]);
    }

    #[test]
    fn test_rule_empty_serial() {
        assert!(matches!(
            Rule::new(Category::RepublicAct, "--"),
            Err(PatternError::EmptySerial { .. })
        ));
    }

    #[test]
    fn test_rule_serial_title() {
        let rule = Rule::parse("ra", "386").unwrap();
        assert_eq!(rule.serial_title().as_deref(), Some("Republic Act No. 386"));
    }

    #[test]
    fn test_rule_path_round_trip() {
        let base = Path::new("/tmp/statutes");
        let rules = [
            Rule::parse("ra", "386").unwrap(),
            Rule::parse("rule_am", "02-11-10-SC").unwrap(),
            Rule::parse("spain", "civil").unwrap(),
            Rule::parse("pd", "1474-b").unwrap(),
        ];
        for rule in rules {
            let path = rule.path_for(base);
            assert!(path.starts_with(base));
            assert_eq!(Rule::from_path(&path), Some(rule));
        }
    }

    #[test]
    fn test_rule_from_path_rejects_unknown() {
        assert_eq!(Rule::from_path(Path::new("/tmp/statutes/xyz/386")), None);
        assert_eq!(Rule::from_path(Path::new("386")), None);
        assert_eq!(Rule::from_path(Path::new("/tmp/ra/0386")), None);
    }

    #[test]
    fn test_rule_serde() {
        let rule = Rule::parse("rule_am", "99-10-05-0").unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"category":"rule_am","id":"99-10-05-0"}"#);

        let parsed: Rule = serde_json::from_str(r#"{"category":"ra","id":"0386"}"#).unwrap();
        assert_eq!(parsed.id(), "386");
        assert!(serde_json::from_str::<Rule>(r#"{"category":"ra","id":""}"#).is_err());
    }
}
