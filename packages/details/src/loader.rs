//! Locating and loading statutes from a local corpus.
//!
//! The corpus is laid out as `<base>/<category>/<id>/`, each folder holding a
//! `details.yaml` and optionally a units file. When several statutes share a
//! category and serial number, their folders carry a counter instead:
//! `rule_am/00-5-03-sc-1/`, `rule_am/00-5-03-sc-2/`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use statute_patterns::Rule;

use crate::config::{
    curated_units_file, is_statute_folder, statute_path, DETAILS_FILE, UNITS_FILE,
};
use crate::details::StatuteDetails;
use crate::error::{DetailsError, Result};
use crate::metadata::StatuteMetadata;

/// Finds statute folders and loads them.
#[derive(Debug, Clone)]
pub struct StatuteLocator {
    base: PathBuf,
}

impl StatuteLocator {
    /// Create a locator rooted at `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Create a locator rooted at `$STATUTE_PATH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(statute_path())
    }

    /// The corpus root.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The rule's own folder, if it exists.
    #[must_use]
    pub fn get_path(&self, rule: &Rule) -> Option<PathBuf> {
        let target = rule.path_for(&self.base);
        target.is_dir().then_some(target)
    }

    /// Variant folders `<id>-<n>` holding a details file, sorted by name.
    /// The suffix `n` must be all digits, so `pd/1474` does not claim
    /// `pd/1474-b`.
    ///
    /// # Errors
    /// Returns an IO error if the category folder cannot be read.
    pub fn get_paths(&self, rule: &Rule) -> Result<Vec<PathBuf>> {
        let category_dir = self.base.join(rule.category().as_str());
        if !category_dir.is_dir() {
            return Ok(Vec::new());
        }

        let prefix = format!("{}-", rule.id());
        let mut folders = Vec::new();
        for entry in fs::read_dir(&category_dir)? {
            let path = entry?.path();
            let is_variant = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_prefix(&prefix))
                .is_some_and(|suffix| {
                    !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
                });
            if !is_variant {
                continue;
            }
            if is_statute_folder(&path) {
                folders.push(path);
            } else {
                tracing::warn!(folder = %path.display(), "Skipping variant folder without {DETAILS_FILE}");
            }
        }
        folders.sort();
        Ok(folders)
    }

    /// The rule's own folder, or failing that its variant folders.
    ///
    /// # Errors
    /// Returns an IO error if the category folder cannot be read.
    pub fn extract_folders(&self, rule: &Rule) -> Result<Vec<PathBuf>> {
        match self.get_path(rule) {
            Some(folder) => Ok(vec![folder]),
            None => self.get_paths(rule),
        }
    }

    /// The units file of a statute folder: the curated `<category><id>.yaml`
    /// when present, else the scraped `units.yaml`.
    #[must_use]
    pub fn units_path(rule: &Rule, folder: &Path) -> Option<PathBuf> {
        let curated = folder.join(curated_units_file(rule.category().as_str(), rule.id()));
        if curated.is_file() {
            return Some(curated);
        }
        let scraped = folder.join(UNITS_FILE);
        scraped.is_file().then_some(scraped)
    }

    /// Load every statute recorded for a rule.
    ///
    /// # Errors
    /// - `NotFound` if the rule has no folder under the base
    /// - any error from [`StatuteLocator::load_folder`]
    pub fn load(&self, rule: &Rule) -> Result<Vec<StatuteDetails>> {
        let folders = self.extract_folders(rule)?;
        if folders.is_empty() {
            return Err(DetailsError::NotFound {
                rule: rule.clone(),
                base: self.base.clone(),
            });
        }
        folders.iter().map(|folder| Self::load_folder(folder)).collect()
    }

    /// Load the statute stored in one folder.
    ///
    /// The rule is read back from the folder's last two path components, so
    /// a variant folder yields a variant rule such as `rule_am/00-5-03-sc-2`.
    ///
    /// # Errors
    /// - `Io` if the folder does not follow the corpus layout or cannot be read
    /// - `Yaml`, `MissingField`, `InvalidDate`, `MalformedUnit`,
    ///   `MissingSerialTitle` from reading and assembling the statute
    pub fn load_folder(folder: &Path) -> Result<StatuteDetails> {
        let Some(rule) = Rule::from_path(folder) else {
            return Err(DetailsError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Not a statute folder: {}", folder.display()),
            )));
        };

        let details_file = folder.join(DETAILS_FILE);
        let context = details_file.display().to_string();
        let metadata = StatuteMetadata::from_yaml_str(&fs::read_to_string(&details_file)?, &context)?;

        let units: Option<Value> = match Self::units_path(&rule, folder) {
            Some(path) => {
                tracing::debug!(file = %path.display(), "Reading units");
                Some(serde_yaml_ng::from_str(&fs::read_to_string(&path)?)?)
            }
            None => None,
        };

        StatuteDetails::assemble(rule, metadata, units.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_get_path() {
        let dir = tempdir().unwrap();
        let locator = StatuteLocator::new(dir.path());
        let rule = Rule::parse("ra", "386").unwrap();
        assert_eq!(locator.get_path(&rule), None);

        fs::create_dir_all(dir.path().join("ra/386")).unwrap();
        assert_eq!(locator.get_path(&rule), Some(dir.path().join("ra/386")));
    }

    #[test]
    fn test_get_paths_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        write(&base.join("rule_am/00-5-03-sc-2").join(DETAILS_FILE), "x");
        write(&base.join("rule_am/00-5-03-sc-1").join(DETAILS_FILE), "x");
        fs::create_dir_all(base.join("rule_am/00-5-03-sc-3")).unwrap();
        write(&base.join("rule_am/01-1-01-sc").join(DETAILS_FILE), "x");

        let locator = StatuteLocator::new(base);
        let rule = Rule::parse("rule_am", "00-5-03-SC").unwrap();
        assert_eq!(
            locator.get_paths(&rule).unwrap(),
            vec![
                base.join("rule_am/00-5-03-sc-1"),
                base.join("rule_am/00-5-03-sc-2"),
            ]
        );
        assert_eq!(locator.extract_folders(&rule).unwrap().len(), 2);
    }

    #[test]
    fn test_get_paths_requires_numeric_suffix() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        write(&base.join("pd/1474-b").join(DETAILS_FILE), "x");
        write(&base.join("pd/1474-1a").join(DETAILS_FILE), "x");
        write(&base.join("pd/1474-").join(DETAILS_FILE), "x");

        let locator = StatuteLocator::new(base);
        let rule = Rule::parse("pd", "1474").unwrap();
        assert!(locator.get_paths(&rule).unwrap().is_empty());
        assert!(matches!(
            locator.load(&rule),
            Err(DetailsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_units_path_prefers_curated() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("ra/386");
        let rule = Rule::parse("ra", "386").unwrap();
        fs::create_dir_all(&folder).unwrap();
        assert_eq!(StatuteLocator::units_path(&rule, &folder), None);

        write(&folder.join(UNITS_FILE), "[]");
        assert_eq!(
            StatuteLocator::units_path(&rule, &folder),
            Some(folder.join(UNITS_FILE))
        );

        write(&folder.join("ra386.yaml"), "[]");
        assert_eq!(
            StatuteLocator::units_path(&rule, &folder),
            Some(folder.join("ra386.yaml"))
        );
    }

    #[test]
    fn test_load_not_found() {
        let dir = tempdir().unwrap();
        let locator = StatuteLocator::new(dir.path());
        let rule = Rule::parse("ra", "1").unwrap();
        assert!(matches!(
            locator.load(&rule),
            Err(DetailsError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_folder_outside_layout() {
        let dir = tempdir().unwrap();
        assert!(StatuteLocator::load_folder(&dir.path().join("nowhere/else")).is_err());
    }
}
