//! Configuration constants and validation functions.

use std::env;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{DetailsError, Result};

/// Metadata file inside every statute folder.
pub const DETAILS_FILE: &str = "details.yaml";

/// Scraped provisions file, used when no curated units file exists.
pub const UNITS_FILE: &str = "units.yaml";

/// Label of the single container used by placeholder trees.
pub const SENTINEL_ITEM: &str = "Container 1";

/// Placeholder content for statutes whose provisions were not extracted.
pub const UNITS_NOT_DETECTED: &str = "Individual provisions not detected.";

/// Placeholder content for appropriation laws, which are not broken down.
pub const UNITS_EXCLUDED: &str = "Appropriation laws are excluded.";

/// Marker in an official title that identifies an appropriation law.
pub const APPROPRIATION_MARKER: &str = "appropriat";

/// Contact recorded when a details file lists none.
pub const DEFAULT_EMAIL: &str = "bot@lawsql.com";

/// Environment variable naming the statute corpus, relative to `$HOME`
/// unless absolute.
pub const STATUTE_PATH_ENV: &str = "STATUTE_PATH";

/// Corpus location used when `STATUTE_PATH` is unset.
pub const DEFAULT_STATUTE_PATH: &str = "code/corpus/statutes";

/// Environment variable naming the export directory.
pub const EXPORT_PATH_ENV: &str = "STATUTE_EXPORT_PATH";

/// Export location used when `STATUTE_EXPORT_PATH` is unset.
pub const DEFAULT_EXPORT_PATH: &str = "code/corpus-statutes";

/// How many provision texts, in document order, are searched for a short
/// title. Short titles are declared in the first article or section.
pub const SHORT_TITLE_SCAN_DEPTH: usize = 5;

/// Date layouts accepted in details files.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// Parse a statute date.
///
/// # Examples
/// ```
/// use statute_details::config::parse_date;
///
/// assert_eq!(parse_date("1949-06-18").unwrap().to_string(), "1949-06-18");
/// assert_eq!(parse_date("June 18, 1949").unwrap().to_string(), "1949-06-18");
/// assert!(parse_date("1949-13-01").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DetailsError::InvalidDate(date_str.to_string()))
}

/// Resolve a directory from an environment variable.
///
/// Relative values, and the default, are taken relative to the home
/// directory.
fn dir_from_env(var: &str, default: &str) -> PathBuf {
    let configured = env::var(var).ok().filter(|v| !v.trim().is_empty());
    let relative = configured.as_deref().unwrap_or(default);
    home_dir().join(relative)
}

fn home_dir() -> PathBuf {
    env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// The statute corpus directory.
#[must_use]
pub fn statute_path() -> PathBuf {
    dir_from_env(STATUTE_PATH_ENV, DEFAULT_STATUTE_PATH)
}

/// The export directory.
#[must_use]
pub fn export_path() -> PathBuf {
    dir_from_env(EXPORT_PATH_ENV, DEFAULT_EXPORT_PATH)
}

/// Whether an official title marks an appropriation law.
#[must_use]
pub fn is_appropriation(title: &str) -> bool {
    title.to_lowercase().contains(APPROPRIATION_MARKER)
}

/// The curated units file name for a statute, e.g. `ra386.yaml`.
#[must_use]
pub fn curated_units_file(category: &str, id: &str) -> String {
    format!("{category}{id}.yaml")
}

/// Whether `path` looks like a statute folder (holds a details file).
#[must_use]
pub fn is_statute_folder(path: &Path) -> bool {
    path.join(DETAILS_FILE).is_file()
}
