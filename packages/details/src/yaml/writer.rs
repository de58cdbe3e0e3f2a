//! YAML writer for statute exports.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use statute_patterns::extract_rule;

use crate::details::StatuteDetails;
use crate::error::Result;
use crate::titles::TitleCategory;
use crate::units::Unit;

/// Provision label; purely numeric labels are written as numbers.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum YamlItem {
    Number(u64),
    Text(String),
}

impl YamlItem {
    fn new(item: &str) -> Self {
        let item = item.trim();
        if item.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = item.parse() {
                return Self::Number(number);
            }
        }
        Self::Text(item.to_string())
    }
}

/// Provision representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlUnit {
    item: YamlItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    units: Vec<YamlUnit>,
}

impl From<&Unit> for YamlUnit {
    fn from(unit: &Unit) -> Self {
        Self {
            item: YamlItem::new(&unit.item),
            caption: unit.caption.as_deref().and_then(clean_text),
            content: unit.content().and_then(clean_text),
            units: unit.units().iter().map(YamlUnit::from).collect(),
        }
    }
}

/// Exported statute record.
#[derive(Debug, Serialize)]
struct YamlStatute {
    title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    short: Option<String>,
    units: Vec<YamlUnit>,
}

/// Trim a text field, dropping trailing spaces on inner lines. Blank text
/// is absent.
fn clean_text(text: &str) -> Option<String> {
    let cleaned = text
        .trim()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    (!cleaned.is_empty()).then_some(cleaned)
}

fn generate_yaml_struct(details: &StatuteDetails) -> YamlStatute {
    YamlStatute {
        title: details.description.trim().to_string(),
        aliases: details
            .titles_of(TitleCategory::Alias)
            .map(|t| t.text.clone())
            .collect(),
        short: details.short_title().map(str::to_string),
        units: details.units.units().iter().map(YamlUnit::from).collect(),
    }
}

/// Generate the export YAML for a statute.
///
/// # Errors
/// Returns a YAML error if serialization fails.
pub fn generate_yaml(details: &StatuteDetails) -> Result<String> {
    let yaml = serde_yaml_ng::to_string(&generate_yaml_struct(details))?;
    Ok(format!("---\n{}\n", yaml.trim_end()))
}

/// What [`save_yaml`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new file was written.
    Written(PathBuf),

    /// The file already existed and was left untouched.
    Existing(PathBuf),
}

impl SaveOutcome {
    /// The export file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Existing(path) => path,
        }
    }
}

impl StatuteDetails {
    /// Where the statute is exported under `dir`:
    /// `<dir>/<category>/<id>/<date>/<variant>.yml`.
    ///
    /// The id is the one cited by the serial title, so variant folders such
    /// as `rule_am/00-5-03-sc-2` export under `rule_am/00-5-03-sc`.
    #[must_use]
    pub fn export_path(&self, dir: &Path) -> PathBuf {
        let rule = extract_rule(&self.title)
            .filter(|cited| cited.category() == self.rule.category())
            .unwrap_or_else(|| self.rule.clone());
        dir.join(rule.category().as_str())
            .join(rule.id())
            .join(self.date.format("%Y-%m-%d").to_string())
            .join(format!("{}.yml", self.variant))
    }
}

/// Save a statute's export YAML under `dir`.
///
/// Existing exports are never overwritten. New files are written to a
/// temporary file first and renamed into place.
///
/// # Errors
/// Returns an IO or YAML error if the file cannot be generated or written.
pub fn save_yaml(details: &StatuteDetails, dir: &Path) -> Result<SaveOutcome> {
    let output_file = details.export_path(dir);
    if output_file.exists() {
        tracing::debug!(file = %output_file.display(), "Export exists, skipping");
        return Ok(SaveOutcome::Existing(output_file));
    }

    let output_dir = output_file
        .parent()
        .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
    fs::create_dir_all(&output_dir)?;

    let content = generate_yaml(details)?;
    let temp_file = output_dir.join(format!(".{}.yml.tmp", details.variant));
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&temp_file, &output_file)?;

    tracing::debug!(file = %output_file.display(), "Exported statute");
    Ok(SaveOutcome::Written(output_file))
}
