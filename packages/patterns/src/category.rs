//! The closed taxonomy of Philippine statute categories.
//!
//! Each category tag serves two purposes: it is the folder under which a
//! statute's files are stored, and it is the `category` half of a [`Rule`].
//!
//! [`Rule`]: crate::Rule

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Category of a serially numbered (or fixed-name) Philippine statute.
///
/// Declaration order is registry priority order: when two patterns match
/// the same span with the same length, the earlier category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Republic Act.
    #[serde(rename = "ra")]
    RepublicAct,

    /// Commonwealth Act.
    #[serde(rename = "ca")]
    CommonwealthAct,

    /// Act of the Philippine Commission / Legislature.
    #[serde(rename = "act")]
    Act,

    /// Executive Order.
    #[serde(rename = "eo")]
    ExecutiveOrder,

    /// Presidential Decree.
    #[serde(rename = "pd")]
    PresidentialDecree,

    /// Batas Pambansa.
    #[serde(rename = "bp")]
    BatasPambansa,

    /// Letter of Instruction.
    #[serde(rename = "loi")]
    LetterOfInstruction,

    /// Supreme Court Administrative Matter.
    #[serde(rename = "rule_am")]
    AdministrativeMatter,

    /// Supreme Court Bar Matter.
    #[serde(rename = "rule_bm")]
    BarMatter,

    /// Supreme Court Circular.
    #[serde(rename = "sc_cir")]
    CircularSC,

    /// Office of the Court Administrator Circular.
    #[serde(rename = "oca_cir")]
    CircularOCA,

    /// Resolution of the Court En Banc.
    #[serde(rename = "rule_reso")]
    ResolutionEnBanc,

    /// Presidential veto message.
    #[serde(rename = "veto")]
    VetoMessage,

    /// Constitution.
    #[serde(rename = "const")]
    Constitution,

    /// Spanish-era code.
    #[serde(rename = "spain")]
    Spain,

    /// Rules of Court.
    #[serde(rename = "roc")]
    RulesOfCourt,
}

impl Category {
    /// Every category, in registry priority order.
    pub const ALL: [Category; 16] = [
        Self::RepublicAct,
        Self::CommonwealthAct,
        Self::Act,
        Self::ExecutiveOrder,
        Self::PresidentialDecree,
        Self::BatasPambansa,
        Self::LetterOfInstruction,
        Self::AdministrativeMatter,
        Self::BarMatter,
        Self::CircularSC,
        Self::CircularOCA,
        Self::ResolutionEnBanc,
        Self::VetoMessage,
        Self::Constitution,
        Self::Spain,
        Self::RulesOfCourt,
    ];

    /// Get the tag used for folders and serialized rules.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepublicAct => "ra",
            Self::CommonwealthAct => "ca",
            Self::Act => "act",
            Self::ExecutiveOrder => "eo",
            Self::PresidentialDecree => "pd",
            Self::BatasPambansa => "bp",
            Self::LetterOfInstruction => "loi",
            Self::AdministrativeMatter => "rule_am",
            Self::BarMatter => "rule_bm",
            Self::CircularSC => "sc_cir",
            Self::CircularOCA => "oca_cir",
            Self::ResolutionEnBanc => "rule_reso",
            Self::VetoMessage => "veto",
            Self::Constitution => "const",
            Self::Spain => "spain",
            Self::RulesOfCourt => "roc",
        }
    }

    /// Get the spelled-out name used in serial titles.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::RepublicAct => "Republic Act",
            Self::CommonwealthAct => "Commonwealth Act",
            Self::Act => "Act",
            Self::ExecutiveOrder => "Executive Order",
            Self::PresidentialDecree => "Presidential Decree",
            Self::BatasPambansa => "Batas Pambansa",
            Self::LetterOfInstruction => "Letter of Instruction",
            Self::AdministrativeMatter => "Administrative Matter",
            Self::BarMatter => "Bar Matter",
            Self::CircularSC => "SC Circular",
            Self::CircularOCA => "OCA Circular",
            Self::ResolutionEnBanc => "Resolution of the Court En Banc",
            Self::VetoMessage => "Veto Message",
            Self::Constitution => "Constitution",
            Self::Spain => "Spanish Code",
            Self::RulesOfCourt => "Rules of Court",
        }
    }

    /// Whether ids of this category are plain numbers whose leading zeros
    /// carry no meaning.
    ///
    /// Date-like ids (`rule_am`, `oca_cir`, `rule_reso`) and lexical ids
    /// (`const`, `spain`, `roc`) keep their text as written.
    #[must_use]
    pub fn strips_leading_zeros(&self) -> bool {
        matches!(
            self,
            Self::RepublicAct
                | Self::CommonwealthAct
                | Self::Act
                | Self::ExecutiveOrder
                | Self::PresidentialDecree
                | Self::BatasPambansa
                | Self::LetterOfInstruction
                | Self::BarMatter
                | Self::CircularSC
                | Self::VetoMessage
        )
    }

    /// Create the serial title for a normalized id of this category.
    ///
    /// Returns `None` when the id is not a recognized member of a fixed-name
    /// category (e.g. `spain` only knows `civil`, `penal` and `commerce`).
    ///
    /// # Examples
    /// ```
    /// use statute_patterns::Category;
    ///
    /// assert_eq!(
    ///     Category::PresidentialDecree.serial_title("570-a").as_deref(),
    ///     Some("Presidential Decree No. 570-A")
    /// );
    /// assert_eq!(
    ///     Category::AdministrativeMatter.serial_title("03-06-13-sc").as_deref(),
    ///     Some("Administrative Matter No. 03-06-13-SC")
    /// );
    /// assert_eq!(Category::Spain.serial_title("tax"), None);
    /// ```
    #[must_use]
    pub fn serial_title(&self, id: &str) -> Option<String> {
        let small = id.to_lowercase();
        match self {
            Self::Spain => match small.as_str() {
                "civil" => Some("Spanish Civil Code".to_string()),
                "penal" => Some("Spanish Penal Code".to_string()),
                "commerce" => Some("Code of Commerce".to_string()),
                _ => None,
            },
            Self::Constitution => match small.as_str() {
                "1935" | "1973" | "1987" => Some(format!("{small} Constitution")),
                _ => None,
            },
            Self::RulesOfCourt => match small.as_str() {
                "1940" | "1964" => Some(format!("{small} Rules of Court")),
                "cpr" => Some("Code of Professional Responsibility".to_string()),
                _ => None,
            },
            Self::VetoMessage => Some(format!("Veto Message - {small}")),
            Self::ResolutionEnBanc => Some(format!("{} dated {small}", self.label())),
            Self::AdministrativeMatter => {
                // Variant folders append a counter: 00-5-03-sc-1, 00-5-03-sc-2.
                let base = match small.find("-sc-") {
                    Some(idx) if small[idx + 4..].chars().all(|c| c.is_ascii_digit()) => {
                        &small[..idx + 3]
                    }
                    _ => small.as_str(),
                };
                Some(format!("{} No. {}", self.label(), base.to_uppercase()))
            }
            Self::BatasPambansa => small
                .chars()
                .all(|c| c.is_ascii_digit())
                .then(|| format!("{} Blg. {small}", self.label())),
            _ => Some(format!("{} No. {}", self.label(), small.to_uppercase())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| PatternError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::RepublicAct.as_str(), "ra");
        assert_eq!(Category::AdministrativeMatter.as_str(), "rule_am");
        assert_eq!(Category::Constitution.as_str(), "const");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("ra".parse::<Category>().unwrap(), Category::RepublicAct);
        assert_eq!("RA".parse::<Category>().unwrap(), Category::RepublicAct);
        assert_eq!(
            " rule_am ".parse::<Category>().unwrap(),
            Category::AdministrativeMatter
        );
        assert!("unknown".parse::<Category>().is_err());
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_serial_title_default() {
        assert_eq!(
            Category::RepublicAct.serial_title("386").as_deref(),
            Some("Republic Act No. 386")
        );
        assert_eq!(
            Category::PresidentialDecree.serial_title("1474-b").as_deref(),
            Some("Presidential Decree No. 1474-B")
        );
        assert_eq!(
            Category::LetterOfInstruction.serial_title("474").as_deref(),
            Some("Letter of Instruction No. 474")
        );
    }

    #[test]
    fn test_serial_title_fixed_names() {
        assert_eq!(
            Category::Spain.serial_title("civil").as_deref(),
            Some("Spanish Civil Code")
        );
        assert_eq!(
            Category::Spain.serial_title("commerce").as_deref(),
            Some("Code of Commerce")
        );
        assert_eq!(
            Category::Constitution.serial_title("1987").as_deref(),
            Some("1987 Constitution")
        );
        assert_eq!(Category::Constitution.serial_title("1999"), None);
        assert_eq!(
            Category::RulesOfCourt.serial_title("cpr").as_deref(),
            Some("Code of Professional Responsibility")
        );
    }

    #[test]
    fn test_serial_title_administrative_matter_variant() {
        assert_eq!(
            Category::AdministrativeMatter
                .serial_title("00-5-03-sc-2")
                .as_deref(),
            Some("Administrative Matter No. 00-5-03-SC")
        );
        assert_eq!(
            Category::AdministrativeMatter
                .serial_title("99-10-05-0")
                .as_deref(),
            Some("Administrative Matter No. 99-10-05-0")
        );
    }

    #[test]
    fn test_serial_title_batas_pambansa() {
        assert_eq!(
            Category::BatasPambansa.serial_title("22").as_deref(),
            Some("Batas Pambansa Blg. 22")
        );
        assert_eq!(Category::BatasPambansa.serial_title("22-a"), None);
    }

    #[test]
    fn test_serial_title_special_forms() {
        assert_eq!(
            Category::VetoMessage.serial_title("11534").as_deref(),
            Some("Veto Message - 11534")
        );
        assert_eq!(
            Category::ResolutionEnBanc.serial_title("10-15-1991").as_deref(),
            Some("Resolution of the Court En Banc dated 10-15-1991")
        );
        assert_eq!(
            Category::CircularOCA.serial_title("39-02").as_deref(),
            Some("OCA Circular No. 39-02")
        );
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&Category::AdministrativeMatter).unwrap(),
            "\"rule_am\""
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"spain\"").unwrap(),
            Category::Spain
        );
    }
}
