//! Provision trees.
//!
//! A statute's provisions form an ordered tree: containers hold chapters,
//! chapters hold articles, articles hold paragraphs, to any depth. Order is
//! document order and is preserved end to end.

mod parse;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_yaml_ng::Value;

use crate::config::{SENTINEL_ITEM, UNITS_EXCLUDED, UNITS_NOT_DETECTED};
use crate::error::MalformedUnitError;

/// What a provision holds below its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A provision without children, with or without text.
    Leaf { content: Option<String> },

    /// A provision with at least one child, optionally preceded by text.
    Branch {
        content: Option<String>,
        units: Vec<Unit>,
    },
}

/// One node of the provision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Human label, e.g. "Article 1".
    pub item: String,

    /// Optional heading.
    pub caption: Option<String>,

    pub body: Body,
}

impl Unit {
    /// Create a leaf provision.
    #[must_use]
    pub fn leaf(item: impl Into<String>, content: Option<String>) -> Self {
        Self {
            item: item.into(),
            caption: None,
            body: Body::Leaf { content },
        }
    }

    /// Create a provision with children.
    ///
    /// An empty `units` list yields a leaf: no children and absent children
    /// are the same thing.
    #[must_use]
    pub fn branch(item: impl Into<String>, content: Option<String>, units: Vec<Unit>) -> Self {
        let body = if units.is_empty() {
            Body::Leaf { content }
        } else {
            Body::Branch { content, units }
        };
        Self {
            item: item.into(),
            caption: None,
            body,
        }
    }

    /// Set the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// The provision's own text.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            Body::Leaf { content } | Body::Branch { content, .. } => content.as_deref(),
        }
    }

    /// Child provisions in document order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        match &self.body {
            Body::Leaf { .. } => &[],
            Body::Branch { units, .. } => units,
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("item", &self.item)?;
        if let Some(caption) = &self.caption {
            map.serialize_entry("caption", caption)?;
        }
        if let Some(content) = self.content() {
            map.serialize_entry("content", content)?;
        }
        if !self.units().is_empty() {
            map.serialize_entry("units", self.units())?;
        }
        map.end()
    }
}

/// Which placeholder a tree holds instead of real provisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Provisions were not extracted.
    NotDetected,

    /// Provisions are deliberately left out (appropriation laws).
    Excluded,
}

impl Sentinel {
    /// The placeholder text.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotDetected => UNITS_NOT_DETECTED,
            Self::Excluded => UNITS_EXCLUDED,
        }
    }
}

/// The root-level provisions of a statute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnitTree {
    units: Vec<Unit>,
}

impl UnitTree {
    /// Wrap already-built root provisions.
    #[must_use]
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    /// Build a tree from a parsed units artifact.
    ///
    /// # Errors
    /// Returns `MalformedUnitError` naming the first bad node.
    pub fn from_value(value: &Value) -> Result<Self, MalformedUnitError> {
        parse::parse_root(value).map(Self::new)
    }

    /// Parse a units artifact from YAML text.
    ///
    /// # Errors
    /// Returns a YAML error for unparsable text, or a malformed unit error.
    pub fn from_yaml_str(yaml: &str) -> crate::error::Result<Self> {
        let value: Value = serde_yaml_ng::from_str(yaml)?;
        Ok(Self::from_value(&value)?)
    }

    /// A single-container placeholder tree.
    #[must_use]
    pub fn sentinel(kind: Sentinel) -> Self {
        Self::new(vec![Unit::leaf(
            SENTINEL_ITEM,
            Some(kind.as_str().to_string()),
        )])
    }

    /// Which placeholder this tree is, if it is one.
    #[must_use]
    pub fn as_sentinel(&self) -> Option<Sentinel> {
        let [only] = self.units.as_slice() else {
            return None;
        };
        if !only.units().is_empty() {
            return None;
        }
        [Sentinel::NotDetected, Sentinel::Excluded]
            .into_iter()
            .find(|kind| only.content() == Some(kind.as_str()))
    }

    /// Root provisions in document order.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Whether the tree has no provisions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Every provision, depth-first, parents before children.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        let mut stack: Vec<&Unit> = self.units.iter().rev().collect();
        std::iter::from_fn(move || {
            let unit = stack.pop()?;
            stack.extend(unit.units().iter().rev());
            Some(unit)
        })
    }

    /// Total number of provisions at every depth.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Provision texts in depth-first pre-order.
    #[must_use]
    pub fn contents(&self) -> Vec<&str> {
        self.iter().filter_map(Unit::content).collect()
    }

    /// Item labels in depth-first pre-order.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        self.iter().map(|unit| unit.item.as_str()).collect()
    }

    /// Find a provision by its `/`-separated item path, e.g.
    /// `"Container 1/Chapter 1/Article 2"`. The first matching sibling is
    /// taken at each level.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Unit> {
        let mut level = self.units.as_slice();
        let mut found = None;
        for label in path.split('/').map(str::trim) {
            let unit = level.iter().find(|unit| unit.item == label)?;
            level = unit.units();
            found = Some(unit);
        }
        found
    }

    /// Convert back to a units artifact value.
    ///
    /// # Errors
    /// Returns a YAML error if serialization fails.
    pub fn to_value(&self) -> crate::error::Result<Value> {
        Ok(serde_yaml_ng::to_value(self)?)
    }
}
