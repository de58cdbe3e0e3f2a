//! First / all / counted views over a scan.

use std::collections::HashMap;

use serde::Serialize;

use crate::registry::PatternRegistry;
use crate::rule::Rule;

/// A distinct rule with the number of times it is cited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountedRule {
    #[serde(flatten)]
    pub rule: Rule,
    pub mentions: usize,
}

/// Collapse a rule sequence into per-rule mention counts, ordered by first
/// occurrence.
pub fn count(rules: impl IntoIterator<Item = Rule>) -> Vec<CountedRule> {
    let mut index: HashMap<Rule, usize> = HashMap::new();
    let mut counted: Vec<CountedRule> = Vec::new();

    for rule in rules {
        if let Some(&at) = index.get(&rule) {
            counted[at].mentions += 1;
        } else {
            index.insert(rule.clone(), counted.len());
            counted.push(CountedRule { rule, mentions: 1 });
        }
    }

    counted
}

impl PatternRegistry {
    /// The first rule cited in `text`, or `None` if there is none.
    #[must_use]
    pub fn first(&self, text: &str) -> Option<Rule> {
        self.scan(text).next()
    }

    /// Every rule cited in `text`, duplicates kept, in order of appearance.
    #[must_use]
    pub fn all(&self, text: &str) -> Vec<Rule> {
        self.scan(text).collect()
    }

    /// One entry per distinct rule cited in `text` with its mention count.
    #[must_use]
    pub fn counted(&self, text: &str) -> Vec<CountedRule> {
        count(self.scan(text))
    }
}
