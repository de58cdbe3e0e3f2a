//! Compiled statute pattern registry.

use regex::Regex;

use super::types::{Candidate, Extraction, PatternSpec};
use crate::category::Category;
use crate::error::{PatternError, Result};
use crate::normalize::split_serials;
use crate::rule::Rule;

/// A registry entry with its compiled regex.
#[derive(Debug)]
pub struct CompiledPattern {
    spec: PatternSpec,
    regex: Regex,
    full: Regex,
}

impl CompiledPattern {
    fn compile(spec: PatternSpec) -> Result<Self> {
        let invalid = |source| PatternError::InvalidPattern {
            category: spec.category,
            source,
        };
        let regex = Regex::new(&spec.regex).map_err(invalid)?;
        let full = Regex::new(&format!(r"\A(?:{})\z", spec.regex)).map_err(invalid)?;
        Ok(Self { spec, regex, full })
    }

    /// The declarative description this entry was built from.
    #[must_use]
    pub fn spec(&self) -> &PatternSpec {
        &self.spec
    }

    /// Category of the rules this entry produces.
    #[must_use]
    pub fn category(&self) -> Category {
        self.spec.category
    }

    /// Whether the entry matches the whole of `text`.
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.full.is_match(text)
    }

    /// Whether the entry matches at the very start of `text`.
    #[must_use]
    pub fn matches_at_start(&self, text: &str) -> bool {
        self.regex
            .find(text)
            .is_some_and(|m| m.start() == 0 && !self.is_blocked(text, 0))
    }

    /// Find the leftmost qualifying match at or after byte offset `start`.
    ///
    /// Surrounding text before `start` is still visible to word boundaries
    /// and to the preceding-word check.
    #[must_use]
    pub fn find_at(&self, text: &str, start: usize, priority: usize) -> Option<Candidate> {
        let mut from = start;
        while from <= text.len() {
            let caps = self.regex.captures_at(text, from)?;
            let whole = caps.get(0)?;
            if whole.is_empty() || self.is_blocked(text, whole.start()) {
                from = next_boundary(text, whole.start());
                continue;
            }
            return Some(Candidate {
                span: whole.range(),
                priority,
                serial: caps.name("serial").map(|m| m.range()),
            });
        }
        None
    }

    /// Turn a candidate found by this entry into rules, left to right.
    pub fn rules(&self, text: &str, candidate: &Candidate) -> Vec<Rule> {
        match &self.spec.extraction {
            Extraction::Fixed(id) => Rule::new(self.spec.category, id).into_iter().collect(),
            Extraction::Serials => {
                let Some(serial) = candidate.serial.clone() else {
                    return Vec::new();
                };
                split_serials(&text[serial])
                    .filter_map(|token| match Rule::new(self.spec.category, token) {
                        Ok(rule) => Some(rule),
                        Err(err) => {
                            tracing::debug!(error = %err, "Skipping unusable serial token");
                            None
                        }
                    })
                    .collect()
            }
        }
    }

    /// Whether the word right before `start` disqualifies a match there.
    fn is_blocked(&self, text: &str, start: usize) -> bool {
        if self.spec.not_preceded_by.is_empty() {
            return false;
        }
        let before = &text[..start];
        if !before.ends_with(char::is_whitespace) {
            return false;
        }
        let word = before
            .trim_end()
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default();
        self.spec
            .not_preceded_by
            .iter()
            .any(|blocked| blocked.eq_ignore_ascii_case(word))
    }
}

/// Byte offset of the character after the one starting at `at`.
fn next_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| at + c.len_utf8())
}

/// Ordered collection of statute patterns.
///
/// Registration order is priority order: it decides which entry wins when
/// two entries match the same span with the same length. A registry is
/// immutable once shared; build it fully before scanning.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile, check and append an entry.
    ///
    /// # Errors
    /// - `InvalidPattern` if the regex does not compile
    /// - `SampleNotMatched` / `SampleNotExcluded` if the entry's own samples
    ///   disagree with it
    /// - `DuplicateCategory` for a second serial entry of one category
    /// - `AmbiguousCategory` if a sample of one category is fully matched by
    ///   an entry of another category
    pub fn register(&mut self, spec: PatternSpec) -> Result<()> {
        let compiled = CompiledPattern::compile(spec)?;
        let spec = compiled.spec();

        if let Some(sample) = spec.matches.iter().find(|s| !compiled.is_full_match(s)) {
            return Err(PatternError::SampleNotMatched {
                category: spec.category,
                sample: sample.clone(),
            });
        }
        if let Some(sample) = spec.excludes.iter().find(|s| compiled.matches_at_start(s)) {
            return Err(PatternError::SampleNotExcluded {
                category: spec.category,
                sample: sample.clone(),
            });
        }

        for existing in &self.patterns {
            if existing.category() == spec.category {
                if existing.spec().extraction == Extraction::Serials
                    && spec.extraction == Extraction::Serials
                {
                    return Err(PatternError::DuplicateCategory(spec.category));
                }
                continue;
            }
            let clash = spec
                .matches
                .iter()
                .find(|s| existing.is_full_match(s))
                .or_else(|| {
                    existing
                        .spec()
                        .matches
                        .iter()
                        .find(|s| compiled.is_full_match(s))
                });
            if let Some(sample) = clash {
                return Err(PatternError::AmbiguousCategory {
                    sample: sample.clone(),
                    first: existing.category(),
                    second: spec.category,
                });
            }
        }

        tracing::debug!(
            name = %spec.name,
            category = %spec.category,
            priority = self.patterns.len(),
            "Registered statute pattern"
        );
        self.patterns.push(compiled);
        Ok(())
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Registered entries in priority order.
    pub fn patterns(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    /// Get an entry by priority index.
    #[must_use]
    pub fn get(&self, priority: usize) -> Option<&CompiledPattern> {
        self.patterns.get(priority)
    }
}
