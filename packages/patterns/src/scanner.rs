//! Lazy, positional citation scanning.

use std::collections::VecDeque;

use crate::registry::{Candidate, PatternRegistry};
use crate::rule::Rule;

/// Cached search state of one registry entry.
#[derive(Debug, Clone)]
enum Slot {
    /// Not searched from the current position yet.
    Unknown,
    /// Next qualifying match at or after the last search position.
    Found(Candidate),
    /// No further match anywhere in the text.
    Exhausted,
}

/// Iterator over the rules cited in a text, in order of appearance.
///
/// At each position every entry's next match is considered; the one that
/// starts first wins, then the longest, then the earliest registered. The
/// winner's serial list is expanded left to right and scanning resumes
/// after it, so matches never overlap.
///
/// Created by [`PatternRegistry::scan`].
#[derive(Debug)]
pub struct Scanner<'r, 't> {
    registry: &'r PatternRegistry,
    text: &'t str,
    pos: usize,
    slots: Vec<Slot>,
    pending: VecDeque<Rule>,
}

impl<'r, 't> Scanner<'r, 't> {
    fn new(registry: &'r PatternRegistry, text: &'t str) -> Self {
        Self {
            registry,
            text,
            pos: 0,
            slots: vec![Slot::Unknown; registry.len()],
            pending: VecDeque::new(),
        }
    }

    /// The winning candidate from the current position, refreshing stale
    /// slots on the way.
    ///
    /// A match that starts earlier always wins, even against a longer match
    /// starting inside it: "Old Civil Code of the Philippines" names the
    /// Spanish code, not the one its tail would match.
    fn next_candidate(&mut self) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for (priority, slot) in self.slots.iter_mut().enumerate() {
            let stale = match slot {
                Slot::Unknown => true,
                Slot::Found(candidate) => candidate.span.start < self.pos,
                Slot::Exhausted => false,
            };
            if stale {
                *slot = self
                    .registry
                    .get(priority)
                    .and_then(|pattern| pattern.find_at(self.text, self.pos, priority))
                    .map_or(Slot::Exhausted, Slot::Found);
            }
            if let Slot::Found(candidate) = slot {
                if best.as_ref().map_or(true, |b| candidate.beats(b)) {
                    best = Some(candidate.clone());
                }
            }
        }

        best
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Rule;

    fn next(&mut self) -> Option<Rule> {
        while self.pending.is_empty() {
            let candidate = self.next_candidate()?;
            let pattern = self.registry.get(candidate.priority)?;
            let rules = pattern.rules(self.text, &candidate);

            tracing::debug!(
                pattern = %pattern.spec().name,
                matched = &self.text[candidate.span.clone()],
                found = rules.len(),
                "Matched statute citation"
            );

            self.pos = candidate.span.end;
            self.pending.extend(rules);
        }
        self.pending.pop_front()
    }
}

impl PatternRegistry {
    /// Scan `text` for statute citations.
    ///
    /// The scan is lazy and pure: nothing is searched until the iterator is
    /// advanced, and scanning the same text twice yields the same rules.
    #[must_use]
    pub fn scan<'r, 't>(&'r self, text: &'t str) -> Scanner<'r, 't> {
        Scanner::new(self, text)
    }
}
