//! Pattern registry for statute citations.
//!
//! Each entry pairs a category with a recognition regex and a rule for
//! turning the match into [`Rule`](crate::Rule)s. Entries are checked
//! against their own sample texts when registered, so a bad table edit
//! fails at construction instead of silently changing what gets extracted.

mod config;
mod core;
pub mod fragments;
mod types;

use std::sync::LazyLock;

pub use config::create_statute_registry;
pub use core::{CompiledPattern, PatternRegistry};
pub use types::{Candidate, Extraction, PatternSpec};

#[allow(clippy::expect_used)] // The table is validated by its own tests
static DEFAULT_REGISTRY: LazyLock<PatternRegistry> =
    LazyLock::new(|| create_statute_registry().expect("valid statute pattern table"));

/// The process-wide statute registry, built on first use.
#[must_use]
pub fn default_registry() -> &'static PatternRegistry {
    &DEFAULT_REGISTRY
}
