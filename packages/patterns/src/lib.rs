//! Statute Patterns - find Philippine statute citations in free text.
//!
//! This crate recognizes citations such as `Rep. Act No. 386`,
//! `P.D. No. 1474-B` or `the old Spanish Civil Code` and resolves each one to
//! a normalized [`Rule`]: a `(category, id)` pair that also names the
//! statute's folder in a local corpus.
//!
//! # Example
//!
//! ```
//! use statute_patterns::{count_rules, extract_rule, extract_rules, Rule};
//!
//! let text = "The Civil Code of the Philippines, the old Spanish Civil Code; Rep Act No. 386";
//!
//! let first = extract_rule(text).unwrap();
//! assert_eq!(first, Rule::parse("ra", "386").unwrap());
//! assert_eq!(extract_rules(text).count(), 3);
//!
//! let counted = count_rules(text);
//! assert_eq!(counted[0].mentions, 2);
//! assert_eq!(counted[1].rule.to_string(), "spain/civil");
//! ```
//!
//! # Architecture
//!
//! - [`category`]: The closed category taxonomy and serial titles
//! - [`normalize`](mod@normalize): Serial token canonicalization
//! - [`rule`]: The `(category, id)` value and its path mapping
//! - [`registry`]: Validated pattern table
//! - [`scanner`]: Lazy positional scanning
//! - [`aggregate`]: First / all / counted views
//! - [`error`]: Error types and Result alias

pub mod aggregate;
pub mod category;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod rule;
pub mod scanner;

pub use aggregate::{count, CountedRule};
pub use category::Category;
pub use error::{PatternError, Result};
pub use normalize::{normalize, split_serials};
pub use registry::{default_registry, PatternRegistry, PatternSpec};
pub use rule::Rule;
pub use scanner::Scanner;

/// Lazily scan `text` with the default registry.
#[must_use]
pub fn extract_rules(text: &str) -> Scanner<'static, '_> {
    default_registry().scan(text)
}

/// The first rule cited in `text`.
#[must_use]
pub fn extract_rule(text: &str) -> Option<Rule> {
    default_registry().first(text)
}

/// Distinct rules cited in `text` with mention counts.
#[must_use]
pub fn count_rules(text: &str) -> Vec<CountedRule> {
    default_registry().counted(text)
}
