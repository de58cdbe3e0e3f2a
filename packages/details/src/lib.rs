//! Structured Philippine statute documents.
//!
//! A statute is stored as a folder holding its metadata (`details.yaml`) and
//! its provisions (`units.yaml`). This crate turns such a folder into a
//! [`StatuteDetails`]: a validated provision tree plus the statute's
//! classified titles. It also writes the YAML export records.
//!
//! Citation recognition lives in `statute_patterns`; this crate resolves the
//! recognized rules to folders.
//!
//! # Example
//!
//! ```
//! use statute_details::{Unit, UnitTree};
//!
//! let tree = UnitTree::from_yaml_str(
//!     "- item: Section 1\n  content: This Act shall be known as the \"Maceda Law\".\n",
//! )
//! .unwrap();
//! assert_eq!(tree.count(), 1);
//! assert_eq!(tree.units()[0], Unit::leaf(
//!     "Section 1",
//!     Some("This Act shall be known as the \"Maceda Law\".".into()),
//! ));
//! ```

pub mod cli;
pub mod config;
pub mod details;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod titles;
pub mod units;
pub mod yaml;

pub use details::{statute_slug, StatuteDetails};
pub use error::{DetailsError, MalformedUnitError, Result, UnitErrorReason};
pub use loader::StatuteLocator;
pub use metadata::StatuteMetadata;
pub use titles::{classify_titles, detect_short_title, StatuteTitle, TitleCategory, TitleSources};
pub use units::{Body, Sentinel, Unit, UnitTree};
pub use yaml::{generate_yaml, save_yaml, SaveOutcome};
