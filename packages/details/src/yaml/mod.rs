//! YAML export of assembled statutes.

mod writer;

pub use writer::{generate_yaml, save_yaml, SaveOutcome};
