pub mod pattern;
pub mod resolver;
pub mod selector;
pub mod source;

use thiserror::Error;

// RUST LEARNING: `#[error(...)]` generates the Display text for each variant
// - Struct-like variants name their fields inside the message: `{pattern}`
#[derive(Error, Debug)]
pub enum TagError {
    #[error("No remote tag matches {pattern}")]
    NotFound { pattern: String },
    #[error("Could not extract a tag name from ref: {reference}")]
    Parse { reference: String },
    #[error("Unsupported version selector: {0} (expected one of 12, 13, 14, 15, 16, develop)")]
    InvalidSelector(String),
    #[error("Git command failed: {0}")]
    GitCommand(String),
    #[error("Invalid tag pattern: {0}")]
    Regex(#[from] regex::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// RUST LEARNING: Module-specific Result alias, so signatures read `Result<String>`
pub type Result<T> = std::result::Result<T, TagError>;

pub use pattern::TagPattern;
pub use resolver::TagResolver;
pub use selector::{VersionSelector, SUPPORTED_MAJORS, TRUNK};
pub use source::{GitRemote, RemoteTagSource};
