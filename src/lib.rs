//! # tagsplice
//!
//! Resolves the latest release tag of an upstream repository for a requested
//! major version line and splices the result into CI configuration files.
//!
//! ## Library Usage
//!
//! The core lives in [`tag`]: a [`TagResolver`] asks any [`RemoteTagSource`]
//! for the matching tags and picks the highest one. [`GitRemote`] is the
//! source backed by `git ls-remote`.
//!
//! RUST LEARNING: `//!` comments are "inner doc comments" for modules/crates

// RUST LEARNING: `pub mod` declares a public module (a file or a directory with mod.rs)
pub mod commands;
pub mod config;
pub mod error;
pub mod rewrite;
pub mod tag;

// RUST LEARNING: `pub use` re-exports items so users can write `tagsplice::TagResolver`
pub use config::{Config, RepoId, Repository, Settings};
pub use error::{TagspliceError, TagspliceResult};
pub use rewrite::{append_env_line, replace_line_suffix, rewrite_file, RewriteTarget};
pub use tag::{GitRemote, RemoteTagSource, TagError, TagPattern, TagResolver, VersionSelector};

// Re-export command types for library users who want to use commands programmatically
pub use commands::{CompletionsCommand, ResolveCommand, TargetKind, UpdateFileCommand};

/// The current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
