use crate::config::ConfigError;
use crate::rewrite::RewriteError;
use crate::tag::TagError;
use thiserror::Error;

// RUST LEARNING: `#[error(transparent)]` forwards Display and source to the wrapped error
// - `#[from]` lets `?` turn a module error into TagspliceError automatically
/// Top-level error for tagsplice commands
#[derive(Error, Debug)]
pub enum TagspliceError {
    /// A variable the command depends on is unset or empty
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tagsplice operations
pub type TagspliceResult<T> = Result<T, TagspliceError>;

/// Read a required environment variable, treating an empty value as unset.
pub fn require_env(name: &str) -> TagspliceResult<String> {
    // RUST LEARNING: Match guards (`if ...`) refine a pattern with an extra condition
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(TagspliceError::MissingEnvVar(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing() {
        let name = "TAGSPLICE_TEST_SURELY_UNSET_VARIABLE";

        match require_env(name) {
            Err(TagspliceError::MissingEnvVar(var)) => assert_eq!(var, name),
            other => panic!("expected MissingEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_errors_keep_their_message() {
        let err: TagspliceError = TagError::NotFound {
            pattern: "v13*".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "No remote tag matches v13*");
    }
}
