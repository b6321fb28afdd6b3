use crate::tag::{Result, TagError, TagPattern};
use log::debug;
use std::process::Command; // RUST LEARNING: For spawning child processes (like Node's child_process)

/// Anything that can list the tag refs of one remote in ascending version order.
// RUST LEARNING: Traits are like TypeScript interfaces
// - The resolver only depends on this capability, not on `git` itself
// - Tests plug in an in-memory implementation
pub trait RemoteTagSource {
    /// Full ref paths (e.g. `refs/tags/v15.2.0`) matching `pattern`, in the
    /// remote's version-aware ascending order.
    fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>>;
}

// RUST LEARNING: Blanket impl so a borrowed source works too
// - `?Sized` also allows `&dyn RemoteTagSource`
impl<S: RemoteTagSource + ?Sized> RemoteTagSource for &S {
    fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>> {
        (**self).list_tags(pattern)
    }
}

/// Lists tags by running `git ls-remote` against a remote URL.
#[derive(Debug, Clone)]
pub struct GitRemote {
    url: String,
}

impl GitRemote {
    // RUST LEARNING: `impl Into<String>` accepts both `&str` and `String`
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Parse the output of `git ls-remote`: `<sha>\t<ref>` per line.
    fn parse_ls_remote_output(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| line.split('\t').nth(1))
            .map(|reference| reference.trim().to_string())
            .filter(|reference| !reference.is_empty())
            .collect()
    }
}

impl RemoteTagSource for GitRemote {
    fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>> {
        let glob = pattern.glob();

        debug!("Listing tags matching {} from {}", glob, self.url);
        // Sorting is left to git; `versionsort.suffix=-` keeps pre-releases
        // ordered before the release they precede. `--refs` drops the peeled
        // `^{}` entries of annotated tags.
        let output = Command::new("git")
            .args([
                "-c",
                "versionsort.suffix=-",
                "ls-remote",
                "--refs",
                "--tags",
                "--sort=v:refname",
                self.url.as_str(),
                glob.as_str(),
            ])
            .output()
            .map_err(|e| TagError::GitCommand(format!("Failed to execute git command: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TagError::GitCommand(format!(
                "Git command failed with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let output_str = String::from_utf8(output.stdout)?;
        let refs = Self::parse_ls_remote_output(&output_str);
        debug!("Remote returned {} refs for {}", refs.len(), glob);
        Ok(refs)
    }
}
