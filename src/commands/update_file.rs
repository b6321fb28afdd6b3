use crate::config::{Config, RepoId};
use crate::error::{require_env, TagspliceResult};
use crate::rewrite::RewriteTarget;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

/// Which configured file an update command rewrites
// RUST LEARNING: `Copy` makes this small enum pass by value like an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    EnvFile,
    Manifest,
}

#[derive(Args)]
pub struct UpdateFileCommand {
    /// File to rewrite (defaults to the configured target)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Literal prefix of the line whose value is replaced
    #[arg(short, long)]
    prefix: Option<String>,

    /// Environment variable holding the version (defaults to the repository's env key)
    #[arg(long)]
    var: Option<String>,
}

impl UpdateFileCommand {
    /// Replace the version in the target with the value of `--var`.
    ///
    /// The version is read from the environment, typically set by an earlier
    /// `resolve` step through `$GITHUB_ENV`.
    pub fn execute(&self, config: &Config, kind: TargetKind) -> TagspliceResult<()> {
        let settings = config.settings()?;
        let configured = match kind {
            TargetKind::EnvFile => settings.env_file_target(),
            TargetKind::Manifest => settings.manifest_target(),
        };
        let target = self.target(configured);

        let var = match &self.var {
            Some(var) => var.clone(),
            None => settings.repository(RepoId::Frappe, None, None).env_key,
        };
        // RUST LEARNING: `?` stops here with MissingEnvVar if the variable is unset
        let version = require_env(&var)?;

        target.apply(&version)?;

        println!(
            "{} Set {} to {} in {}",
            "Success:".green(),
            target.prefix.trim().cyan(),
            version.cyan(),
            target.path.display()
        );
        Ok(())
    }

    /// Command-line values win over the configured target.
    // RUST LEARNING: `unwrap_or` takes the fallback by value, so `configured` is moved in
    fn target(&self, configured: RewriteTarget) -> RewriteTarget {
        RewriteTarget {
            path: self.file.clone().unwrap_or(configured.path),
            prefix: self.prefix.clone().unwrap_or(configured.prefix),
        }
    }
}
