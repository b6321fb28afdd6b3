// RUST LEARNING: Imports from our own crate use `crate::`, external crates use their name
// - `serde` derives JSON (de)serialization, `thiserror` derives error types
use crate::rewrite::RewriteTarget;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable that overrides the configured git remote.
pub const REMOTE_ENV_VAR: &str = "TAGSPLICE_REMOTE";

/// Environment file that CI runners read between steps.
pub const GITHUB_ENV_VAR: &str = "GITHUB_ENV";

pub const CONFIG_FILE_NAME: &str = ".tagsplice.json";

/// Owner of the upstream repositories on GitHub.
const REMOTE_BASE: &str = "https://github.com/adam7seven";

const DEFAULT_ENV_FILE: &str = "example.env";
const DEFAULT_ENV_FILE_PREFIX: &str = "FRAPPE_VERSION=";
const DEFAULT_MANIFEST_FILE: &str = "pwd.yml";
const DEFAULT_MANIFEST_PREFIX: &str = "adam7/frappe:";

// RUST LEARNING: One error enum per module, like the other modules
// - `#[from]` lets `?` convert std::io::Error into ConfigError::Io
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    // RUST LEARNING: A field named `source` is picked up as the underlying cause
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Repositories whose tags can be resolved.
// RUST LEARNING: `ValueEnum` lets clap accept only these names on the command line
// - `--repo frappe` parses into `RepoId::Frappe`, anything else is rejected by clap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RepoId {
    Frappe,
}

impl RepoId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoId::Frappe => "frappe",
        }
    }

    /// Remote listed when nothing overrides it.
    pub fn default_remote(&self) -> String {
        format!("{}/{}", REMOTE_BASE, self.as_str())
    }

    fn default_env_key(&self) -> &'static str {
        match self {
            RepoId::Frappe => "FRAPPE_VERSION",
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repository with every setting filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: RepoId,
    pub remote: String,
    pub env_key: String,
}

/// JSON file loaded on demand, falling back to `T::default()` when absent.
// RUST LEARNING: `PhantomData<T>` marks the struct as generic over T without storing one
pub struct FileConfig<T> {
    file_path: PathBuf,
    _marker: PhantomData<T>,
}

// RUST LEARNING: `for<'de> Deserialize<'de>` means "deserializable from any borrowed input"
impl<T> FileConfig<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            _marker: PhantomData,
        }
    }

    pub fn load(&self) -> Result<T> {
        debug!("Loading config from: {}", self.file_path.display());
        if let Ok(contents) = fs::read_to_string(&self.file_path) {
            let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: self.file_path.display().to_string(),
                source,
            })?;
            debug!("Config loaded successfully");
            Ok(config)
        } else {
            debug!("Config file not found, using default");
            Ok(T::default())
        }
    }
}

// RUST LEARNING: `rename_all = "camelCase"` maps `env_key` to `envKey` in JSON
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    pub remote: Option<String>,
    pub env_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TargetConfig {
    pub path: Option<PathBuf>,
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    // RUST LEARNING: `#[serde(default)]` uses Default::default() if the key is missing
    #[serde(default)]
    pub repositories: HashMap<String, RepositoryConfig>,
    #[serde(default)]
    pub env_file: TargetConfig,
    #[serde(default)]
    pub manifest: TargetConfig,
}

impl Settings {
    /// Layer `other` on top of `self`; any value set in `other` wins.
    // RUST LEARNING: `mut self` takes ownership, so fields can be moved instead of cloned
    pub fn merge(mut self, other: Settings) -> Settings {
        for (id, repo) in other.repositories {
            let entry = self.repositories.entry(id).or_default();
            if repo.remote.is_some() {
                entry.remote = repo.remote;
            }
            if repo.env_key.is_some() {
                entry.env_key = repo.env_key;
            }
        }
        self.env_file = merge_target(self.env_file, other.env_file);
        self.manifest = merge_target(self.manifest, other.manifest);
        self
    }

    /// Fill in a repository's settings. `remote_override` (the command-line
    /// flag) beats `env_remote` (the environment), which beats the files,
    /// which beat the built-in remote.
    pub fn repository(
        &self,
        id: RepoId,
        remote_override: Option<&str>,
        env_remote: Option<String>,
    ) -> Repository {
        let configured = self.repositories.get(id.as_str());

        // RUST LEARNING: `or` / `or_else` chain fallbacks like `a ?? b ?? c` in TypeScript
        let remote = remote_override
            .map(str::to_string)
            .or(env_remote.filter(|remote| !remote.is_empty()))
            .or_else(|| configured.and_then(|c| c.remote.clone()))
            .unwrap_or_else(|| id.default_remote());
        let env_key = configured
            .and_then(|c| c.env_key.clone())
            .unwrap_or_else(|| id.default_env_key().to_string());

        Repository {
            id,
            remote,
            env_key,
        }
    }

    pub fn env_file_target(&self) -> RewriteTarget {
        target_or_default(&self.env_file, DEFAULT_ENV_FILE, DEFAULT_ENV_FILE_PREFIX)
    }

    pub fn manifest_target(&self) -> RewriteTarget {
        target_or_default(&self.manifest, DEFAULT_MANIFEST_FILE, DEFAULT_MANIFEST_PREFIX)
    }
}

fn merge_target(base: TargetConfig, other: TargetConfig) -> TargetConfig {
    TargetConfig {
        path: other.path.or(base.path),
        prefix: other.prefix.or(base.prefix),
    }
}

fn target_or_default(target: &TargetConfig, path: &str, prefix: &str) -> RewriteTarget {
    RewriteTarget {
        path: target.path.clone().unwrap_or_else(|| PathBuf::from(path)),
        prefix: target.prefix.clone().unwrap_or_else(|| prefix.to_string()),
    }
}

pub struct Config {
    pub global: Option<FileConfig<Settings>>,
    pub project: FileConfig<Settings>,
}

impl Config {
    pub fn new() -> Result<Self> {
        // No home directory just means no global layer.
        let global = dirs::home_dir().map(|home| FileConfig::new(home.join(CONFIG_FILE_NAME)));
        let project = FileConfig::new(std::env::current_dir()?.join(CONFIG_FILE_NAME));

        Ok(Self { global, project })
    }

    /// Global settings overlaid with the project's.
    pub fn settings(&self) -> Result<Settings> {
        let global = match &self.global {
            Some(global) => global.load()?,
            None => Settings::default(),
        };
        Ok(global.merge(self.project.load()?))
    }
}
