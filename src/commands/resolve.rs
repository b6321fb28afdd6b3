use crate::config::{Config, RepoId, GITHUB_ENV_VAR, REMOTE_ENV_VAR};
use crate::error::TagspliceResult;
use crate::rewrite::append_env_line;
use crate::tag::{GitRemote, TagResolver, VersionSelector};
use clap::Args;
use log::debug;
use std::collections::BTreeMap;
use std::env;

// RUST LEARNING: `#[derive(Args)]` turns struct fields into command-line flags
// - `///` doc comments become the `--help` text
#[derive(Args)]
pub struct ResolveCommand {
    /// Repository to resolve
    #[arg(long, value_enum)]
    repo: RepoId,

    /// Major version (12, 13, 14, 15, 16) or "develop" for the trunk line
    // RUST LEARNING: clap parses this through `VersionSelector`'s `FromStr` impl
    #[arg(long = "version", value_name = "VERSION")]
    selector: VersionSelector,

    /// Git remote to list tags from, overriding configuration and TAGSPLICE_REMOTE
    #[arg(long)]
    remote: Option<String>,
}

impl ResolveCommand {
    pub fn execute(&self, config: &Config) -> TagspliceResult<()> {
        let settings = config.settings()?;
        let repository =
            settings.repository(self.repo, self.remote.as_deref(), env::var(REMOTE_ENV_VAR).ok());
        debug!("Resolving {} {} from {}", repository.id, self.selector, repository.remote);

        let resolver = TagResolver::new(GitRemote::new(repository.remote.as_str()));
        let tag = resolver.resolve(&self.selector)?;

        // RUST LEARNING: BTreeMap serializes as a JSON object: {"frappe":"15.2.0"}
        let mut output = BTreeMap::new();
        output.insert(repository.id.as_str(), tag.as_str());
        println!("{}", serde_json::to_string(&output)?);

        // RUST LEARNING: `var_os` returns Option<OsString>, `filter` drops an empty value
        if let Some(env_file) = env::var_os(GITHUB_ENV_VAR).filter(|path| !path.is_empty()) {
            append_env_line(env_file, &repository.env_key, &tag)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        resolve: ResolveCommand,
    }

    #[test]
    fn test_parse_repo_and_version_flags() {
        let cli = TestCli::try_parse_from(["tagsplice", "--repo", "frappe", "--version", "15"])
            .unwrap();

        assert_eq!(cli.resolve.repo, RepoId::Frappe);
        assert_eq!(cli.resolve.selector, VersionSelector::Major("15"));
        assert_eq!(cli.resolve.remote, None);
    }

    #[test]
    fn test_parse_trunk_version() {
        let cli = TestCli::try_parse_from(["tagsplice", "--repo", "frappe", "--version", "develop"])
            .unwrap();

        assert!(cli.resolve.selector.is_trunk());
    }

    #[test]
    fn test_reject_unknown_repo_and_version() {
        assert!(TestCli::try_parse_from(["tagsplice", "--repo", "erpnext", "--version", "15"]).is_err());
        assert!(TestCli::try_parse_from(["tagsplice", "--repo", "frappe", "--version", "17"]).is_err());
        assert!(TestCli::try_parse_from(["tagsplice", "--repo", "frappe"]).is_err());
    }
}
