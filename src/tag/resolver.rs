use crate::tag::{RemoteTagSource, Result, TagError, TagPattern, VersionSelector, TRUNK};
use log::debug;

// RUST LEARNING: Generic struct - `S` is whatever tag source the caller plugs in
// - Production code uses `GitRemote`, tests use an in-memory source
/// Turns a version selector into the concrete tag to deploy.
pub struct TagResolver<S> {
    source: S,
}

impl<S: RemoteTagSource> TagResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve `selector` to a tag name such as `15.2.0`, or to the trunk
    /// literal when the development line is requested.
    ///
    /// Every call queries the source again; nothing is memoized.
    pub fn resolve(&self, selector: &VersionSelector) -> Result<String> {
        if selector.is_trunk() {
            debug!("Trunk selector requested, skipping remote lookup");
            return Ok(TRUNK.to_string());
        }

        let pattern = TagPattern::new(selector)?;
        debug!("Resolving latest tag for {}", pattern);

        let refs = self.source.list_tags(&pattern)?;
        // The remote sorts ascending, so the last ref is the highest version.
        let reference = refs.last().ok_or_else(|| TagError::NotFound {
            pattern: pattern.to_string(),
        })?;
        debug!("Latest matching ref: {}", reference);

        pattern
            .extract(reference)
            .map(|tag| tag.to_string())
            .ok_or_else(|| TagError::Parse {
                reference: reference.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// In-memory remote that filters like `git ls-remote <glob>` and counts queries.
    struct StaticTagSource {
        refs: Vec<String>,
        queries: Cell<usize>,
    }

    impl StaticTagSource {
        fn new(tags: &[&str]) -> Self {
            Self {
                refs: tags.iter().map(|tag| format!("refs/tags/{}", tag)).collect(),
                queries: Cell::new(0),
            }
        }

        fn from_refs(refs: &[&str]) -> Self {
            Self {
                refs: refs.iter().map(|r| r.to_string()).collect(),
                queries: Cell::new(0),
            }
        }
    }

    impl RemoteTagSource for StaticTagSource {
        fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>> {
            self.queries.set(self.queries.get() + 1);
            Ok(self
                .refs
                .iter()
                .filter(|reference| pattern.matches(reference))
                .cloned()
                .collect())
        }
    }

    fn selector(value: &str) -> VersionSelector {
        value.parse().unwrap()
    }

    #[test]
    fn test_trunk_skips_remote() {
        let source = StaticTagSource::new(&["v15.0.0"]);
        let resolver = TagResolver::new(&source);

        let tag = resolver.resolve(&selector("develop")).unwrap();

        assert_eq!(tag, "develop");
        assert_eq!(source.queries.get(), 0);
    }

    #[test]
    fn test_resolves_highest_matching_tag() {
        let source = StaticTagSource::new(&["v14.9.0", "v15.0.0", "v15.2.0", "v16.0.0"]);
        let resolver = TagResolver::new(&source);

        let tag = resolver.resolve(&selector("15")).unwrap();

        assert_eq!(tag, "15.2.0");
        assert_eq!(source.queries.get(), 1);
    }

    #[test]
    fn test_trusts_remote_order() {
        // Order comes from the remote; the resolver must not re-sort.
        let source = StaticTagSource::new(&["v15.10.0", "v15.9.0"]);
        let resolver = TagResolver::new(&source);

        assert_eq!(resolver.resolve(&selector("15")).unwrap(), "15.9.0");
    }

    #[test]
    fn test_not_found() {
        let source = StaticTagSource::new(&["v12.1.0", "v14.9.0", "v15.0.0"]);
        let resolver = TagResolver::new(&source);

        match resolver.resolve(&selector("13")) {
            Err(TagError::NotFound { pattern }) => assert_eq!(pattern, "v13*"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_peeled_ref_is_parse_error() {
        // A source that leaks the `^{}` entry of an annotated tag.
        let source = StaticTagSource::from_refs(&["refs/tags/v15.0.0", "refs/tags/v15.1.0^{}"]);
        let resolver = TagResolver::new(&source);

        match resolver.resolve(&selector("15")) {
            Err(TagError::Parse { reference }) => {
                assert_eq!(reference, "refs/tags/v15.1.0^{}")
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_tag_name_is_parse_error() {
        let source = StaticTagSource::from_refs(&["refs/tags/v15.2.0", "refs/tags/v15.3.0/hotfix"]);
        let resolver = TagResolver::new(&source);

        assert!(matches!(
            resolver.resolve(&selector("15")),
            Err(TagError::Parse { .. })
        ));
    }

    #[test]
    fn test_resolve_is_repeatable_without_memoization() {
        let source = StaticTagSource::new(&["v16.0.0", "v16.1.3"]);
        let resolver = TagResolver::new(&source);

        let first = resolver.resolve(&selector("16")).unwrap();
        let second = resolver.resolve(&selector("16")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "16.1.3");
        assert_eq!(source.queries.get(), 2);
    }

    #[test]
    fn test_source_errors_propagate() {
        struct FailingSource;

        impl RemoteTagSource for FailingSource {
            fn list_tags(&self, _pattern: &TagPattern) -> Result<Vec<String>> {
                Err(TagError::GitCommand("connection refused".to_string()))
            }
        }

        let resolver = TagResolver::new(FailingSource);

        assert!(matches!(
            resolver.resolve(&selector("14")),
            Err(TagError::GitCommand(_))
        ));
    }
}
