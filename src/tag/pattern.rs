use crate::tag::{Result, VersionSelector};
use regex::Regex;
use std::fmt;

/// Matching rule for the tags of one major version line.
///
/// The remote glob, the ref filter and the extraction regex are all built
/// from one prefix (`v15`), so the filter and the parser cannot disagree
/// about which tags belong to the line.
#[derive(Debug, Clone)]
pub struct TagPattern {
    prefix: String,
    filter: Regex,
    capture: Regex,
}

impl TagPattern {
    pub fn new(selector: &VersionSelector) -> Result<Self> {
        let prefix = format!("v{}", selector.as_str());
        // RUST LEARNING: `regex::escape` turns the literal into a safe regex fragment
        // - Both regexes below start from this same fragment
        let major = regex::escape(selector.as_str());

        let filter = Regex::new(&format!("^refs/tags/v{}", major))?;
        // Capture drops the leading `v`; the suffix stops at anything that
        // cannot appear in a plain tag name (peeled refs end in `^{}`).
        let capture = Regex::new(&format!(r"^refs/tags/v({}[^\s/^]*)$", major))?;

        Ok(Self {
            prefix,
            filter,
            capture,
        })
    }

    /// Glob handed to the remote, e.g. `v15*`.
    pub fn glob(&self) -> String {
        format!("{}*", self.prefix)
    }

    /// Coarse filter equivalent to [`TagPattern::glob`], applied to a full ref.
    pub fn matches(&self, reference: &str) -> bool {
        self.filter.is_match(reference)
    }

    /// Extract the tag name (without the leading `v`) from a full ref path.
    // RUST LEARNING: Lifetime `'a` says the returned slice borrows from `reference`
    // - No allocation: the tag name is a view into the ref string
    pub fn extract<'a>(&self, reference: &'a str) -> Option<&'a str> {
        self.capture
            .captures(reference)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

// RUST LEARNING: `Display` is what `{}` and `.to_string()` use
impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(major: &str) -> TagPattern {
        TagPattern::new(&major.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_glob() {
        assert_eq!(pattern("15").glob(), "v15*");
        assert_eq!(pattern("15").to_string(), "v15*");
    }

    #[test]
    fn test_extract_tag_name() {
        let pattern = pattern("15");
        assert_eq!(pattern.extract("refs/tags/v15.2.0"), Some("15.2.0"));
        assert_eq!(pattern.extract("refs/tags/v15"), Some("15"));
        assert_eq!(pattern.extract("refs/tags/v15.1.2-rc1"), Some("15.1.2-rc1"));
    }

    #[test]
    fn test_extract_rejects_malformed_refs() {
        let pattern = pattern("15");
        assert_eq!(pattern.extract("refs/tags/v15.1.0^{}"), None);
        assert_eq!(pattern.extract("refs/tags/v15.1.0/hotfix"), None);
        assert_eq!(pattern.extract("refs/heads/v15.1.0"), None);
        assert_eq!(pattern.extract("v15.1.0"), None);
        assert_eq!(pattern.extract("refs/tags/v14.9.0"), None);
    }

    #[test]
    fn test_filter() {
        let pattern = pattern("15");
        assert!(pattern.matches("refs/tags/v15.0.0"));
        assert!(pattern.matches("refs/tags/v15.1.0^{}"));
        assert!(!pattern.matches("refs/tags/v14.9.0"));
        assert!(!pattern.matches("refs/tags/release-v15"));
        assert!(!pattern.matches("refs/heads/v15.0.0"));
    }

    #[test]
    fn test_every_extractable_ref_passes_the_filter() {
        let pattern = pattern("16");
        for reference in ["refs/tags/v16", "refs/tags/v16.0.0", "refs/tags/v16.1.0-beta.2"] {
            assert!(pattern.extract(reference).is_some());
            assert!(pattern.matches(reference));
        }
    }
}
