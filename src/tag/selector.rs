use crate::tag::TagError;
use std::fmt;
use std::str::FromStr; // RUST LEARNING: Trait behind `"15".parse::<VersionSelector>()`

/// Literal that selects the unstable development line instead of a release.
pub const TRUNK: &str = "develop";

/// Major version lines that can be requested by number.
pub const SUPPORTED_MAJORS: [&str; 5] = ["12", "13", "14", "15", "16"];

// RUST LEARNING: `&'static str` borrows from the SUPPORTED_MAJORS table itself
// - A selector can only ever hold one of the known literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSelector {
    Major(&'static str),
    Trunk,
}

impl VersionSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionSelector::Major(major) => major,
            VersionSelector::Trunk => TRUNK,
        }
    }

    // RUST LEARNING: `matches!` is a boolean shortcut for a one-arm `match`
    pub fn is_trunk(&self) -> bool {
        matches!(self, VersionSelector::Trunk)
    }
}

// RUST LEARNING: Implementing FromStr is what makes `.parse()` work for our type
// - clap also uses it to parse the `--version` flag
impl FromStr for VersionSelector {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == TRUNK {
            return Ok(VersionSelector::Trunk);
        }

        SUPPORTED_MAJORS
            .into_iter()
            .find(|major| *major == s)
            .map(VersionSelector::Major)
            .ok_or_else(|| TagError::InvalidSelector(s.to_string()))
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
