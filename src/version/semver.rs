use std::fmt;

use crate::error::{Error, Result};

/// Major, minor and patch components of a dotted version string.
///
/// Components are kept as text; nothing checks that they are numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemverTriple {
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl SemverTriple {
    pub fn parse(version: &str) -> Result<Self> {
        let parts = version.split('.').collect::<Vec<&str>>();

        match parts.as_slice() {
            [major, minor, patch] => Ok(SemverTriple {
                major: major.to_string(),
                minor: minor.to_string(),
                patch: patch.to_string(),
            }),
            _ => Err(Error::MalformedVersion {
                version: version.to_string(),
                parts: parts.len(),
            }),
        }
    }

    /// Suffix used in the versioned stack name, e.g. `v1-2`.
    pub fn stack_suffix(&self) -> String {
        format!("v{}-{}", self.major, self.minor)
    }

    /// Public endpoint path served by the versioned stack, e.g. `/v1.2`.
    pub fn endpoint(&self) -> String {
        format!("/v{}.{}", self.major, self.minor)
    }

    pub fn parameter_overrides(&self) -> [String; 3] {
        [
            format!("Major={}", self.major),
            format!("Minor={}", self.minor),
            format!("Patch={}", self.patch),
        ]
    }
}

impl fmt::Display for SemverTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
