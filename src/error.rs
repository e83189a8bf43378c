use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A required `--flag` was not supplied
    #[error("--{flag} is required")]
    MissingArgument { flag: String },

    /// Version string did not split into major.minor.patch
    #[error("version '{version}' must have exactly three dot-separated parts, found {parts}")]
    MalformedVersion { version: String, parts: usize },

    #[error("no --version given and no version discovery is configured")]
    VersionUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_names_flag() {
        let err = Error::MissingArgument {
            flag: "stack-name".to_string(),
        };
        assert_eq!(err.to_string(), "--stack-name is required");
    }

    #[test]
    fn test_malformed_version_message() {
        let err = Error::MalformedVersion {
            version: "1.2".to_string(),
            parts: 2,
        };
        assert!(err.to_string().contains("'1.2'"));
        assert!(err.to_string().contains("found 2"));
    }
}
