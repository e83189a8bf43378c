use crate::error::{Error, Result};

/// Supplies a version when `--version` is not given on the command line.
#[cfg_attr(test, mockall::automock)]
pub trait VersionSource {
    fn discover(&self) -> Result<String>;
}

/// An explicit non-empty `--version` wins; otherwise ask `source`.
pub fn resolve_version(
    explicit: Option<String>,
    source: Option<&dyn VersionSource>,
) -> Result<String> {
    match explicit {
        Some(version) if !version.is_empty() => Ok(version),
        _ => match source {
            Some(source) => source.discover(),
            None => Err(Error::VersionUnavailable),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_version_skips_discovery() {
        let mut source = MockVersionSource::new();
        source.expect_discover().never();

        let version = resolve_version(Some("1.2.3".to_string()), Some(&source)).unwrap();
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn test_missing_version_uses_discovery() {
        let mut source = MockVersionSource::new();
        source
            .expect_discover()
            .times(1)
            .returning(|| Ok("4.5.6".to_string()));

        assert_eq!(resolve_version(None, Some(&source)).unwrap(), "4.5.6");
    }

    #[test]
    fn test_empty_version_uses_discovery() {
        let mut source = MockVersionSource::new();
        source
            .expect_discover()
            .times(1)
            .returning(|| Ok("0.1.0".to_string()));

        assert_eq!(
            resolve_version(Some(String::new()), Some(&source)).unwrap(),
            "0.1.0"
        );
    }

    #[test]
    fn test_discovery_errors_propagate() {
        let mut source = MockVersionSource::new();
        source
            .expect_discover()
            .returning(|| Err(Error::VersionUnavailable));

        assert_eq!(
            resolve_version(None, Some(&source)),
            Err(Error::VersionUnavailable)
        );
    }

    #[test]
    fn test_no_source_is_an_error() {
        assert_eq!(resolve_version(None, None), Err(Error::VersionUnavailable));
    }
}
