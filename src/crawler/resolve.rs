use url::Url;

use super::error::ResolutionError;

/// Resolves `target` against `base` the way a browser resolves an href.
///
/// Absolute targets replace the base entirely, scheme-relative targets keep
/// the scheme, and everything else is merged with the base path. Nothing is
/// trimmed afterwards: fragments, queries and trailing slashes stay as the
/// resolution produces them.
pub fn resolve(base: &str, target: &str) -> Result<String, ResolutionError> {
    let base_url = Url::parse(base).map_err(|source| ResolutionError::InvalidBase {
        base: base.to_string(),
        source,
    })?;

    let resolved = base_url
        .join(target)
        .map_err(|source| ResolutionError::InvalidTarget {
            target: target.to_string(),
            source,
        })?;

    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_replaces_base_path() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(resolve("http://a.com/x/y", "/z")?, "http://a.com/z");
        Ok(())
    }

    #[test]
    fn test_relative_path_is_merged() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(resolve("http://a.com/x/", "z")?, "http://a.com/x/z");
        // without the trailing slash the last segment is replaced
        assert_eq!(resolve("http://a.com/x/y", "z")?, "http://a.com/x/z");
        assert_eq!(resolve("http://a.com/x/y/", "../z")?, "http://a.com/x/z");
        Ok(())
    }

    #[test]
    fn test_absolute_target_wins() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(resolve("http://a.com/", "http://b.com/p")?, "http://b.com/p");
        Ok(())
    }

    #[test]
    fn test_scheme_relative_target() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(resolve("https://a.com/x", "//cdn.b.com/lib")?, "https://cdn.b.com/lib");
        Ok(())
    }

    #[test]
    fn test_query_and_fragment_are_kept() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(resolve("http://a.com/x", "?page=2")?, "http://a.com/x?page=2");
        assert_eq!(resolve("http://a.com/x", "#top")?, "http://a.com/x#top");
        assert_eq!(resolve("http://a.com/x", "/y/#s")?, "http://a.com/y/#s");
        Ok(())
    }

    #[test]
    fn test_empty_target_is_the_base() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(resolve("http://a.com/x?q=1", "")?, "http://a.com/x?q=1");
        Ok(())
    }

    #[test]
    fn test_invalid_base() {
        let err = resolve("not a url", "/z").unwrap_err();
        assert!(matches!(err, ResolutionError::InvalidBase { .. }));
    }

    #[test]
    fn test_invalid_target() {
        let err = resolve("http://a.com/", "http://[::1").unwrap_err();
        assert!(matches!(err, ResolutionError::InvalidTarget { .. }));
    }
}
