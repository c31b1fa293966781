//! Generic URL normalization pipeline.
//!
//! Decomposes a URL into scheme, authority, and path, resolves relative
//! URLs against a base, canonicalizes percent-encoding, and delegates the
//! final absolute-URL construction to the `url` crate. Scheme-specific
//! normalizers plug into the pipeline through [`NormalizerPhases`].

use url::Url;

use crate::error::NormalizeError;
use crate::types::GenericNormalizerConfig;
use crate::utils::{decode_unreserved, normalize_percent_case};

/// Overridable phases of the normalization pipeline.
///
/// The default method bodies give the generic-URL behavior. A
/// scheme-specific normalizer overrides the phases it cares about and runs
/// the pipeline via [`GenericUrlNormalizer::normalize_with`].
pub trait NormalizerPhases {
    /// Accept or reject the scheme found during decomposition.
    fn validate_scheme(&self, scheme: &str) -> Result<(), NormalizeError> {
        let _ = scheme;
        Ok(())
    }

    /// Rewrite the authority component.
    fn normalize_authority(&self, authority: &str) -> String {
        authority.to_string()
    }

    /// Rewrite the path component. At this stage any query or fragment text
    /// still rides along at the end of the path slice.
    fn normalize_path(&self, path: &str) -> String {
        path.to_string()
    }

    /// Assemble and canonicalize the absolute URL from its components.
    fn build_url(
        &self,
        scheme: &str,
        authority: &str,
        path: &str,
    ) -> Result<String, NormalizeError> {
        build_absolute_url(scheme, authority, path)
    }
}

/// Scheme-agnostic URL normalizer.
///
/// Produces one canonical string for URLs that differ only in
/// representation: scheme and host casing, explicit default ports,
/// dot-segments, adjacent slashes, and percent-encoding variants.
///
/// # Examples
///
/// ```
/// use urlnorm::GenericUrlNormalizer;
///
/// let normalizer = GenericUrlNormalizer::new();
///
/// let url = normalizer.normalize("HTTP://Example.COM:80//a/./b/%7efile", None)?;
/// assert_eq!(url, "http://example.com/a/b/~file");
///
/// // Relative URLs resolve against a base.
/// let page = normalizer.normalize("docs/getting-started", Some("https://example.com"))?;
/// assert_eq!(page, "https://example.com/docs/getting-started");
/// # Ok::<(), urlnorm::NormalizeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenericUrlNormalizer {
    config: GenericNormalizerConfig,
}

impl GenericUrlNormalizer {
    /// Create a normalizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with an explicit configuration.
    pub fn with_config(config: GenericNormalizerConfig) -> Self {
        Self { config }
    }

    /// The configuration this normalizer was built with.
    pub fn config(&self) -> &GenericNormalizerConfig {
        &self.config
    }

    /// Normalize a URL, resolving it against `base_url` when it has no scheme.
    pub fn normalize(
        &self,
        url: &str,
        base_url: Option<&str>,
    ) -> Result<String, NormalizeError> {
        self.normalize_with(url, base_url, self)
    }

    /// Run the pipeline with the given phase overrides.
    pub fn normalize_with<P: NormalizerPhases>(
        &self,
        url: &str,
        base_url: Option<&str>,
        phases: &P,
    ) -> Result<String, NormalizeError> {
        let trimmed = url.trim();

        // Scheme search: one direct attempt, then exactly one retry after
        // joining with the base URL. The separating slash is always
        // inserted; a resulting duplicate is collapsed with the rest.
        let joined;
        let (scheme, remainder) = match trimmed.split_once("://") {
            Some(parts) => parts,
            None => {
                let base = base_url.ok_or(NormalizeError::MissingBaseUrl)?;
                joined = format!("{}/{}", base, trimmed);
                joined
                    .split_once("://")
                    .ok_or(NormalizeError::MissingScheme)?
            }
        };

        phases.validate_scheme(scheme)?;

        let (authority, path) = match remainder.find('/') {
            Some(idx) => remainder.split_at(idx),
            None => (remainder, ""),
        };

        let authority = phases.normalize_authority(authority);

        let path = if path.is_empty() {
            "/".to_string()
        } else if self.config.collapse_adjacent_slashes {
            collapse_adjacent_slashes(path)
        } else {
            path.to_string()
        };
        let path = phases.normalize_path(&path);
        let path = normalize_percent_case(&path);

        phases.build_url(scheme, &authority, &path)
    }
}

impl NormalizerPhases for GenericUrlNormalizer {}

/// Assemble `scheme://authority/path` and canonicalize it as an absolute URL.
///
/// Parsing lowercases the scheme and host, strips the default port, and
/// removes dot-segments. The reconstructed string then has unreserved
/// percent-triplets decoded.
pub(crate) fn build_absolute_url(
    scheme: &str,
    authority: &str,
    path: &str,
) -> Result<String, NormalizeError> {
    let assembled = format!("{}://{}{}", scheme, authority, path);
    let parsed = Url::parse(&assembled)?;

    let mut out = String::with_capacity(assembled.len());
    out.push_str(parsed.scheme());
    out.push_str("://");

    let username = parsed.username();
    if !username.is_empty() {
        out.push_str(username);
        if let Some(password) = parsed.password() {
            out.push(':');
            out.push_str(password);
        }
        out.push('@');
    }

    out.push_str(parsed.host_str().unwrap_or(""));

    if let Some(port) = parsed.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }

    out.push_str(parsed.path());

    if let Some(query) = parsed.query() {
        out.push('?');
        out.push_str(query);
    }

    if let Some(fragment) = parsed.fragment() {
        out.push('#');
        out.push_str(fragment);
    }

    Ok(decode_unreserved(&out))
}

/// Replace every run of two or more slashes with a single slash.
fn collapse_adjacent_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_slash = false;

    for ch in path.chars() {
        if ch == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url() {
        let normalizer = GenericUrlNormalizer::new();
        let result = normalizer.normalize("example.com/page", None);
        assert_eq!(result, Err(NormalizeError::MissingBaseUrl));
    }

    #[test]
    fn test_missing_scheme_after_resolution() {
        let normalizer = GenericUrlNormalizer::new();
        let result = normalizer.normalize("page.html", Some("example.com"));
        assert_eq!(result, Err(NormalizeError::MissingScheme));
    }

    #[test]
    fn test_relative_resolution() {
        let normalizer = GenericUrlNormalizer::new();

        let url = normalizer.normalize("b/c", Some("http://example.com/a")).unwrap();
        assert_eq!(url, "http://example.com/a/b/c");
    }

    #[test]
    fn test_relative_resolution_duplicate_slash() {
        let normalizer = GenericUrlNormalizer::new();

        // Base ending in '/' plus the inserted separator collapses away.
        let url = normalizer.normalize("b", Some("http://example.com/a/")).unwrap();
        assert_eq!(url, "http://example.com/a/b");
    }

    #[test]
    fn test_empty_path_defaults_to_root() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("http://example.com", None).unwrap();
        assert_eq!(url, "http://example.com/");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("  http://example.com/a  ", None).unwrap();
        assert_eq!(url, "http://example.com/a");
    }

    #[test]
    fn test_adjacent_slashes_collapse() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("http://example.com/a//b///c", None).unwrap();
        assert_eq!(url, "http://example.com/a/b/c");
    }

    #[test]
    fn test_adjacent_slashes_preserved_when_disabled() {
        let config = GenericNormalizerConfig {
            collapse_adjacent_slashes: false,
        };
        let normalizer = GenericUrlNormalizer::with_config(config);

        let url = normalizer.normalize("http://example.com/a//b", None).unwrap();
        assert_eq!(url, "http://example.com/a//b");
    }

    #[test]
    fn test_scheme_and_host_lowercased() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("HTTP://EXAMPLE.COM/Path", None).unwrap();
        assert_eq!(url, "http://example.com/Path");
    }

    #[test]
    fn test_default_port_removed() {
        let normalizer = GenericUrlNormalizer::new();

        let http = normalizer.normalize("http://example.com:80/a", None).unwrap();
        assert_eq!(http, "http://example.com/a");

        let https = normalizer.normalize("https://example.com:443/a", None).unwrap();
        assert_eq!(https, "https://example.com/a");

        let custom = normalizer.normalize("http://example.com:8080/a", None).unwrap();
        assert_eq!(custom, "http://example.com:8080/a");
    }

    #[test]
    fn test_dot_segments_removed() {
        let normalizer = GenericUrlNormalizer::new();

        let url = normalizer.normalize("http://example.com/a/./b/../c", None).unwrap();
        assert_eq!(url, "http://example.com/a/c");
    }

    #[test]
    fn test_percent_case_canonicalized() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("http://example.com/foo%2a", None).unwrap();
        assert_eq!(url, "http://example.com/foo%2A");
    }

    #[test]
    fn test_unreserved_triplets_decoded() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("http://example.com/%7Efoo", None).unwrap();
        assert_eq!(url, "http://example.com/~foo");
    }

    #[test]
    fn test_any_scheme_accepted() {
        let normalizer = GenericUrlNormalizer::new();
        let url = normalizer.normalize("ftp://files.example.com/pub", None).unwrap();
        assert_eq!(url, "ftp://files.example.com/pub");
    }

    #[test]
    fn test_empty_authority_is_invalid() {
        let normalizer = GenericUrlNormalizer::new();
        let result = normalizer.normalize("http:///foo", None);
        assert!(matches!(result, Err(NormalizeError::InvalidUrl(_))));
    }

    #[test]
    fn test_query_and_fragment_ride_through() {
        let normalizer = GenericUrlNormalizer::new();

        // The generic layer does not reorder the query or drop the fragment.
        let url = normalizer
            .normalize("http://example.com/d?b=2&a=1#top", None)
            .unwrap();
        assert_eq!(url, "http://example.com/d?b=2&a=1#top");
    }

    #[test]
    fn test_collapse_adjacent_slashes_helper() {
        assert_eq!(collapse_adjacent_slashes("/a//b"), "/a/b");
        assert_eq!(collapse_adjacent_slashes("///"), "/");
        assert_eq!(collapse_adjacent_slashes("/a/b"), "/a/b");
    }
}
