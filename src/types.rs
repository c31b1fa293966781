//! Configuration types for the generic and HTTP normalizers.

use std::collections::HashSet;

/// Output scheme the HTTP normalizer can be forced to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpScheme {
    /// Plain `http`.
    Http,
    /// TLS `https`.
    Https,
}

impl HttpScheme {
    /// Get the scheme as it appears in a URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpScheme::Http => "http",
            HttpScheme::Https => "https",
        }
    }
}

/// Configuration for [`GenericUrlNormalizer`](crate::GenericUrlNormalizer).
///
/// Immutable once constructed; a normalizer holding it can be shared freely
/// across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericNormalizerConfig {
    /// Collapse every run of two or more adjacent slashes in the path to one.
    pub collapse_adjacent_slashes: bool,
}

impl GenericNormalizerConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for GenericNormalizerConfig {
    fn default() -> Self {
        Self {
            collapse_adjacent_slashes: true,
        }
    }
}

/// Configuration for [`HttpUrlNormalizer`](crate::HttpUrlNormalizer).
///
/// Immutable once constructed. The directory-index name set is matched
/// case-insensitively against path filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpNormalizerConfig {
    /// Collapse every run of two or more adjacent slashes in the path to one.
    pub collapse_adjacent_slashes: bool,
    /// Force the output scheme, regardless of the scheme the input carried.
    pub preferred_scheme: Option<HttpScheme>,
    /// Strip `user:pass@` from the authority.
    pub ignore_user_info: bool,
    /// Filenames (without extension) treated as directory indexes and dropped,
    /// e.g. `index` removes `/a/index.html`, leaving `/a/`.
    pub removable_directory_index_names: HashSet<String>,
    /// Drop the `#fragment` component entirely.
    pub ignore_fragment: bool,
}

impl HttpNormalizerConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a path filename's base name is a removable directory index.
    pub fn is_removable_index(&self, name: &str) -> bool {
        self.removable_directory_index_names
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}

impl Default for HttpNormalizerConfig {
    fn default() -> Self {
        Self {
            collapse_adjacent_slashes: true,
            preferred_scheme: None,
            ignore_user_info: true,
            removable_directory_index_names: ["index", "default"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ignore_fragment: true,
        }
    }
}
