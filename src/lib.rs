//! urlnorm - Layered URL canonicalization
//!
//! This crate normalizes the textual representation of a URL so that two
//! differently-formatted URLs denoting the same resource come out as one
//! identical string. Crawlers, deduplication indexes, and cache keys can
//! use the result as a stable, comparable key.
//!
//! # Features
//!
//! - **Generic normalization**: scheme/host lowercasing, default-port
//!   removal, dot-segment removal, adjacent-slash collapsing, relative-URL
//!   resolution against a base, percent-encoding canonicalization
//! - **HTTP normalization**: scheme restriction and optional rewriting,
//!   user-info stripping, directory-index removal, sorted query parameters,
//!   fragment handling
//! - **Deterministic**: same input always produces the same output, and
//!   normalizing twice produces the first result again
//! - **Share-friendly**: normalizers are immutable after construction and
//!   safe to use from many threads at once
//!
//! # Quick Start
//!
//! ```
//! use urlnorm::{GenericUrlNormalizer, HttpUrlNormalizer};
//!
//! // Generic rules only
//! let generic = GenericUrlNormalizer::new();
//! let url = generic.normalize("HTTP://Example.COM:80//a/../b", None)?;
//! assert_eq!(url, "http://example.com/b");
//!
//! // HTTP rules on top: sorted query, index removal, fragment dropped
//! let http = HttpUrlNormalizer::new();
//! let url = http.normalize("http://example.com/docs/index.html?b=2&a=1#top", None)?;
//! assert_eq!(url, "http://example.com/docs/?a=1&b=2");
//!
//! // Relative URLs resolve against a base
//! let url = http.normalize("a/page", Some("http://example.com"))?;
//! assert_eq!(url, "http://example.com/a/page");
//! # Ok::<(), urlnorm::NormalizeError>(())
//! ```
//!
//! # Configuration
//!
//! | Option | Applies to | Effect |
//! |--------|------------|--------|
//! | `collapse_adjacent_slashes` | both | collapse `//+` in the path to `/` |
//! | `preferred_scheme` | HTTP | force the output scheme to http or https |
//! | `ignore_user_info` | HTTP | strip `user:pass@` from the authority |
//! | `removable_directory_index_names` | HTTP | drop matching filenames, leaving the directory |
//! | `ignore_fragment` | HTTP | drop `#fragment` entirely |
//!
//! # Error Handling
//!
//! All normalization returns `Result<String, NormalizeError>`. Common error
//! cases:
//!
//! - A relative URL with no base URL supplied
//! - No scheme delimiter, even after resolving against the base
//! - A malformed absolute URL (e.g. a scheme that requires an authority
//!   without one)
//! - A scheme outside http/https at the HTTP layer

// Re-export the normalizers
pub use generic::{GenericUrlNormalizer, NormalizerPhases};
pub use http::HttpUrlNormalizer;

// Re-export configuration and error types
pub use error::NormalizeError;
pub use types::{GenericNormalizerConfig, HttpNormalizerConfig, HttpScheme};

// Re-export percent-encoding helpers
pub use utils::{decode_unreserved, normalize_percent_case};

// Module declarations
pub mod error;
pub mod generic;
pub mod http;
pub mod types;
pub mod utils;
