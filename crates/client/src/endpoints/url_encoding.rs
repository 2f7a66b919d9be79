//! URL encoding utilities for constructing safe API paths.
//!
//! Variable keys and project paths (`group/project`) are interpolated into
//! URL paths. A project path must arrive as a single segment, so `/` is
//! always encoded.
//!
//! # Example
//!
//! ```
//! use gitlab_secrets_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("group/project"), "group%2Fproject");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Everything except unreserved characters (RFC 3986 section 2.3).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use gitlab_secrets_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("API_KEY"), "API_KEY");
/// assert_eq!(encode_path_segment("42"), "42");
/// assert_eq!(encode_path_segment("my group/app"), "my%20group%2Fapp");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
