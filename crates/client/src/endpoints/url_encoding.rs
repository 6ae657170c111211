//! Percent-encoding for admin API path segments.
//!
//! Realm names, client UUIDs, and object ids are interpolated into URL paths.
//! Realm names are user-chosen and may contain characters that would otherwise
//! change the path structure (`/`), start a query (`?`), or be decoded twice (`%`).
//!
//! # Example
//!
//! ```
//! use keycloak_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("tenant/a"), "tenant%2Fa");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 3.3
/// plus the characters that are reserved elsewhere in a URL).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
