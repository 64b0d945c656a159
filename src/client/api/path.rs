use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::client::constant::API_BASE;

/// Characters left untouched in a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds `/api/<endpoint>/<segment>` with the segment percent-encoded.
pub fn endpoint_with_segment(endpoint: &str, segment: &str) -> String {
    format!(
        "{}/{}/{}",
        API_BASE,
        endpoint,
        utf8_percent_encode(segment, SEGMENT)
    )
}

pub fn endpoint(endpoint: &str) -> String {
    format!("{}/{}", API_BASE, endpoint)
}
