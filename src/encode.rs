//! RFC 3986 percent-encoding tuned to the OAuth 1.0 signature rules.
//!
//! OAuth 1.0 (RFC 5849 §3.6) leaves exactly the RFC 3986 unreserved characters
//! (`A-Z a-z 0-9 - . _ ~`) unescaped and escapes every other byte as an uppercase
//! `%XX` sequence. The same helper encodes parameter names, parameter values, the
//! request URL, and both halves of the HMAC signing key.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// OAuth unreserved characters: everything outside `A-Z a-z 0-9 - . _ ~` is escaped.
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes a string for use inside an OAuth base string or signing key.
///
/// Returns a borrowed view when no byte requires escaping.
pub fn oauth_encode(input: &str) -> Cow<'_, str> {
	utf8_percent_encode(input, OAUTH_ENCODE_SET).into()
}
