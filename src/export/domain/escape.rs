//! Credential escaping for the `ovftool` locator parser.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped inside credentials: everything except ASCII alphanumerics
/// and `-`, `_`, `.`, `~`.
///
/// `ovftool` splits locators on several characters that RFC 3986 allows in
/// user-info (`:`, `/`, `@`, `$`, ...), so those are escaped unconditionally.
const CREDENTIAL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a username or password for embedding in a `vi://` URI.
///
/// Every byte outside the allow-list becomes `%XX` with uppercase hex digits.
/// A literal `%` is escaped as `%25`, so input that is already encoded gets
/// encoded again. Non-ASCII characters are escaped byte by byte.
///
/// # Examples
///
/// ```
/// use vsphere_export::export::domain::escape_credential;
///
/// assert_eq!(escape_credential("asterisk_*_plus_+"), "asterisk_%2A_plus_%2B");
/// assert_eq!(escape_credential("this has spaces"), "this%20has%20spaces");
/// ```
#[must_use]
pub fn escape_credential(raw: &str) -> String {
    utf8_percent_encode(raw, CREDENTIAL_ENCODE_SET).to_string()
}
