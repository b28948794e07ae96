use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// OAuth 1.0 `PercentEncode` set: every character outside the RFC 3986
/// unreserved set (`A-Z a-z 0-9 - . _ ~`) is encoded, space included.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `value` for use in an OAuth 1.0 signature base string.
///
/// Space becomes `%20` (never `+`) and non-ASCII characters are encoded
/// byte-by-byte as UTF-8 with uppercase hex. Any deviation here produces a
/// signature the receiving server cannot reproduce.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Quotes `value` as an ANSI-C shell literal (`$'...'`).
///
/// A POSIX-compatible shell evaluating the result yields `value` exactly,
/// embedded whitespace and quote characters included.
pub fn shell_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 3);
    quoted.push_str("$'");
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}
