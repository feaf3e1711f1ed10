//! Escaping for text content and attribute values.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left intact by [`percent_encode_text`]: the URL userinfo
/// password set (unreserved plus sub-delims).
const PASSWORD_ALLOWED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

/// Escape special HTML characters in text content.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use trellis::element::escape_html;
///
/// assert_eq!(escape_html("<b>"), "&lt;b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let mut result = String::with_capacity(s.len() + s.len() / 8 + 4);
    result.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape an attribute value for use inside double quotes.
///
/// Single quotes are left alone since values are always double-quoted.
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Percent-encode text, keeping only URL password-safe characters.
pub fn percent_encode_text(s: &str) -> String {
    utf8_percent_encode(s, PASSWORD_ALLOWED).to_string()
}
