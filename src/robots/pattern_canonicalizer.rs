//! Escape normalization for Allow/Disallow values.
//!
//! Raw bytes outside US-ASCII are percent-escaped (`/SanJoséSellers` becomes
//! `/SanJos%C3%A9Sellers`) and existing escapes are upper-cased (`%aa`
//! becomes `%AA`), so patterns compare byte-for-byte with canonical URL
//! paths.

use std::borrow::Cow;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the hex digit pair of a `%XX` escape starting at `index`.
fn escape_at(bytes: &[u8], index: usize) -> Option<(u8, u8)> {
    match bytes.get(index..index + 3) {
        Some(&[b'%', high, low]) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit() => {
            Some((high, low))
        }
        _ => None,
    }
}

fn needs_canonicalization(bytes: &[u8]) -> bool {
    let mut index = 0;
    while index < bytes.len() {
        if let Some((high, low)) = escape_at(bytes, index) {
            if high.is_ascii_lowercase() || low.is_ascii_lowercase() {
                return true;
            }
            index += 3;
        } else if bytes[index] >= 0x80 {
            return true;
        } else {
            index += 1;
        }
    }
    false
}

/// Canonicalizes a directive value into a match pattern.
///
/// Each high-bit byte is escaped on its own, so a two-byte character turns
/// into two `%XX` triples. Values that need no change are borrowed as-is.
pub fn canonicalize(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    if !needs_canonicalization(bytes) {
        return Cow::Borrowed(value);
    }

    let mut canonical = String::with_capacity(bytes.len() + bytes.len() / 2);
    let mut index = 0;
    while index < bytes.len() {
        if let Some((high, low)) = escape_at(bytes, index) {
            canonical.push('%');
            canonical.push(char::from(high.to_ascii_uppercase()));
            canonical.push(char::from(low.to_ascii_uppercase()));
            index += 3;
            continue;
        }

        let byte = bytes[index];
        if byte >= 0x80 {
            canonical.push('%');
            canonical.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            canonical.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        } else {
            canonical.push(char::from(byte));
        }
        index += 1;
    }

    Cow::Owned(canonical)
}
