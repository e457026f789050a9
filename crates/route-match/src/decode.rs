/// Percent-decoding of captured path segments
///
/// Decoding never fails: a segment with a malformed escape, or whose escapes
/// decode to invalid UTF-8, is returned exactly as received.

use std::borrow::Cow;

use crate::options::Decoding;

/// Decodes a single path segment (pure function)
///
/// Returns `Cow::Borrowed` when nothing needs decoding or when the segment
/// falls back to its raw text.
///
/// # Examples
///
/// ```
/// use route_match::{decode_segment, Decoding};
///
/// assert_eq!(decode_segment("bar%20baz", Decoding::Percent), "bar baz");
/// assert_eq!(decode_segment("Jos%C3%A9", Decoding::Percent), "José");
///
/// // Malformed input is kept verbatim
/// assert_eq!(decode_segment("test%", Decoding::Percent), "test%");
/// assert_eq!(decode_segment("test%C3", Decoding::Percent), "test%C3");
///
/// // Raw '+' only becomes a space with form decoding
/// assert_eq!(decode_segment("a+b", Decoding::Percent), "a+b");
/// assert_eq!(decode_segment("a+b", Decoding::Form), "a b");
/// ```
pub fn decode_segment(segment: &str, decoding: Decoding) -> Cow<'_, str> {
    if !has_valid_escapes(segment) {
        tracing::debug!(segment, "malformed percent escape, keeping raw segment");
        return Cow::Borrowed(segment);
    }

    let decoded = match decoding {
        Decoding::Form if segment.contains('+') => {
            let spaced = segment.replace('+', " ");
            urlencoding::decode(&spaced).map(|s| Cow::Owned(s.into_owned()))
        }
        _ => urlencoding::decode(segment),
    };

    decoded.unwrap_or_else(|err| {
        tracing::debug!(segment, error = %err, "decoded segment is not UTF-8, keeping raw segment");
        Cow::Borrowed(segment)
    })
}

/// Checks that every `%` starts a two-digit hex escape
fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_segment_is_borrowed() {
        assert!(matches!(
            decode_segment("plain", Decoding::Percent),
            Cow::Borrowed("plain")
        ));
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_segment("test%40example.com", Decoding::Percent), "test@example.com");
        assert_eq!(decode_segment("query%3F%2B%23%26test", Decoding::Percent), "query?+#&test");
        assert_eq!(decode_segment("and%2Fslashes", Decoding::Percent), "and/slashes");
        assert_eq!(decode_segment("%e2%9c%93", Decoding::Percent), "✓");
    }

    #[test]
    fn test_decode_trailing_percent_falls_back() {
        assert_eq!(decode_segment("test%", Decoding::Percent), "test%");
        assert_eq!(decode_segment("test%4", Decoding::Percent), "test%4");
        assert_eq!(decode_segment("%", Decoding::Form), "%");
    }

    #[test]
    fn test_decode_bad_hex_falls_back_for_whole_segment() {
        // One bad escape keeps the valid one undecoded as well
        assert_eq!(decode_segment("a%zzb%20c", Decoding::Percent), "a%zzb%20c");
    }

    #[test]
    fn test_decode_invalid_utf8_falls_back() {
        assert_eq!(decode_segment("test%C3", Decoding::Percent), "test%C3");
        assert_eq!(decode_segment("%FF%FE", Decoding::Form), "%FF%FE");
    }

    #[test]
    fn test_decode_plus_handling() {
        assert_eq!(decode_segment("a+b%2Bc", Decoding::Percent), "a+b+c");
        assert_eq!(decode_segment("a+b%2Bc", Decoding::Form), "a b+c");
    }

    #[test]
    fn test_has_valid_escapes() {
        assert!(has_valid_escapes(""));
        assert!(has_valid_escapes("abc"));
        assert!(has_valid_escapes("%20%aF"));
        assert!(!has_valid_escapes("%2"));
        assert!(!has_valid_escapes("%%20"));
        assert!(!has_valid_escapes("%g0"));
    }
}
