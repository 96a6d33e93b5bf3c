//! Lossy text view over program bytes

use std::borrow::Cow;

/// Decode program bytes for pattern search.
///
/// Program images are machine code with text interleaved, so invalid UTF-8 is
/// replaced with U+FFFD instead of failing. NUL bytes survive as `'\0'`, which
/// the embedded-block matcher relies on.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_text_is_borrowed() {
        let text = decode(b"# security.txt\ncontact: a");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "# security.txt\ncontact: a");
    }

    #[test]
    fn test_decode_replaces_invalid_sequences() {
        let bytes = [0x7f, b'E', b'L', b'F', 0xff, 0xfe, 0x00, b'h', b'i'];
        let text = decode(&bytes);

        assert!(text.starts_with("\u{7f}ELF"));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.ends_with("\0hi"));
    }
}
