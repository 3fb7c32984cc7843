//! Byte-to-text decoding for observation fields.
//!
//! All decoding is best-effort: undecodable bytes become U+FFFD rather than
//! aborting the pipeline, since observation text is advisory rather than
//! protocol-critical.
//!
//! `decode_padded` reproduces the legacy trimming rule exactly: EVERY null
//! character is stripped, interior ones included, so a field with an
//! embedded mid-string null silently concatenates the text around it.
//! Known quirk, load-bearing for output compatibility.

/// Decode null-padded field bytes into trimmed text.
pub fn decode_padded(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.contains('\0') {
        text.replace('\0', "")
    } else {
        text.into_owned()
    }
}

/// Decode one grid row verbatim, keeping spaces and padding.
///
/// Used by the view cropper, where trailing spaces are significant and
/// column positions must survive the decode.
pub fn decode_row(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nulls_decode_to_empty() {
        assert_eq!(decode_padded(&[0, 0, 0, 0]), "");
        assert_eq!(decode_padded(&[]), "");
    }

    #[test]
    fn trailing_padding_is_stripped() {
        assert_eq!(decode_padded(b"Hello there!\x00\x00"), "Hello there!");
    }

    #[test]
    fn interior_nulls_are_stripped_too() {
        // Legacy rule: interior nulls vanish and the halves concatenate.
        assert_eq!(decode_padded(b"ab\x00cd"), "abcd");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let decoded = decode_padded(&[b'o', b'k', 0xFF, 0xFE]);
        assert!(decoded.starts_with("ok"));
        assert!(
            decoded.contains('\u{FFFD}'),
            "bad bytes should decode to replacement characters"
        );
    }

    #[test]
    fn row_decode_keeps_spaces() {
        assert_eq!(decode_row(b"  @.  "), "  @.  ");
    }

    #[test]
    fn row_decode_keeps_nulls() {
        assert_eq!(decode_row(b"a\x00b"), "a\0b");
    }
}
