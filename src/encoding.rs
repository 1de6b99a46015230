use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::errors::{ConvertError, ConvertResult};

/// Text encodings seen in bank exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1, decoded as its windows-1252 superset (DKB)
    Latin1,
    /// UTF-16 with optional BOM, little endian when none is present (old Shinsei)
    Utf16,
    ShiftJis,
    /// UTF-8 with a leading byte-order mark that is stripped
    Utf8Sig,
    Utf8,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::ShiftJis => "shift-jis",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Utf8 => "utf-8",
        }
    }

    /// Decode the whole input. Malformed sequences are an error, never replaced.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> ConvertResult<Cow<'a, str>> {
        let (encoding, body): (&'static Encoding, &'a [u8]) = match self {
            TextEncoding::Latin1 => (WINDOWS_1252, bytes),
            TextEncoding::ShiftJis => (SHIFT_JIS, bytes),
            TextEncoding::Utf8 => (UTF_8, bytes),
            TextEncoding::Utf8Sig => (UTF_8, bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)),
            TextEncoding::Utf16 => match Encoding::for_bom(bytes) {
                Some((enc, bom_len)) if enc == UTF_16LE || enc == UTF_16BE => (enc, &bytes[bom_len..]),
                _ => (UTF_16LE, bytes),
            },
        };

        encoding
            .decode_without_bom_handling_and_without_replacement(body)
            .ok_or(ConvertError::Decode(*self))
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn utf16(text: &str, bom: Option<&[u8]>, big_endian: bool) -> Vec<u8> {
        let mut out = bom.map(<[u8]>::to_vec).unwrap_or_default();
        for unit in text.encode_utf16() {
            if big_endian {
                out.extend_from_slice(&unit.to_be_bytes());
            } else {
                out.extend_from_slice(&unit.to_le_bytes());
            }
        }
        out
    }

    #[test]
    fn test_decode_latin1() {
        let bytes = b"Auftraggeber / Beg\xFCnstigter";
        let decoded = TextEncoding::Latin1.decode(bytes).unwrap();
        assert_eq!(decoded, "Auftraggeber / Begünstigter");
    }

    #[test]
    fn test_decode_shift_jis() {
        let (bytes, _, _) = SHIFT_JIS.encode("取引日,入出金(円)");
        let decoded = TextEncoding::ShiftJis.decode(&bytes).unwrap();
        assert_eq!(decoded, "取引日,入出金(円)");
    }

    #[test]
    fn test_decode_invalid_shift_jis() {
        // lone lead byte
        let result = TextEncoding::ShiftJis.decode(b"abc\x81");
        assert!(matches!(result, Err(ConvertError::Decode(TextEncoding::ShiftJis))));
    }

    #[rstest]
    #[case(utf16("取引日\t摘要", Some(b"\xFF\xFE".as_slice()), false))]
    #[case(utf16("取引日\t摘要", Some(b"\xFE\xFF".as_slice()), true))]
    #[case(utf16("取引日\t摘要", None, false))]
    fn test_decode_utf16(#[case] bytes: Vec<u8>) {
        let decoded = TextEncoding::Utf16.decode(&bytes).unwrap();
        assert_eq!(decoded, "取引日\t摘要");
    }

    #[test]
    fn test_decode_utf16_odd_length() {
        let result = TextEncoding::Utf16.decode(b"\xFF\xFEa\x00b");
        assert!(matches!(result, Err(ConvertError::Decode(TextEncoding::Utf16))));
    }

    #[rstest]
    #[case(b"\xEF\xBB\xBF\xE5\x8F\x96\xE5\xBC\x95\xE6\x97\xA5".as_slice())]
    #[case(b"\xE5\x8F\x96\xE5\xBC\x95\xE6\x97\xA5".as_slice())]
    fn test_decode_utf8_sig_strips_bom(#[case] bytes: &[u8]) {
        let decoded = TextEncoding::Utf8Sig.decode(bytes).unwrap();
        assert_eq!(decoded, "取引日");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let result = TextEncoding::Utf8.decode(b"\xC3\x28");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(TextEncoding::ShiftJis.to_string(), "shift-jis");
        assert_eq!(TextEncoding::Utf8Sig.to_string(), "utf-8-sig");
    }
}
