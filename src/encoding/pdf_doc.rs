//! PDFDocEncoding (PDF 32000-1, Annex D.2).
//!
//! The single-byte charset used for name objects and for text strings that do
//! not carry a UTF-16 byte order mark. Only a handful of code points differ
//! from ASCII/Latin-1, so conversion is table driven in the decode direction
//! and range checks plus a short reverse scan in the encode direction.

use crate::error::{PdfError, PdfResult};
use std::borrow::Cow;

/// Byte codes that PDFDocEncoding leaves undefined.
///
/// They are decoded to the code point of the same value and encoded back from
/// it, so that conversion stays total over all 256 byte values.
pub const UNDEFINED_CODES: [u8; 3] = [0x7F, 0x9F, 0xAD];

/// Decode table indexed by byte code.
pub static PDF_DOC_ENCODING: [char; 256] = {
    let mut t = ['\0'; 256];
    let mut i = 0;
    while i < 256 {
        // Latin-1 identity, then patch the slots PDFDocEncoding redefines
        t[i] = i as u8 as char;
        i += 1;
    }

    t[0x18] = '\u{02D8}'; // breve
    t[0x19] = '\u{02C7}'; // caron
    t[0x1A] = '\u{02C6}'; // circumflex
    t[0x1B] = '\u{02D9}'; // dotaccent
    t[0x1C] = '\u{02DD}'; // hungarumlaut
    t[0x1D] = '\u{02DB}'; // ogonek
    t[0x1E] = '\u{02DA}'; // ring
    t[0x1F] = '\u{02DC}'; // tilde

    t[0x80] = '\u{2022}'; // bullet
    t[0x81] = '\u{2020}'; // dagger
    t[0x82] = '\u{2021}'; // daggerdbl
    t[0x83] = '\u{2026}'; // ellipsis
    t[0x84] = '\u{2014}'; // emdash
    t[0x85] = '\u{2013}'; // endash
    t[0x86] = '\u{0192}'; // florin
    t[0x87] = '\u{2044}'; // fraction
    t[0x88] = '\u{2039}'; // guilsinglleft
    t[0x89] = '\u{203A}'; // guilsinglright
    t[0x8A] = '\u{2212}'; // minus
    t[0x8B] = '\u{2030}'; // perthousand
    t[0x8C] = '\u{201E}'; // quotedblbase
    t[0x8D] = '\u{201C}'; // quotedblleft
    t[0x8E] = '\u{201D}'; // quotedblright
    t[0x8F] = '\u{2018}'; // quoteleft
    t[0x90] = '\u{2019}'; // quoteright
    t[0x91] = '\u{201A}'; // quotesinglbase
    t[0x92] = '\u{2122}'; // trademark
    t[0x93] = '\u{FB01}'; // fi
    t[0x94] = '\u{FB02}'; // fl
    t[0x95] = '\u{0141}'; // Lslash
    t[0x96] = '\u{0152}'; // OE
    t[0x97] = '\u{0160}'; // Scaron
    t[0x98] = '\u{0178}'; // Ydieresis
    t[0x99] = '\u{017D}'; // Zcaron
    t[0x9A] = '\u{0131}'; // dotlessi
    t[0x9B] = '\u{0142}'; // lslash
    t[0x9C] = '\u{0153}'; // oe
    t[0x9D] = '\u{0161}'; // scaron
    t[0x9E] = '\u{017E}'; // zcaron

    t[0xA0] = '\u{20AC}'; // Euro
    t
};

/// Whether `byte` decodes to the ASCII character with the same value.
#[inline]
pub fn is_ascii_equal(byte: u8) -> bool {
    byte < 0x80 && !(0x18..=0x1F).contains(&byte)
}

/// Decode a single byte.
#[inline]
pub fn decode_byte(byte: u8) -> char {
    PDF_DOC_ENCODING[byte as usize]
}

/// Encode a single character, or `None` when PDFDocEncoding cannot
/// represent it.
pub fn encode_char(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if cp < 0x80 {
        return is_ascii_equal(cp as u8).then_some(cp as u8);
    }
    if (0xA1..=0xFF).contains(&cp) || cp == 0x9F {
        // Latin-1 identity range, including the undefined 0xAD, plus the
        // undefined 0x9F
        return Some(cp as u8);
    }
    // Redefined slots: 0x18..=0x1F and 0x80..=0x9E, 0xA0
    PDF_DOC_ENCODING
        .iter()
        .position(|&c| c == ch)
        .map(|code| code as u8)
}

/// Convert UTF-8 text to PDFDocEncoding bytes.
///
/// Pure ASCII input is returned borrowed and unchanged, which doubles as the
/// "ASCII equal" signal: a [`Cow::Borrowed`] result means the encoded bytes
/// are byte-identical to the UTF-8 input. Fails with
/// [`PdfError::InvalidName`] on the first character outside the charset.
///
/// U+0018..=U+001F are ASCII but not in the charset, because PDFDocEncoding
/// reuses bytes 0x18..=0x1F for diacritics. Text containing them is rejected
/// like any other unrepresentable character.
pub fn encode_utf8(text: &str) -> PdfResult<Cow<'_, [u8]>> {
    let bytes = text.as_bytes();
    if bytes.iter().all(|&b| is_ascii_equal(b)) {
        return Ok(Cow::Borrowed(bytes));
    }

    let mut out = Vec::with_capacity(bytes.len());
    for ch in text.chars() {
        match encode_char(ch) {
            Some(code) => out.push(code),
            None => {
                return Err(PdfError::invalid_name(format!(
                    "Character {:?} (U+{:04X}) is not in the PdfDocEncoding character set",
                    ch, ch as u32
                )))
            }
        }
    }
    Ok(Cow::Owned(out))
}

/// Whether every character of `text` is representable in PDFDocEncoding.
pub fn is_encodable(text: &str) -> bool {
    text.chars().all(|ch| encode_char(ch).is_some())
}

/// Convert PDFDocEncoding bytes to UTF-8 text.
///
/// Returns [`Cow::Borrowed`] when the UTF-8 form is byte-identical to the
/// input, so callers can skip caching a separate copy.
pub fn decode_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    if bytes.iter().all(|&b| is_ascii_equal(b)) {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Cow::Borrowed(text);
        }
    }
    Cow::Owned(bytes.iter().map(|&b| decode_byte(b)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_borrowed() {
        let encoded = encode_utf8("Font").unwrap();
        assert!(matches!(encoded, Cow::Borrowed(b"Font")));

        let decoded = decode_to_utf8(b"XOb12");
        assert!(matches!(decoded, Cow::Borrowed("XOb12")));
    }

    #[test]
    fn test_redefined_slots() {
        assert_eq!(decode_byte(0x18), '\u{02D8}');
        assert_eq!(decode_byte(0x80), '\u{2022}');
        assert_eq!(decode_byte(0x92), '\u{2122}');
        assert_eq!(decode_byte(0xA0), '\u{20AC}');
        assert_eq!(decode_byte(0xE9), 'é');

        assert_eq!(encode_char('€'), Some(0xA0));
        assert_eq!(encode_char('™'), Some(0x92));
        assert_eq!(encode_char('é'), Some(0xE9));
        assert_eq!(encode_char('\u{02DC}'), Some(0x1F));
    }

    #[test]
    fn test_latin1_controls_that_were_redefined_are_rejected() {
        // U+0018 and U+0080 share a byte value with a redefined slot
        assert_eq!(encode_char('\u{0018}'), None);
        assert_eq!(encode_char('\u{0080}'), None);
        assert_eq!(encode_char('\u{00A0}'), None);
        assert!(encode_utf8("A\u{0019}").is_err());
    }

    #[test]
    fn test_undefined_codes_pass_through() {
        for &code in &UNDEFINED_CODES {
            let ch = decode_byte(code);
            assert_eq!(ch as u32, code as u32);
            assert_eq!(encode_char(ch), Some(code));
        }
    }

    #[test]
    fn test_non_ascii_round_trip() {
        let text = "Café–€";
        let encoded = encode_utf8(text).unwrap();
        assert_eq!(&*encoded, &[b'C', b'a', b'f', 0xE9, 0x85, 0xA0][..]);
        assert!(matches!(encoded, Cow::Owned(_)));

        let decoded = decode_to_utf8(&encoded);
        assert_eq!(decoded, text);
        assert!(matches!(decoded, Cow::Owned(_)));
    }

    #[test]
    fn test_unrepresentable_character() {
        let err = encode_utf8("日本").unwrap_err();
        assert_eq!(err.kind(), crate::error::PdfErrorKind::InvalidName);
        assert!(!is_encodable("a\u{1F600}"));
        assert!(is_encodable("Straße"));
    }

    #[test]
    fn test_every_byte_round_trips() {
        for b in 0..=255u8 {
            assert_eq!(encode_char(decode_byte(b)), Some(b), "byte {:#04x}", b);
        }
    }
}
