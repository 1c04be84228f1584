//! `#XX` escaping of name objects (PDF 32000-1, 7.3.5).

use crate::error::{PdfError, PdfResult};
use crate::parser::lexer::is_name_safe;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Exact length of the escaped form of `raw`.
///
/// Fails on a NUL byte, which is illegal in a name even when escaped.
pub fn escaped_len(raw: &[u8]) -> PdfResult<usize> {
    raw.iter().try_fold(0usize, |len, &b| {
        if b == 0 {
            return Err(PdfError::invalid_name("Null byte in PDF name is illegal"));
        }
        Ok(len + if is_name_safe(b) { 1 } else { 3 })
    })
}

/// Append the escaped form of `raw` to `dst`, replacing its previous contents.
///
/// `dst` is a scratch buffer meant to be reused across calls. On error `dst`
/// is left empty.
pub fn escape_name_into(dst: &mut String, raw: &[u8]) -> PdfResult<()> {
    dst.clear();
    let len = escaped_len(raw)?;
    dst.reserve(len);
    for &b in raw {
        if is_name_safe(b) {
            dst.push(b as char);
        } else {
            dst.push('#');
            dst.push(HEX_DIGITS[(b >> 4) as usize] as char);
            dst.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
        }
    }
    debug_assert_eq!(dst.len(), len);
    Ok(())
}

pub fn escape_name(raw: &[u8]) -> PdfResult<String> {
    let mut out = String::new();
    escape_name_into(&mut out, raw)?;
    Ok(out)
}

/// Decode `#XX` escapes.
///
/// Never fails. A `#` followed by fewer than two bytes is kept literally, and
/// the two bytes after a `#` are always consumed as a hex pair: digits map by
/// subtracting `'0'`, anything from `'A'` up by subtracting `'A' - 10`, and
/// only the low nibble of the second digit is kept. This makes lowercase digits
/// work and maps malformed pairs to some byte instead of rejecting them.
pub fn unescape_name(escaped: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(escaped.len());
    let mut i = 0;
    while i < escaped.len() {
        let b = escaped[i];
        if b == b'#' && i + 2 < escaped.len() {
            let hi = hex_value(escaped[i + 1]);
            let lo = hex_value(escaped[i + 2]);
            out.push((hi << 4) | (lo & 0x0F));
            i += 3;
        } else {
            out.push(b);
            i += 1;
        }
    }
    out
}

#[inline]
fn hex_value(digit: u8) -> u8 {
    if digit < b'A' {
        digit.wrapping_sub(b'0')
    } else {
        digit.wrapping_sub(b'A' - 10)
    }
}
