//! Byte classes of the PDF lexical grammar (PDF 32000-1, 7.2.2) and the name
//! token recognizer.

use crate::error::{PdfError, PdfResult};
use crate::types::PdfName;
use nom::{
    bytes::complete::take_while,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map},
    sequence::{delimited, preceded},
    IResult,
};

pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b'\0')
}

pub fn is_delimiter(c: u8) -> bool {
    matches!(
        c,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

pub fn is_regular_char(c: u8) -> bool {
    !is_whitespace(c) && !is_delimiter(c)
}

/// Visible ASCII, excluding the space.
pub fn is_printable(c: u8) -> bool {
    c > b' ' && c < 0x7F
}

/// Whether a byte may appear unescaped inside a written name.
pub fn is_name_safe(c: u8) -> bool {
    is_regular_char(c) && is_printable(c) && c != b'#'
}

/// Recognize a `/Name` token, decoding `#XX` escapes.
///
/// The name runs until the next whitespace or delimiter; a bare `/` yields
/// the empty name.
pub fn name(input: &[u8]) -> IResult<&[u8], PdfName> {
    preceded(
        char('/'),
        map(take_while(is_regular_char), |raw: &[u8]| {
            PdfName::from_escaped(raw)
        }),
    )(input)
}

/// Parse `input` as exactly one name token, allowing surrounding whitespace.
pub fn parse_name(input: &[u8]) -> PdfResult<PdfName> {
    all_consuming(delimited(multispace0, name, multispace0))(input)
        .map(|(_, name)| name)
        .map_err(|e| PdfError::Parse(format!("Expected a single name token: {:?}", e)))
}
