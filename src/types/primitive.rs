use crate::encoding::pdf_doc;
use crate::error::{PdfError, PdfResult};
use crate::types::name_codec::{escape_name, escape_name_into, unescape_name};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// A PDF name object, without its leading `/`.
///
/// The name is stored as raw PDFDocEncoding bytes. Equality, ordering and
/// hashing look at those bytes only; the UTF-8 text returned by
/// [`PdfName::as_str`] is derived from them on first use and memoized.
///
/// Names built with [`PdfName::from_static`] borrow a `&'static str` and never
/// allocate. Cloning an owned name shares its storage.
#[derive(Clone)]
pub struct PdfName(Repr);

#[derive(Clone)]
enum Repr {
    Literal(&'static str),
    Owned(Arc<NameData>),
}

struct NameData {
    raw: Box<[u8]>,
    /// Initialized once the display text has been computed. `None` inside
    /// means the text is byte-identical to `raw`.
    utf8: OnceLock<Option<Box<str>>>,
}

impl PdfName {
    /// The empty name. `/` on its own is a legal name token.
    pub const NULL: PdfName = PdfName(Repr::Literal(""));

    /// Wrap a string literal without copying it.
    ///
    /// The literal must be 7-bit ASCII without NUL bytes; in a `const` context
    /// a violation is a compile error.
    pub const fn from_static(name: &'static str) -> Self {
        let bytes = name.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                bytes[i] != 0 && bytes[i] < 0x80 && !(bytes[i] >= 0x18 && bytes[i] <= 0x1F),
                "literal names must be ASCII without NUL or 0x18..=0x1F"
            );
            i += 1;
        }
        PdfName(Repr::Literal(name))
    }

    /// Build a name from UTF-8 text, converting it to PDFDocEncoding.
    ///
    /// Fails with [`PdfError::InvalidName`] when a character has no
    /// PDFDocEncoding code. Empty text gives [`PdfName::NULL`].
    pub fn from_utf8(text: &str) -> PdfResult<Self> {
        if text.is_empty() {
            return Ok(PdfName::NULL);
        }

        let data = match pdf_doc::encode_utf8(text)? {
            Cow::Borrowed(bytes) => NameData {
                raw: bytes.into(),
                utf8: OnceLock::from(None),
            },
            Cow::Owned(bytes) => NameData {
                raw: bytes.into_boxed_slice(),
                utf8: OnceLock::from(Some(text.into())),
            },
        };
        Ok(PdfName(Repr::Owned(Arc::new(data))))
    }

    /// Like [`PdfName::from_utf8`], for text that has not been validated as
    /// UTF-8 yet.
    pub fn from_utf8_bytes(text: &[u8]) -> PdfResult<Self> {
        let text = std::str::from_utf8(text)
            .map_err(|e| PdfError::invalid_name(format!("Name is not valid UTF-8: {}", e)))?;
        Self::from_utf8(text)
    }

    /// Take raw PDFDocEncoding bytes as they are, without validation.
    pub fn from_raw(raw: impl Into<Vec<u8>>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            return PdfName::NULL;
        }
        PdfName(Repr::Owned(Arc::new(NameData {
            raw: raw.into_boxed_slice(),
            utf8: OnceLock::new(),
        })))
    }

    /// Decode the `#XX` escaped form found in a content or object stream,
    /// without the leading `/`.
    pub fn from_escaped(escaped: impl AsRef<[u8]>) -> Self {
        Self::from_raw(unescape_name(escaped.as_ref()))
    }

    /// The raw PDFDocEncoding bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Repr::Literal(s) => s.as_bytes(),
            Repr::Owned(data) => &data.raw,
        }
    }

    /// The name as UTF-8 text.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Literal(s) => *s,
            Repr::Owned(data) => {
                let cached = data.utf8.get_or_init(|| {
                    match pdf_doc::decode_to_utf8(&data.raw) {
                        Cow::Borrowed(_) => None,
                        Cow::Owned(text) => Some(text.into_boxed_str()),
                    }
                });
                match cached {
                    Some(text) => &**text,
                    // `None` is only cached for ASCII-equal bytes, which
                    // always pass the check
                    None => std::str::from_utf8(&data.raw).unwrap_or_default(),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True for the empty name.
    pub fn is_null(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Whether the display text has already been computed.
    pub(crate) fn is_expanded(&self) -> bool {
        match &self.0 {
            Repr::Literal(_) => true,
            Repr::Owned(data) => data.utf8.get().is_some(),
        }
    }

    /// The `#XX` escaped form without the leading `/`. Empty for the null
    /// name.
    pub fn escaped(&self) -> PdfResult<String> {
        escape_name(self.as_bytes())
    }

    /// The full lexical form, e.g. `/A#20B`.
    pub fn to_lexical(&self) -> PdfResult<String> {
        let mut out = String::with_capacity(self.len() + 1);
        out.push('/');
        out.push_str(&self.escaped()?);
        Ok(out)
    }

    /// Write the lexical form to `out`, using `buffer` as scratch space for
    /// the escaped bytes.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, buffer: &mut String) -> PdfResult<()> {
        out.write_all(b"/")?;
        if !self.is_null() {
            escape_name_into(buffer, self.as_bytes())?;
            out.write_all(buffer.as_bytes())?;
        }
        Ok(())
    }
}

impl Default for PdfName {
    fn default() -> Self {
        PdfName::NULL
    }
}

impl PartialEq for PdfName {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for PdfName {}

impl PartialOrd for PdfName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PdfName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for PdfName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with `[u8]` for `Borrow<[u8]>` lookups
        self.as_bytes().hash(state)
    }
}

impl Borrow<[u8]> for PdfName {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for PdfName {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// Comparisons against text look at the display form
impl PartialEq<str> for PdfName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for PdfName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for PdfName {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}

impl fmt::Display for PdfName {
    /// Lexical form. NUL bytes, which cannot be written to a file, show up
    /// as `#00` here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for &b in self.as_bytes() {
            if crate::parser::lexer::is_name_safe(b) {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "#{:02X}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for PdfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PdfName").field(&self.as_str()).finish()
    }
}

impl FromStr for PdfName {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PdfName::from_utf8(s)
    }
}

impl TryFrom<&str> for PdfName {
    type Error = PdfError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PdfName::from_utf8(s)
    }
}

impl TryFrom<String> for PdfName {
    type Error = PdfError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PdfName::from_utf8(&s)
    }
}

impl Serialize for PdfName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PdfName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Cow::<'de, str>::deserialize(deserializer)?;
        PdfName::from_utf8(&text).map_err(serde::de::Error::custom)
    }
}
