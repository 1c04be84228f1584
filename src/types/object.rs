use crate::encoding::pdf_doc;
use crate::types::{PdfName, PdfValue};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Anything that can be used to look up a dictionary key.
///
/// Keys are compared on raw PDFDocEncoding bytes. Text keys are converted
/// first; text with no PDFDocEncoding form cannot match any key.
pub trait AsNameKey {
    fn raw_key(&self) -> Option<Cow<'_, [u8]>>;
}

impl AsNameKey for PdfName {
    fn raw_key(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self.as_bytes()))
    }
}

impl AsNameKey for [u8] {
    fn raw_key(&self) -> Option<Cow<'_, [u8]>> {
        Some(Cow::Borrowed(self))
    }
}

impl AsNameKey for str {
    fn raw_key(&self) -> Option<Cow<'_, [u8]>> {
        pdf_doc::encode_utf8(self).ok()
    }
}

impl AsNameKey for String {
    fn raw_key(&self) -> Option<Cow<'_, [u8]>> {
        self.as_str().raw_key()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfArray {
    elements: Vec<PdfValue>,
}

impl PdfArray {
    pub fn new() -> Self {
        PdfArray {
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, value: impl Into<PdfValue>) {
        self.elements.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&PdfValue> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PdfValue> {
        self.elements.iter()
    }
}

impl fmt::Display for PdfArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<PdfValue>> for PdfArray {
    fn from(elements: Vec<PdfValue>) -> Self {
        PdfArray { elements }
    }
}

impl FromIterator<PdfValue> for PdfArray {
    fn from_iter<I: IntoIterator<Item = PdfValue>>(iter: I) -> Self {
        PdfArray {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PdfArray {
    type Item = &'a PdfValue;
    type IntoIter = std::slice::Iter<'a, PdfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Insertion-ordered name-to-value map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfDictionary {
    entries: IndexMap<PdfName, PdfValue>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        PdfDictionary {
            entries: IndexMap::new(),
        }
    }

    /// Add or replace an entry, returning the replaced value.
    pub fn insert(&mut self, key: PdfName, value: impl Into<PdfValue>) -> Option<PdfValue> {
        self.entries.insert(key, value.into())
    }

    pub fn get<K: AsNameKey + ?Sized>(&self, key: &K) -> Option<&PdfValue> {
        let raw = key.raw_key()?;
        self.entries.get(&*raw)
    }

    pub fn get_mut<K: AsNameKey + ?Sized>(&mut self, key: &K) -> Option<&mut PdfValue> {
        let raw = key.raw_key()?;
        self.entries.get_mut(&*raw)
    }

    /// Remove an entry, keeping the order of the remaining ones.
    pub fn remove<K: AsNameKey + ?Sized>(&mut self, key: &K) -> Option<PdfValue> {
        let raw = key.raw_key()?;
        self.entries.shift_remove(&*raw)
    }

    pub fn contains_key<K: AsNameKey + ?Sized>(&self, key: &K) -> bool {
        key.raw_key()
            .is_some_and(|raw| self.entries.contains_key(&*raw))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PdfName, &PdfValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PdfName> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &PdfValue> {
        self.entries.values()
    }

    pub fn entry(&mut self, key: PdfName) -> indexmap::map::Entry<'_, PdfName, PdfValue> {
        self.entries.entry(key)
    }
}

impl<'a> IntoIterator for &'a PdfDictionary {
    type Item = (&'a PdfName, &'a PdfValue);
    type IntoIter = indexmap::map::Iter<'a, PdfName, PdfValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for PdfDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", key, value)?;
        }
        write!(f, ">>")
    }
}

impl FromIterator<(PdfName, PdfValue)> for PdfDictionary {
    fn from_iter<I: IntoIterator<Item = (PdfName, PdfValue)>>(iter: I) -> Self {
        PdfDictionary {
            entries: iter.into_iter().collect(),
        }
    }
}
