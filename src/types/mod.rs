pub mod name_codec;
pub mod object;
pub mod primitive;
pub mod reference;

pub use name_codec::{escape_name, escape_name_into, unescape_name};
pub use object::*;
pub use primitive::*;
pub use reference::*;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PdfValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Name(PdfName),
    Array(PdfArray),
    Dictionary(PdfDictionary),
    Reference(PdfReference),
}

impl PdfValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PdfValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PdfValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&PdfName> {
        match self {
            PdfValue::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&PdfArray> {
        match self {
            PdfValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&PdfDictionary> {
        match self {
            PdfValue::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut PdfDictionary> {
        match self {
            PdfValue::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&PdfReference> {
        match self {
            PdfValue::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Follow a reference through `resolver`; direct values are returned as
    /// they are.
    pub fn resolve<'a, R>(&'a self, resolver: &'a R) -> Option<&'a PdfValue>
    where
        R: IndirectResolver + ?Sized,
    {
        match self {
            PdfValue::Reference(r) => resolver.resolve(r),
            direct => Some(direct),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PdfValue::Null => "null",
            PdfValue::Boolean(_) => "boolean",
            PdfValue::Integer(_) => "integer",
            PdfValue::Real(_) => "real",
            PdfValue::Name(_) => "name",
            PdfValue::Array(_) => "array",
            PdfValue::Dictionary(_) => "dictionary",
            PdfValue::Reference(_) => "reference",
        }
    }
}

impl fmt::Display for PdfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfValue::Null => write!(f, "null"),
            PdfValue::Boolean(b) => write!(f, "{}", b),
            PdfValue::Integer(i) => write!(f, "{}", i),
            PdfValue::Real(r) => write!(f, "{}", r),
            PdfValue::Name(n) => write!(f, "{}", n),
            PdfValue::Array(a) => write!(f, "{}", a),
            PdfValue::Dictionary(d) => write!(f, "{}", d),
            PdfValue::Reference(r) => write!(f, "{}", r),
        }
    }
}

impl From<bool> for PdfValue {
    fn from(b: bool) -> Self {
        PdfValue::Boolean(b)
    }
}

impl From<i64> for PdfValue {
    fn from(i: i64) -> Self {
        PdfValue::Integer(i)
    }
}

impl From<f64> for PdfValue {
    fn from(r: f64) -> Self {
        PdfValue::Real(r)
    }
}

impl From<PdfName> for PdfValue {
    fn from(name: PdfName) -> Self {
        PdfValue::Name(name)
    }
}

impl From<PdfArray> for PdfValue {
    fn from(array: PdfArray) -> Self {
        PdfValue::Array(array)
    }
}

impl From<PdfDictionary> for PdfValue {
    fn from(dict: PdfDictionary) -> Self {
        PdfValue::Dictionary(dict)
    }
}

impl From<PdfReference> for PdfValue {
    fn from(reference: PdfReference) -> Self {
        PdfValue::Reference(reference)
    }
}
