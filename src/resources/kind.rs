use crate::constants::categories;
use crate::error::{PdfError, PdfResult};
use crate::types::PdfName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource categories a resource dictionary can hold.
///
/// Discriminants start at 1, matching the numbering used when categories
/// are passed around as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResourceType {
    ExtGState = 1,
    ColorSpace,
    Pattern,
    Shading,
    XObject,
    Font,
    Properties,
}

struct ResourceTypeInfo {
    name: PdfName,
    prefix: &'static str,
}

/// Indexed by `ResourceType as usize - 1`.
static RESOURCE_TYPES: [ResourceTypeInfo; ResourceType::COUNT] = [
    ResourceTypeInfo {
        name: categories::EXT_G_STATE,
        prefix: "ExtG",
    },
    ResourceTypeInfo {
        name: categories::COLOR_SPACE,
        prefix: "CS",
    },
    ResourceTypeInfo {
        name: categories::PATTERN,
        prefix: "Ptrn",
    },
    ResourceTypeInfo {
        name: categories::SHADING,
        prefix: "Shd",
    },
    ResourceTypeInfo {
        name: categories::X_OBJECT,
        prefix: "XOb",
    },
    ResourceTypeInfo {
        name: categories::FONT,
        prefix: "Ft",
    },
    ResourceTypeInfo {
        name: categories::PROPERTIES,
        prefix: "Prop",
    },
];

impl ResourceType {
    pub const COUNT: usize = 7;

    pub const ALL: [ResourceType; ResourceType::COUNT] = [
        ResourceType::ExtGState,
        ResourceType::ColorSpace,
        ResourceType::Pattern,
        ResourceType::Shading,
        ResourceType::XObject,
        ResourceType::Font,
        ResourceType::Properties,
    ];

    /// Zero-based position in [`ResourceType::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    fn info(self) -> &'static ResourceTypeInfo {
        &RESOURCE_TYPES[self.index()]
    }

    /// Key of this category's sub-dictionary, e.g. `/XObject`.
    pub fn name(self) -> &'static PdfName {
        &self.info().name
    }

    /// Prefix of generated resource names, e.g. `XOb` for `/XOb0`.
    pub fn prefix(self) -> &'static str {
        self.info().prefix
    }

    /// Look up a category by its dictionary key.
    pub fn from_name(name: &str) -> PdfResult<Self> {
        ResourceType::ALL
            .into_iter()
            .find(|ty| ty.name() == name)
            .ok_or_else(|| PdfError::InvalidEnumValue {
                kind: "resource type",
                value: name.to_string(),
            })
    }
}

impl TryFrom<u8> for ResourceType {
    type Error = PdfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(ResourceType::ALL[value as usize - 1]),
            _ => Err(PdfError::InvalidEnumValue {
                kind: "resource type",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for ResourceType {
    type Err = PdfError;

    /// Accepts the dictionary key in any letter case, e.g. `xobject`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|ty| ty.name().as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PdfError::InvalidEnumValue {
                kind: "resource type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().as_str())
    }
}
