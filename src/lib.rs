//! pdf-resources: PDF name objects and resource dictionaries.
//!
//! This library offers:
//! - `PdfName`, a name value stored as PDFDocEncoding bytes with lazily
//!   derived UTF-8 text
//! - `#XX` escaping and unescaping of the lexical name form
//! - PDFDocEncoding conversion to and from UTF-8
//! - `PdfResources`, per-category resource dictionaries with collision-free
//!   name generation
//!
//! Copyright (C) 2025 Marc Rivero López
//! Licensed under the GNU General Public License v3.0
//! See LICENSE file for details

/// Well-known names and fixed tables.
pub mod constants;
/// PDFDocEncoding conversion.
pub mod encoding;
/// Error types.
pub mod error;
/// Lexical byte classes and the name token recognizer.
pub mod parser;
/// Resource dictionaries and name generation.
pub mod resources;
/// Core PDF data types (names, dictionaries, references).
pub mod types;

pub use error::{PdfError, PdfErrorKind, PdfResult};
pub use resources::{PdfResources, ResourceType, ResourcesConfig};
pub use types::{
    AsNameKey, IndirectResolver, IndirectResolverMut, ObjectId, ObjectStore, PdfArray,
    PdfDictionary, PdfName, PdfReference, PdfValue,
};
