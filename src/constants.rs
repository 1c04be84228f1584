//! Well-known names and fixed tables used by the resource layer.

use crate::types::PdfName;

/// Dictionary keys
pub mod keys {
    use super::PdfName;

    /// Obsolete procedure set array written for older readers
    pub const PROC_SET: PdfName = PdfName::from_static("ProcSet");
}

/// Resource category tags (PDF 32000-1, table 33)
pub mod categories {
    use super::PdfName;

    pub const EXT_G_STATE: PdfName = PdfName::from_static("ExtGState");
    pub const COLOR_SPACE: PdfName = PdfName::from_static("ColorSpace");
    pub const PATTERN: PdfName = PdfName::from_static("Pattern");
    pub const SHADING: PdfName = PdfName::from_static("Shading");
    pub const X_OBJECT: PdfName = PdfName::from_static("XObject");
    pub const FONT: PdfName = PdfName::from_static("Font");
    pub const PROPERTIES: PdfName = PdfName::from_static("Properties");
}

/// Procedure set names (PDF 32000-1, 14.2)
pub mod proc_set {
    use super::PdfName;

    pub const PDF: PdfName = PdfName::from_static("PDF");
    pub const TEXT: PdfName = PdfName::from_static("Text");
    pub const IMAGE_B: PdfName = PdfName::from_static("ImageB");
    pub const IMAGE_C: PdfName = PdfName::from_static("ImageC");
    pub const IMAGE_I: PdfName = PdfName::from_static("ImageI");

    /// Full set written for a freshly created canvas
    pub const DEFAULT: [PdfName; 5] = [PDF, TEXT, IMAGE_B, IMAGE_C, IMAGE_I];
}
