use thiserror::Error;

/// Coarse classification of a [`PdfError`], for callers that only care about
/// the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfErrorKind {
    InvalidName,
    InvalidEnumValue,
    InvalidDataType,
    Parse,
    Io,
    Config,
}

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Invalid data type: expected {expected}, found {found}")]
    InvalidDataType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PdfError {
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        PdfError::InvalidName(reason.into())
    }

    pub fn kind(&self) -> PdfErrorKind {
        match self {
            PdfError::InvalidName(_) => PdfErrorKind::InvalidName,
            PdfError::InvalidEnumValue { .. } => PdfErrorKind::InvalidEnumValue,
            PdfError::InvalidDataType { .. } => PdfErrorKind::InvalidDataType,
            PdfError::Parse(_) => PdfErrorKind::Parse,
            PdfError::Io(_) => PdfErrorKind::Io,
            PdfError::Config(_) => PdfErrorKind::Config,
        }
    }
}

pub type PdfResult<T> = Result<T, PdfError>;
