pub mod pdf_doc;

pub use pdf_doc::{decode_to_utf8, encode_utf8, is_encodable, PDF_DOC_ENCODING};
