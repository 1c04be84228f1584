pub mod lexer;

pub use lexer::{name, parse_name};
