//! File parsers for source code and translation files.
//!
//! - `json`: translation file reader/writer
//! - `source`: JS/TS source parser (uses swc for AST generation)

pub mod json;
pub mod source;
