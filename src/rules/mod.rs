//! Lint rules for the canonical translation tree.
//!
//! Each rule is a pure function over the leaves of one translation file and
//! returns its own issue type. `ops::lint` runs the enabled rules and merges
//! their results.
//!
//! ## Module Structure
//!
//! - `helpers`: shared leaf walk and message context construction
//! - `key_charset`: key segments outside the allowed alphabet
//! - `key_equals_value`: values that merely repeat their key
//! - `hardcoded_word`: values spelling out a denylisted word

pub mod hardcoded_word;
pub mod helpers;
pub mod key_charset;
pub mod key_equals_value;

pub use hardcoded_word::{HardcodedWords, check_hardcoded_words};
pub use key_charset::check_key_charset;
pub use key_equals_value::check_key_equals_value;
