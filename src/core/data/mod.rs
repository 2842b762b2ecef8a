//! Location types shared by the extractor, the validator and the rules.
//!
//! ## Module Structure
//!
//! - `message`: positions inside translation files (MessageContext, MessageLocation)
//! - `source`: positions inside scanned source files (SourceContext, SourceLocation)

pub mod message;
pub mod source;

pub use message::{MessageContext, MessageLocation};
pub use source::{SourceContext, SourceLocation};
