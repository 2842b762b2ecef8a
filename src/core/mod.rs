//! Translation key tree engine.
//!
//! ## Module Structure
//!
//! - `context`: project settings (ProjectContext) and the parallel source scan
//! - `data`: location types for diagnostics
//! - `extract`: translation call extraction from source files
//! - `file_scanner`: directory walk collecting scannable files
//! - `parsers`: translation file and source file parsers
//! - `tree`: translation tree codec
//! - `validate`: placeholder and tag validation

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod tree;
pub mod validate;

pub use context::{ProjectContext, ScanError, SourceScan};
pub use data::{MessageContext, MessageLocation, SourceContext, SourceLocation};
pub use tree::{KeyPath, Node, Plural, Translation, Tree, TreeError};
