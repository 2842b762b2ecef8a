//! Maintenance operators over the canonical tree and its locale siblings.
//!
//! Operators compute their result in memory and leave file output and
//! console reporting to the command layer.
//!
//! - `generate`: rebuild the canonical tree from a source scan
//! - `rekey`: move or copy a key across every translation file
//! - `prune`: drop locale entries the canonical tree no longer has
//! - `lint`: run the lint rules over the canonical file
//! - `usage`: reverse lookup of which files consume which keys
//! - `sort`: alphabetical key ordering

pub mod generate;
pub mod lint;
pub mod prune;
pub mod rekey;
pub mod sort;
pub mod usage;
