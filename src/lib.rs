//! lockey - translation key maintenance for `_t()`-style i18n codebases
//!
//! lockey keeps a canonical English translation file in sync with the keys
//! source code actually calls, validates placeholders and tags at each call
//! site, and keeps locale files consistent when keys are renamed or removed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Tree codec, source key extraction and call validation
//! - `issues`: Issue type definitions and reporting
//! - `ops`: Maintenance operators (generate, rekey, prune, lint, usage, sort)
//! - `rules`: Lint rules for translation files
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod ops;
pub mod rules;
pub mod utils;
