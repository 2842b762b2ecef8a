use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use thiserror::Error;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        extract::{FileExtraction, KeyExtractor},
        file_scanner::scan_files,
        parsers::source::{Dialect, SourceParseError},
    },
};

/// Failure to extract one source file. Fatal for the run.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {file_path}")]
    Read {
        file_path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] SourceParseError),
}

/// Extraction results of a whole source scan, in traversal order.
pub type SourceScan = Vec<Result<FileExtraction, ScanError>>;

/// Project-level settings shared by every command.
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments and their environment variables (e.g., `NESTING_KEY`)
/// 2. `.lockeyrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl ProjectContext {
    /// Load configuration for the project rooted at `--root` (or the current
    /// directory) and apply command line overrides.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        // A relative "." cannot be walked upwards.
        let search_start = fs::canonicalize(&root_dir)
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;
        let config_result = load_config(&search_start)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .lockeyrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref separator) = common_args.separator {
            config.nesting_separator = separator.clone();
        }
        if let Some(ref input) = common_args.input {
            config.input_file = input.to_string_lossy().to_string();
        }
        if let Some(ref strings_dir) = common_args.strings_dir {
            config.strings_dir = Some(strings_dir.to_string_lossy().to_string());
        }
        config.validate()?;

        Ok(Self {
            config,
            root_dir,
            verbose,
        })
    }

    /// Build a context from an already loaded configuration.
    pub fn from_config(config: Config, root_dir: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            root_dir: root_dir.into(),
            verbose,
        }
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let p = path.as_ref();
        if p.is_absolute() {
            return p.to_path_buf();
        }
        let is_cur_dir = self
            .root_dir
            .components()
            .all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            p.to_path_buf()
        } else {
            let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
            self.root_dir.join(rel)
        }
    }

    pub fn separator(&self) -> &str {
        &self.config.nesting_separator
    }

    /// The canonical translation file.
    pub fn input_file(&self) -> PathBuf {
        self.resolve(&self.config.input_file)
    }

    /// Where `generate` writes, defaulting to the input file.
    pub fn output_file(&self) -> PathBuf {
        match &self.config.output_file {
            Some(output) => self.resolve(output),
            None => self.input_file(),
        }
    }

    /// Directory holding the locale files.
    pub fn strings_dir(&self) -> PathBuf {
        match &self.config.strings_dir {
            Some(dir) => self.resolve(dir),
            None => self
                .input_file()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Whether `path` is one of the configured template files.
    pub fn is_base_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.config.base_files.iter().any(|b| b == name))
    }

    /// Whether `path` is the canonical translation file.
    pub fn is_input_file(&self, path: &Path) -> bool {
        let input = self.input_file();
        match (fs::canonicalize(path), fs::canonicalize(&input)) {
            (Ok(a), Ok(b)) => a == b,
            _ => path == input,
        }
    }

    pub fn extractor(&self) -> Result<KeyExtractor> {
        KeyExtractor::new(&self.config.extra_translation_funcs)
            .context("Invalid name in 'extraTranslationFuncs'")
    }

    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
    }

    /// Search roots: positional arguments when given, else the configured
    /// `searchPaths`.
    pub fn search_paths(&self, overrides: &[String]) -> Vec<PathBuf> {
        let paths = if overrides.is_empty() {
            self.config.search_paths.as_slice()
        } else {
            overrides
        };
        paths.iter().map(|p| self.resolve(p)).collect()
    }

    /// Walk the search roots and extract every scannable file.
    ///
    /// Files are read and parsed in parallel; results come back in traversal
    /// order.
    pub fn extract_sources(&self, search_paths: &[PathBuf]) -> Result<SourceScan> {
        let extractor = self.extractor()?;
        let ignores = self.ignore_patterns()?;

        let scan_result = scan_files(search_paths, &ignores, self.verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if self.verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(extract_files(&scan_result.files, &extractor))
    }
}

/// Read and extract `files` in parallel, keeping their order.
pub fn extract_files(files: &[PathBuf], extractor: &KeyExtractor) -> SourceScan {
    files
        .par_iter()
        .map(|path| {
            let file_path = path.to_string_lossy().to_string();
            let bytes = fs::read(path).map_err(|source| ScanError::Read {
                file_path: file_path.clone(),
                source,
            })?;
            // Invalid UTF-8 is replaced rather than rejected.
            let code = String::from_utf8_lossy(&bytes).into_owned();
            let Some(dialect) = Dialect::from_path(path) else {
                return Ok(FileExtraction {
                    file_path,
                    ..Default::default()
                });
            };
            Ok(extractor.extract(&file_path, code, dialect)?)
        })
        .collect()
}
