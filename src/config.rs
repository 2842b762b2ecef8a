use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::split_list;

pub const CONFIG_FILE_NAME: &str = ".lockeyrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Separator joining the segments of a key path.
    #[serde(default = "default_nesting_separator")]
    pub nesting_separator: String,
    /// Canonical (English) translation file.
    #[serde(default = "default_input_file")]
    pub input_file: String,
    /// Where `generate` writes the canonical tree. Defaults to `inputFile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    /// Directory holding the locale files. Defaults to the directory of
    /// `inputFile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings_dir: Option<String>,
    /// Template files in the strings directory that `prune` leaves alone.
    #[serde(default = "default_base_files")]
    pub base_files: Vec<String>,
    /// Translation functions recognized on top of `_t`, `_td` and `_tDom`.
    #[serde(default)]
    pub extra_translation_funcs: Vec<String>,
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub hardcoded_words: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub allowed_hardcoded_keys: Vec<String>,
}

fn default_nesting_separator() -> String {
    "|".to_string()
}

fn default_input_file() -> String {
    "src/i18n/strings/en_EN.json".to_string()
}

fn default_base_files() -> Vec<String> {
    vec!["basefile.json".to_string()]
}

fn default_search_paths() -> Vec<String> {
    ["src", "res"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

/// Accept either a JSON array or a single newline- or comma-delimited string.
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrString {
        List(Vec<String>),
        Text(String),
    }

    std::result::Result::Ok(match ListOrString::deserialize(deserializer)? {
        ListOrString::List(items) => items,
        ListOrString::Text(text) => split_list(&text),
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nesting_separator: default_nesting_separator(),
            input_file: default_input_file(),
            output_file: None,
            strings_dir: None,
            base_files: default_base_files(),
            extra_translation_funcs: Vec::new(),
            search_paths: default_search_paths(),
            ignores: default_ignores(),
            hardcoded_words: Vec::new(),
            allowed_hardcoded_keys: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the separator is empty or any glob pattern in
    /// `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.nesting_separator.is_empty() {
            bail!("'nestingSeparator' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
