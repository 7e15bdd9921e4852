use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{DocLinkError, Result};
use crate::typespec::GrammarOptions;

/// Name of the configuration file at the project root.
pub const CONFIG_FILENAME: &str = "doclink.toml";

/// Default location of the symbol table written by the comment parser.
pub const DEFAULT_SYMBOLS_PATH: &str = ".doclink/symbols.json";

/// Configuration for a documentation project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocLinkConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Symbol table JSON, relative to the project root.
    pub symbols_path: String,
    /// Names whose two-parameter `<K, V>` form is read as a key/value type.
    pub mapping_types: Vec<String>,
    /// Names whose `<...>` form is read as a fixed-order tuple.
    pub tuple_markers: Vec<String>,
    /// Name given to the anonymous `(A, B)` and `<A>` forms.
    pub default_collection: String,
}

impl Default for DocLinkConfig {
    fn default() -> Self {
        let grammar = GrammarOptions::default();
        Self {
            version: 1,
            symbols_path: DEFAULT_SYMBOLS_PATH.to_string(),
            mapping_types: grammar.mapping_types,
            tuple_markers: grammar.tuple_markers,
            default_collection: grammar.default_collection,
        }
    }
}

impl DocLinkConfig {
    /// Grammar options for the type parser.
    pub fn grammar_options(&self) -> GrammarOptions {
        GrammarOptions {
            mapping_types: self.mapping_types.clone(),
            tuple_markers: self.tuple_markers.clone(),
            default_collection: self.default_collection.clone(),
        }
    }

    /// Absolute location of the symbol table for a project rooted at `project_root`.
    pub fn symbols_file(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.symbols_path)
    }
}

/// Returns the path to `doclink.toml` within the given project root.
pub fn get_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILENAME)
}

/// Loads the configuration from disk.
///
/// If the configuration file does not exist, returns the default configuration.
pub fn load_config(project_root: &Path) -> Result<DocLinkConfig> {
    let config_path = get_config_path(project_root);

    if !config_path.exists() {
        return Ok(DocLinkConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| DocLinkError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: DocLinkConfig = toml::from_str(&contents).map_err(|e| DocLinkError::Config {
        message: format!(
            "failed to parse config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    Ok(config)
}

/// Saves the configuration to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final location.
pub fn save_config(project_root: &Path, config: &DocLinkConfig) -> Result<()> {
    fs::create_dir_all(project_root).map_err(|e| DocLinkError::Config {
        message: format!(
            "failed to create project directory '{}': {}",
            project_root.display(),
            e
        ),
    })?;

    let config_path = get_config_path(project_root);
    let tmp_path = config_path.with_extension("toml.tmp");

    let contents = toml::to_string_pretty(config).map_err(|e| DocLinkError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &contents).map_err(|e| DocLinkError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, &config_path).map_err(|e| DocLinkError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}
