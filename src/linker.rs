use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{load_config, DocLinkConfig};
use crate::errors::{ParseError, Result};
use crate::reference::{resolve_with_display_text, split_see_body, ReferenceTag};
use crate::registry::{RegistryQuery, SymbolCache, SymbolStore};
use crate::typespec::{TypeNode, TypeParser};

/// Entry point for the generation layer: one type parser and one symbol
/// table per documentation run.
pub struct DocLinker {
    config: DocLinkConfig,
    parser: TypeParser,
    symbols: Arc<SymbolStore>,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl DocLinker {
    /// Creates a linker over an already populated symbol table.
    pub fn new(config: DocLinkConfig, symbols: Arc<SymbolStore>) -> Self {
        let parser = TypeParser::with_options(config.grammar_options());
        Self {
            config,
            parser,
            symbols,
        }
    }

    /// Opens the project at `project_root`: reads `doclink.toml` and the
    /// symbol table it points at, sharing the table through [`SymbolCache`].
    pub fn open(project_root: &Path) -> Result<Self> {
        let config = load_config(project_root)?;
        let symbols = SymbolCache::load_cached(&config.symbols_file(project_root))?;
        Ok(Self::new(config, symbols))
    }

    pub fn config(&self) -> &DocLinkConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolStore {
        &self.symbols
    }

    pub fn query(&self) -> RegistryQuery<'_> {
        RegistryQuery::new(&*self.symbols)
    }
}

// ---------------------------------------------------------------------------
// Annotations
// ---------------------------------------------------------------------------

impl DocLinker {
    /// Parses a type specifier attached to a parameter or return value.
    pub fn parse_type(&self, text: &str) -> std::result::Result<Vec<TypeNode>, ParseError> {
        self.parser.parse(text)
    }

    /// Parses a type specifier, logging and skipping it when it is malformed.
    pub fn parse_type_lenient(&self, text: &str) -> Vec<TypeNode> {
        self.parser.parse_or_warn(text)
    }

    /// Classifies and resolves a reference written inside `parent_namespace`.
    pub fn resolve(&self, native_text: &str, parent_namespace: &str) -> ReferenceTag {
        resolve_with_display_text(native_text, parent_namespace, None, &self.query())
    }

    /// Resolves a raw see-tag body, keeping any text after the reference as
    /// its display text.
    pub fn resolve_see(&self, body: &str, parent_namespace: &str) -> ReferenceTag {
        let (reference, display_text) = split_see_body(body);
        resolve_with_display_text(reference, parent_namespace, display_text, &self.query())
    }
}

/// Resolves an optional path argument, defaulting to the current directory.
pub fn resolve_project_root(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
