use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::errors::{DocLinkError, Result};
use crate::types::Symbol;

/// Read-only view over the documented symbols of one documentation run.
///
/// Populated by the comment parser before any resolution happens; nothing in
/// this crate mutates it afterwards.
pub trait SymbolTable: Send + Sync {
    /// All symbol records, in the order the comment parser produced them.
    fn symbols(&self) -> &[Symbol];
}

impl SymbolTable for Vec<Symbol> {
    fn symbols(&self) -> &[Symbol] {
        self
    }
}

impl SymbolTable for [Symbol] {
    fn symbols(&self) -> &[Symbol] {
        self
    }
}

/// Symbol table loaded from the comment parser's JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolStore {
    symbols: Vec<Symbol>,
    fingerprint: String,
}

impl SymbolStore {
    /// Wraps an in-memory list of symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        let fingerprint = match serde_json::to_string(&symbols) {
            Ok(json) => content_hash(&json),
            Err(_) => String::new(),
        };
        Self {
            symbols,
            fingerprint,
        }
    }

    /// Loads a JSON array of symbol records from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| DocLinkError::Symbols {
            message: format!("failed to read symbol table: {e}"),
            path: path.display().to_string(),
        })?;
        let store = Self::from_json(&contents).map_err(|e| DocLinkError::Symbols {
            message: format!("failed to parse symbol table: {e}"),
            path: path.display().to_string(),
        })?;
        info!(
            path = %path.display(),
            symbols = store.len(),
            "loaded symbol table"
        );
        Ok(store)
    }

    /// Parses a JSON array of symbol records.
    pub fn from_json(json: &str) -> Result<Self> {
        let symbols: Vec<Symbol> = serde_json::from_str(json)?;
        Ok(Self {
            symbols,
            fingerprint: content_hash(json),
        })
    }

    /// SHA-256 of the content this store was built from.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolTable for SymbolStore {
    fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// Compute SHA-256 content hash of a symbol table source.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
