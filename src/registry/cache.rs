use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use tracing::{debug, info};

use crate::errors::{DocLinkError, Result};
use crate::registry::store::{content_hash, SymbolStore};

#[derive(Debug)]
struct CachedStore {
    path: PathBuf,
    store: Arc<SymbolStore>,
}

/// Process-wide cache of the symbol table for the current documentation run.
///
/// The table is populated once per run and is read-only afterwards, so
/// readers share one `Arc<SymbolStore>`. Call [`SymbolCache::invalidate`]
/// between runs.
pub struct SymbolCache;

fn slot() -> &'static RwLock<Option<CachedStore>> {
    static SLOT: OnceLock<RwLock<Option<CachedStore>>> = OnceLock::new();
    SLOT.get_or_init(|| RwLock::new(None))
}

impl SymbolCache {
    /// Returns the cached store for `path`, loading it when the cache is empty,
    /// holds a different file, or the file content changed since it was loaded.
    pub fn load_cached(path: &Path) -> Result<Arc<SymbolStore>> {
        let contents = fs::read_to_string(path).map_err(|e| DocLinkError::Symbols {
            message: format!("failed to read symbol table: {e}"),
            path: path.display().to_string(),
        })?;
        let fingerprint = content_hash(&contents);

        if let Ok(guard) = slot().read() {
            if let Some(cached) = guard.as_ref() {
                if cached.path == path && cached.store.fingerprint() == fingerprint {
                    debug!(path = %path.display(), "symbol table cache hit");
                    return Ok(Arc::clone(&cached.store));
                }
            }
        }

        let store = Arc::new(SymbolStore::from_json(&contents).map_err(|e| {
            DocLinkError::Symbols {
                message: format!("failed to parse symbol table: {e}"),
                path: path.display().to_string(),
            }
        })?);
        info!(
            path = %path.display(),
            symbols = store.len(),
            "cached symbol table"
        );
        Self::install(path, Arc::clone(&store));
        Ok(store)
    }

    /// Replaces the cached store.
    pub fn install(path: &Path, store: Arc<SymbolStore>) {
        let mut guard = match slot().write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(CachedStore {
            path: path.to_path_buf(),
            store,
        });
    }

    /// Returns the cached store, if any.
    pub fn current() -> Option<Arc<SymbolStore>> {
        let guard = slot().read().ok()?;
        guard.as_ref().map(|cached| Arc::clone(&cached.store))
    }

    /// Drops the cached store so the next run reloads it.
    pub fn invalidate() {
        let mut guard = match slot().write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if guard.take().is_some() {
            info!("symbol table cache invalidated");
        }
    }
}
