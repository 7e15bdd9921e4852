/// Symbol table access.
///
/// The comment parser populates a [`SymbolTable`] once per documentation run;
/// [`RegistryQuery`] answers existence questions against it and
/// [`SymbolCache`] shares one loaded table across the run.
mod cache;
mod query;
mod store;

pub use cache::SymbolCache;
pub use query::RegistryQuery;
pub use store::{content_hash, SymbolStore, SymbolTable};
