use tracing::trace;

use crate::registry::store::SymbolTable;
use crate::types::*;

/// Read-only existence checks against a symbol table.
///
/// Every lookup is a linear scan; tables are small and these checks run far
/// less often than type parsing. An empty table answers `false` everywhere.
#[derive(Clone, Copy)]
pub struct RegistryQuery<'a> {
    table: &'a dyn SymbolTable,
}

impl<'a> RegistryQuery<'a> {
    /// Creates a new `RegistryQuery` over the given table.
    pub fn new(table: &'a dyn SymbolTable) -> Self {
        Self { table }
    }

    /// Exact title match among constant records.
    pub fn constant_exists(&self, name: &str) -> bool {
        let found = self
            .find(name, |s| s.kind == SymbolKind::Constant)
            .is_some();
        trace!(name, found, "constant lookup");
        found
    }

    /// Exact title match among module and class records.
    pub fn definition_exists(&self, name: &str) -> bool {
        let found = self.find_definition(name).is_some();
        trace!(name, found, "definition lookup");
        found
    }

    /// Exact title match among instance-scope method records.
    ///
    /// Also accepts the legacy `Foo::bar` spelling, looked up as `Foo#bar`.
    pub fn instance_method_exists(&self, name: &str) -> bool {
        let found = self.find_instance_method(name).is_some();
        trace!(name, found, "instance method lookup");
        found
    }

    /// Exact title match among class-scope method records.
    ///
    /// Accepts `.bar` (top-level, looked up as `::bar`), the legacy
    /// `Foo::bar` (looked up as `Foo.bar`) and the modern `Foo.bar`.
    pub fn class_method_exists(&self, name: &str) -> bool {
        let found = self.find_class_method(name).is_some();
        trace!(name, found, "class method lookup");
        found
    }

    /// Returns the module or class record titled `name`.
    pub fn find_definition(&self, name: &str) -> Option<&'a Symbol> {
        self.find(name, |s| s.kind.is_namespace())
    }

    /// Returns the instance method record for `name`, in either spelling.
    pub fn find_instance_method(&self, name: &str) -> Option<&'a Symbol> {
        let title = instance_method_title(name);
        self.find(&title, |s| s.is_method_in(MethodScope::Instance))
    }

    /// Returns the class method record for `name`, in any accepted spelling.
    pub fn find_class_method(&self, name: &str) -> Option<&'a Symbol> {
        let title = class_method_title(name);
        self.find(&title, |s| s.is_method_in(MethodScope::Class))
    }

    /// Returns `true` if `name` is an instance method flagged as an attribute accessor.
    pub fn is_instance_attribute(&self, name: &str) -> bool {
        self.find_instance_method(name)
            .is_some_and(|method| method.is_attribute)
    }

    fn find(&self, title: &str, accept: impl Fn(&Symbol) -> bool) -> Option<&'a Symbol> {
        self.table
            .symbols()
            .iter()
            .find(|s| s.title == title && accept(s))
    }
}

/// Normalizes an instance method reference to its `Foo#bar` title.
fn instance_method_title(name: &str) -> String {
    if name.contains('#') {
        return name.to_string();
    }
    match split_legacy_method(name) {
        Some((namespace, method)) => format!("{namespace}#{method}"),
        None => name.to_string(),
    }
}

/// Normalizes a class method reference to its `Foo.bar` / `::bar` title.
fn class_method_title(name: &str) -> String {
    if let Some(method) = name.strip_prefix('.') {
        return format!("::{method}");
    }
    match split_legacy_method(name) {
        Some(("", _)) => name.to_string(),
        Some((namespace, method)) => format!("{namespace}.{method}"),
        None => name.to_string(),
    }
}

/// Splits `Foo::bar` into (`Foo`, `bar`) when the final `::` segment is a
/// method name (starts with a lowercase letter or underscore).
fn split_legacy_method(name: &str) -> Option<(&str, &str)> {
    let (namespace, method) = name.rsplit_once("::")?;
    let first = method.chars().next()?;
    if first.is_ascii_lowercase() || first == '_' {
        Some((namespace, method))
    } else {
        None
    }
}
