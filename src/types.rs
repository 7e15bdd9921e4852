use serde::{Deserialize, Serialize};

/// Kinds of documented symbols supplied by the comment parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Module,
    Class,
    Constant,
    Method,
}

#[allow(clippy::should_implement_trait)]
impl SymbolKind {
    /// Returns the string representation of this symbol kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Module => "module",
            SymbolKind::Class => "class",
            SymbolKind::Constant => "constant",
            SymbolKind::Method => "method",
        }
    }

    /// Parses a string into a `SymbolKind`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<SymbolKind> {
        match s {
            "module" => Some(SymbolKind::Module),
            "class" => Some(SymbolKind::Class),
            "constant" => Some(SymbolKind::Constant),
            "method" => Some(SymbolKind::Method),
            _ => None,
        }
    }

    /// Returns `true` for classes and modules.
    pub fn is_namespace(&self) -> bool {
        matches!(self, SymbolKind::Module | SymbolKind::Class)
    }
}

/// Whether a method is defined on the class object or on its instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodScope {
    Class,
    Instance,
}

#[allow(clippy::should_implement_trait)]
impl MethodScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Instance => "instance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "class" => Some(Self::Class),
            "instance" => Some(Self::Instance),
            _ => None,
        }
    }
}

/// A documented namespace, constant or method.
///
/// `title` is the fully-qualified path as the comment parser writes it:
/// `Foo::Bar`, `Foo::BAZ`, `Foo#bar`, `Foo.bar`, or `::bar` for a
/// top-level class method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<MethodScope>,
    pub title: String,
    #[serde(default)]
    pub is_attribute: bool,
}

impl Symbol {
    /// Creates a module record.
    pub fn module(title: &str) -> Self {
        Self::namespace(SymbolKind::Module, title)
    }

    /// Creates a class record.
    pub fn class(title: &str) -> Self {
        Self::namespace(SymbolKind::Class, title)
    }

    /// Creates a constant record.
    pub fn constant(title: &str) -> Self {
        Self::namespace(SymbolKind::Constant, title)
    }

    /// Creates a method record in the given scope.
    pub fn method(title: &str, scope: MethodScope) -> Self {
        Self {
            kind: SymbolKind::Method,
            scope: Some(scope),
            title: title.to_string(),
            is_attribute: false,
        }
    }

    /// Creates a method record flagged as accessor sugar.
    pub fn attribute(title: &str, scope: MethodScope) -> Self {
        Self {
            is_attribute: true,
            ..Self::method(title, scope)
        }
    }

    fn namespace(kind: SymbolKind, title: &str) -> Self {
        Self {
            kind,
            scope: None,
            title: title.to_string(),
            is_attribute: false,
        }
    }

    /// Returns `true` if this is a method record in the given scope.
    pub fn is_method_in(&self, scope: MethodScope) -> bool {
        self.kind == SymbolKind::Method && self.scope == Some(scope)
    }
}
