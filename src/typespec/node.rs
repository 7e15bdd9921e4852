use std::fmt;

use serde::Serialize;

/// A parsed type specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeNode {
    /// A plain type name such as `String`, `nil` or `#to_s`.
    Basic { name: String },
    /// A container with type parameters. `ordered` marks a fixed-order tuple.
    Parameterized {
        name: String,
        items: Vec<TypeNode>,
        ordered: bool,
    },
    /// A mapping from any of `keys` to any of `values`.
    ///
    /// Keys and values are not paired by position.
    KeyValue {
        name: String,
        keys: Vec<TypeNode>,
        values: Vec<TypeNode>,
    },
}

impl TypeNode {
    pub fn basic(name: impl Into<String>) -> Self {
        TypeNode::Basic { name: name.into() }
    }

    pub fn parameterized(name: impl Into<String>, items: Vec<TypeNode>) -> Self {
        TypeNode::Parameterized {
            name: name.into(),
            items,
            ordered: false,
        }
    }

    pub fn ordered(name: impl Into<String>, items: Vec<TypeNode>) -> Self {
        TypeNode::Parameterized {
            name: name.into(),
            items,
            ordered: true,
        }
    }

    pub fn key_value(name: impl Into<String>, keys: Vec<TypeNode>, values: Vec<TypeNode>) -> Self {
        TypeNode::KeyValue {
            name: name.into(),
            keys,
            values,
        }
    }

    /// The outermost type name.
    pub fn name(&self) -> &str {
        match self {
            TypeNode::Basic { name }
            | TypeNode::Parameterized { name, .. }
            | TypeNode::KeyValue { name, .. } => name,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[TypeNode]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

/// Canonical specifier text: `Array<String>`, `Array(String, Integer)`,
/// `Hash{String => Symbol}`.
impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Basic { name } => f.write_str(name),
            TypeNode::Parameterized {
                name,
                items,
                ordered,
            } => {
                let (open, close) = if *ordered { ('(', ')') } else { ('<', '>') };
                write!(f, "{name}{open}")?;
                write_list(f, items)?;
                write!(f, "{close}")
            }
            TypeNode::KeyValue { name, keys, values } => {
                write!(f, "{name}{{")?;
                write_list(f, keys)?;
                f.write_str(" => ")?;
                write_list(f, values)?;
                f.write_str("}")
            }
        }
    }
}

/// Joins a top-level sequence the way it was written: `String, nil`.
pub fn display_list(nodes: &[TypeNode]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
