/// Type specifier parsing.
///
/// Specifiers are lexed with `logos`, parsed into a syntax tree by a small
/// recursive-descent grammar, and mapped to [`TypeNode`] values through a
/// rule dispatch table.
pub mod grammar;
mod lexer;
mod node;
mod parser;

pub use grammar::{GrammarOptions, Rule};
pub use node::{display_list, TypeNode};
pub use parser::TypeParser;
