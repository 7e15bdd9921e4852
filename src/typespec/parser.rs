use std::collections::HashMap;

use tracing::{trace, warn};

use crate::errors::ParseError;
use crate::typespec::grammar::{parse_syntax, GrammarOptions, Rule, SyntaxNode};
use crate::typespec::node::TypeNode;

/// The kind of value a grammar rule turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeBuilder {
    Basic,
    Collection { ordered: bool },
    Mapping,
    Sequence,
}

/// Grammar rule to node kind.
const DISPATCH: [(Rule, NodeBuilder); 5] = [
    (Rule::TypeList, NodeBuilder::Sequence),
    (
        Rule::ParameterizedType,
        NodeBuilder::Collection { ordered: false },
    ),
    (Rule::OrderedType, NodeBuilder::Collection { ordered: true }),
    (Rule::KeyValueType, NodeBuilder::Mapping),
    (Rule::IdentifierWithWhitespace, NodeBuilder::Basic),
];

/// Parses type specifiers such as `Array<String>`, `Hash{Symbol => Integer}`
/// or `(String, Integer)` into [`TypeNode`] trees.
///
/// The rule dispatch table is built once in the constructor; a parser can be
/// shared across any number of `parse` calls.
#[derive(Debug, Clone)]
pub struct TypeParser {
    options: GrammarOptions,
    dispatch: HashMap<Rule, NodeBuilder>,
}

impl TypeParser {
    /// Creates a parser with the default grammar options.
    pub fn new() -> Self {
        Self::with_options(GrammarOptions::default())
    }

    pub fn with_options(options: GrammarOptions) -> Self {
        let dispatch = Rule::ALL
            .iter()
            .filter_map(|rule| {
                DISPATCH
                    .iter()
                    .find(|(r, _)| r == rule)
                    .map(|(_, builder)| (*rule, *builder))
            })
            .collect();
        Self { options, dispatch }
    }

    pub fn options(&self) -> &GrammarOptions {
        &self.options
    }

    /// Parses a specifier into its top-level types, in source order.
    ///
    /// Blank input yields an empty list.
    pub fn parse(&self, text: &str) -> Result<Vec<TypeNode>, ParseError> {
        let Some(root) = parse_syntax(text, &self.options)? else {
            return Ok(Vec::new());
        };
        let nodes = self.build(&root, text)?;
        trace!(input = text, count = nodes.len(), "parsed type specifier");
        Ok(nodes)
    }

    /// Like [`TypeParser::parse`], with a missing specifier treated as blank.
    pub fn parse_optional(&self, text: Option<&str>) -> Result<Vec<TypeNode>, ParseError> {
        self.parse(text.unwrap_or_default())
    }

    /// Parses a specifier, logging a warning and returning an empty list when
    /// it cannot be parsed.
    pub fn parse_or_warn(&self, text: &str) -> Vec<TypeNode> {
        match self.parse(text) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!(input = %e.input, offset = e.offset, "{}", e.message);
                Vec::new()
            }
        }
    }

    fn builder_for(&self, node: &SyntaxNode, input: &str) -> Result<NodeBuilder, ParseError> {
        self.dispatch.get(&node.rule).copied().ok_or_else(|| {
            ParseError::new(
                input,
                format!("no node kind registered for rule {}", node.rule.as_str()),
                node.offset,
            )
        })
    }

    fn build(&self, node: &SyntaxNode, input: &str) -> Result<Vec<TypeNode>, ParseError> {
        match self.builder_for(node, input)? {
            NodeBuilder::Basic => Ok(vec![TypeNode::basic(node.text.trim())]),
            NodeBuilder::Collection { ordered } => {
                let items = self.build_child(node, 0, input)?;
                Ok(vec![TypeNode::Parameterized {
                    name: node.text.clone(),
                    items,
                    ordered,
                }])
            }
            NodeBuilder::Mapping => {
                let keys = self.build_child(node, 0, input)?;
                let values = self.build_child(node, 1, input)?;
                Ok(vec![TypeNode::key_value(node.text.clone(), keys, values)])
            }
            NodeBuilder::Sequence => self.build_sequence(node, input),
        }
    }

    /// Flattens a right-recursive type list into source order.
    fn build_sequence(&self, node: &SyntaxNode, input: &str) -> Result<Vec<TypeNode>, ParseError> {
        let mut nodes = Vec::new();
        let mut list = node;
        loop {
            nodes.extend(self.build_child(list, 0, input)?);
            match list.children.get(1) {
                Some(tail) if tail.rule == Rule::TypeList => list = tail,
                Some(tail) => {
                    nodes.extend(self.build(tail, input)?);
                    break;
                }
                None => break,
            }
        }
        Ok(nodes)
    }

    fn build_child(
        &self,
        node: &SyntaxNode,
        index: usize,
        input: &str,
    ) -> Result<Vec<TypeNode>, ParseError> {
        let child = node.children.get(index).ok_or_else(|| {
            ParseError::new(
                input,
                format!("{} is missing child {}", node.rule.as_str(), index),
                node.offset,
            )
        })?;
        self.build(child, input)
    }
}

impl Default for TypeParser {
    fn default() -> Self {
        Self::new()
    }
}
