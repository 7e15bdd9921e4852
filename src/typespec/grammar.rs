//! Grammar for type specifiers.
//!
//! ```text
//! type_list                 := type (',' type_list)?
//! type                      := parameterized_type | ordered_type | key_value_type
//!                            | identifier_with_whitespace
//! parameterized_type        := identifier? '<' type_list '>'
//! ordered_type              := identifier? '(' type_list ')'
//!                            | tuple_marker '<' type_list '>'
//! key_value_type            := identifier '<' type_list '=>' type_list '>'
//!                            | identifier '{' type_list '=>' type_list '}'
//!                            | mapping_type '<' type ',' type '>'
//! identifier_with_whitespace := raw identifier text, trimmed
//! ```
//!
//! Identifiers are any run of non-delimiter text, so operator-like method
//! names that contain `<`, `>` or `=>` (e.g. `#<=>`) cannot be written inside
//! a specifier. Callers have to space such names apart from the delimiters.

use crate::errors::ParseError;
use crate::typespec::lexer::{tokenize, Token, TokenKind};

/// Deepest bracket nesting a specifier may use.
pub const MAX_DEPTH: usize = 64;

/// Grammar rules that produce syntax nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    TypeList,
    ParameterizedType,
    OrderedType,
    KeyValueType,
    IdentifierWithWhitespace,
}

impl Rule {
    /// Every rule of the grammar.
    pub const ALL: [Rule; 5] = [
        Rule::TypeList,
        Rule::ParameterizedType,
        Rule::OrderedType,
        Rule::KeyValueType,
        Rule::IdentifierWithWhitespace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::TypeList => "type_list",
            Rule::ParameterizedType => "parameterized_type",
            Rule::OrderedType => "ordered_type",
            Rule::KeyValueType => "key_value_type",
            Rule::IdentifierWithWhitespace => "identifier_with_whitespace",
        }
    }
}

/// Identifiers that change how a generic form is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarOptions {
    /// Names whose two-parameter `<K, V>` form is a key/value type.
    pub mapping_types: Vec<String>,
    /// Names whose `<...>` form is order-significant.
    pub tuple_markers: Vec<String>,
    /// Name given to the anonymous `(A, B)` and `<A>` forms.
    pub default_collection: String,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            mapping_types: vec!["Hash".to_string()],
            tuple_markers: vec!["Tuple".to_string()],
            default_collection: "Array".to_string(),
        }
    }
}

/// A node of the concrete syntax tree.
///
/// * `TypeList`: children are the head type and, if present, the tail list.
/// * `ParameterizedType` / `OrderedType`: `text` is the name, the single child
///   is the parameter list.
/// * `KeyValueType`: `text` is the name, children are the key list and the
///   value list.
/// * `IdentifierWithWhitespace`: `text` is the trimmed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub rule: Rule,
    pub text: String,
    pub offset: usize,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    fn new(rule: Rule, text: impl Into<String>, offset: usize, children: Vec<SyntaxNode>) -> Self {
        Self {
            rule,
            text: text.into(),
            offset,
            children,
        }
    }
}

/// Parses a specifier into its syntax tree. Blank input has no tree.
pub fn parse_syntax(input: &str, options: &GrammarOptions) -> Result<Option<SyntaxNode>, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = SyntaxParser {
        input,
        tokens,
        pos: 0,
        depth: 0,
        options,
    };
    let list = parser.type_list()?;
    if let Some(token) = parser.peek() {
        return Err(parser.error(
            format!("unexpected {} after type", token.kind.describe()),
            token.span.start,
        ));
    }
    Ok(Some(list))
}

struct SyntaxParser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    options: &'a GrammarOptions,
}

impl<'a> SyntaxParser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.input.len(), |t| t.span.start)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            return Ok(());
        }
        let found = match self.peek() {
            Some(token) => token.kind.describe(),
            None => "end of input",
        };
        Err(self.error(
            format!("expected {}, found {}", kind.describe(), found),
            self.offset(),
        ))
    }

    fn error(&self, message: String, offset: usize) -> ParseError {
        ParseError::new(self.input, message, offset)
    }

    /// Reads `head (',' head)*` in a loop and folds it into the
    /// right-recursive shape, so long lists do not grow the call stack.
    fn type_list(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut heads = Vec::new();
        loop {
            let offset = self.offset();
            heads.push((offset, self.type_expr()?));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        let mut list: Option<SyntaxNode> = None;
        while let Some((offset, head)) = heads.pop() {
            let mut children = vec![head];
            children.extend(list.take());
            list = Some(SyntaxNode::new(Rule::TypeList, "", offset, children));
        }
        list.ok_or_else(|| self.error("expected a type".to_string(), self.offset()))
    }

    /// Runs `body` one bracket level deeper.
    fn nested<T>(
        &mut self,
        offset: usize,
        body: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("type specifier nested too deeply".to_string(), offset));
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    fn type_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let offset = self.offset();
        match self.peek_kind() {
            Some(TokenKind::LParen) => {
                self.pos += 1;
                let name = self.options.default_collection.clone();
                self.nested(offset, |p| p.ordered_body(name, offset))
            }
            Some(TokenKind::LAngle) => {
                self.pos += 1;
                let name = self.options.default_collection.clone();
                self.nested(offset, |p| {
                    let items = p.type_list()?;
                    p.expect(TokenKind::RAngle)?;
                    Ok(SyntaxNode::new(
                        Rule::ParameterizedType,
                        name,
                        offset,
                        vec![items],
                    ))
                })
            }
            Some(kind) if kind.is_identifier_part() => {
                let name = self.identifier();
                match self.peek_kind() {
                    Some(TokenKind::LAngle) => {
                        self.pos += 1;
                        self.nested(offset, |p| p.angle_body(name, offset))
                    }
                    Some(TokenKind::LParen) => {
                        self.pos += 1;
                        self.nested(offset, |p| p.ordered_body(name, offset))
                    }
                    Some(TokenKind::LBrace) => {
                        self.pos += 1;
                        self.nested(offset, |p| p.brace_body(name, offset))
                    }
                    _ => Ok(SyntaxNode::new(
                        Rule::IdentifierWithWhitespace,
                        name,
                        offset,
                        Vec::new(),
                    )),
                }
            }
            Some(kind) => Err(self.error(
                format!("expected a type, found {}", kind.describe()),
                offset,
            )),
            None => Err(self.error("expected a type, found end of input".to_string(), offset)),
        }
    }

    /// Consumes consecutive identifier tokens and returns the source text
    /// they cover, trimmed.
    fn identifier(&mut self) -> String {
        let start = self.offset();
        let mut end = start;
        while let Some(token) = self.peek() {
            if !token.kind.is_identifier_part() {
                break;
            }
            end = token.span.end;
            self.pos += 1;
        }
        self.input[start..end].trim().to_string()
    }

    fn angle_body(&mut self, name: String, offset: usize) -> Result<SyntaxNode, ParseError> {
        let items = self.type_list()?;
        if self.eat(TokenKind::FatArrow) {
            let values = self.type_list()?;
            self.expect(TokenKind::RAngle)?;
            return Ok(SyntaxNode::new(
                Rule::KeyValueType,
                name,
                offset,
                vec![items, values],
            ));
        }
        self.expect(TokenKind::RAngle)?;

        if self.options.tuple_markers.iter().any(|m| *m == name) {
            return Ok(SyntaxNode::new(Rule::OrderedType, name, offset, vec![items]));
        }
        if self.options.mapping_types.iter().any(|m| *m == name) {
            if let Some((keys, values)) = split_pair(&items) {
                return Ok(SyntaxNode::new(
                    Rule::KeyValueType,
                    name,
                    offset,
                    vec![keys, values],
                ));
            }
        }
        Ok(SyntaxNode::new(
            Rule::ParameterizedType,
            name,
            offset,
            vec![items],
        ))
    }

    fn ordered_body(&mut self, name: String, offset: usize) -> Result<SyntaxNode, ParseError> {
        let items = self.type_list()?;
        self.expect(TokenKind::RParen)?;
        Ok(SyntaxNode::new(Rule::OrderedType, name, offset, vec![items]))
    }

    fn brace_body(&mut self, name: String, offset: usize) -> Result<SyntaxNode, ParseError> {
        let keys = self.type_list()?;
        self.expect(TokenKind::FatArrow)?;
        let values = self.type_list()?;
        self.expect(TokenKind::RBrace)?;
        Ok(SyntaxNode::new(
            Rule::KeyValueType,
            name,
            offset,
            vec![keys, values],
        ))
    }
}

/// Splits a two-element type list into one-element key and value lists.
fn split_pair(list: &SyntaxNode) -> Option<(SyntaxNode, SyntaxNode)> {
    let [head, tail] = list.children.as_slice() else {
        return None;
    };
    if tail.children.len() != 1 {
        return None;
    }
    let keys = SyntaxNode::new(Rule::TypeList, "", list.offset, vec![head.clone()]);
    Some((keys, tail.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax(input: &str) -> SyntaxNode {
        parse_syntax(input, &GrammarOptions::default())
            .expect("parse")
            .expect("non-empty")
    }

    #[test]
    fn test_blank_input_has_no_tree() {
        let options = GrammarOptions::default();
        assert_eq!(parse_syntax("", &options), Ok(None));
        assert_eq!(parse_syntax("   ", &options), Ok(None));
    }

    #[test]
    fn test_type_list_is_right_recursive() {
        let list = syntax("A, B, C");
        assert_eq!(list.rule, Rule::TypeList);
        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[1].rule, Rule::TypeList);
        assert_eq!(list.children[1].children[1].children.len(), 1);
    }

    #[test]
    fn test_identifier_keeps_inner_whitespace() {
        let list = syntax("  Foo  Bar ");
        assert_eq!(list.children[0].rule, Rule::IdentifierWithWhitespace);
        assert_eq!(list.children[0].text, "Foo  Bar");
    }

    #[test]
    fn test_mapping_pair_becomes_key_value() {
        let list = syntax("Hash<String, Symbol>");
        assert_eq!(list.children[0].rule, Rule::KeyValueType);
        let list = syntax("Hash<String, Symbol, nil>");
        assert_eq!(list.children[0].rule, Rule::ParameterizedType);
    }

    #[test]
    fn test_nesting_limit() {
        let options = GrammarOptions::default();
        let nested = |depth: usize| format!("{}A{}", "(".repeat(depth), ")".repeat(depth));
        assert!(parse_syntax(&nested(MAX_DEPTH), &options).is_ok());
        let err = parse_syntax(&nested(MAX_DEPTH + 1), &options).unwrap_err();
        assert_eq!(err.message, "type specifier nested too deeply");
        assert_eq!(err.offset, MAX_DEPTH);
    }

    #[test]
    fn test_long_list_parses() {
        let input = vec!["A"; 5000].join(", ");
        let list = syntax(&input);
        assert_eq!(list.children.len(), 2);
    }

    #[test]
    fn test_unclosed_angle_reports_offset() {
        let err = parse_syntax("Array<String", &GrammarOptions::default()).unwrap_err();
        assert_eq!(err.offset, 12);
        assert_eq!(err.input, "Array<String");
    }
}
