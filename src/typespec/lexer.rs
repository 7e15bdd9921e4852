use std::ops::Range;

use logos::Logos;

use crate::errors::ParseError;

/// Tokens of the type specifier grammar.
///
/// Anything that is not a delimiter is part of a `Word`. A lone `=` is kept
/// as its own token so `#name=` setters still read as one identifier, while
/// `=>` always separates keys from values.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Equals,
    #[regex(r"[^<>(){},=\s]+")]
    Word,
}

impl TokenKind {
    /// Tokens that may appear inside an identifier.
    pub fn is_identifier_part(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Equals)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LAngle => "'<'",
            TokenKind::RAngle => "'>'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::FatArrow => "'=>'",
            TokenKind::Equals => "'='",
            TokenKind::Word => "identifier",
        }
    }
}

/// A token and its byte range in the specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Splits a specifier into tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = TokenKind::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                span: lexer.span(),
            }),
            Err(()) => {
                return Err(ParseError::new(
                    input,
                    format!("unexpected character sequence '{}'", lexer.slice()),
                    lexer.span().start,
                ))
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_fat_arrow_beats_equals() {
        assert_eq!(
            kinds("K=>V"),
            vec![TokenKind::Word, TokenKind::FatArrow, TokenKind::Word]
        );
    }

    #[test]
    fn test_setter_keeps_equals() {
        assert_eq!(kinds("#name="), vec![TokenKind::Word, TokenKind::Equals]);
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let tokens = tokenize("  Array < String >").expect("tokenize");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].span, 2..7);
    }
}
