use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind<'static>> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

/// Classification of a lexeme.
///
/// Identifiers, numbers and characters borrow their text from the source the
/// lexer was built over. Numbers are kept as their raw digit run.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind<'src> {
    EndOfInput,

    // Reserved
    Def,
    Extern,

    Identifier(&'src str),
    Number(&'src str),
    /// One of `( ) + - * , .`
    Character(&'src str),
}

impl<'src> TokenKind<'src> {
    /// Source text carried by the token, if its kind has any.
    pub fn lexeme(&self) -> Option<&'src str> {
        match self {
            TokenKind::Identifier(text) | TokenKind::Number(text) | TokenKind::Character(text) => {
                Some(text)
            }
            TokenKind::EndOfInput | TokenKind::Def | TokenKind::Extern => None,
        }
    }

    pub fn is_character(&self, character: char) -> bool {
        matches!(self, TokenKind::Character(text) if text.chars().eq([character]))
    }
}

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::Def => write!(f, "def"),
            TokenKind::Extern => write!(f, "extern"),
            TokenKind::Identifier(text) | TokenKind::Number(text) | TokenKind::Character(text) => {
                write!(f, "{}", text)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {:?}, span: {}..{} }}",
            self.kind, self.span.start.0, self.span.end.0
        )
    }
}
