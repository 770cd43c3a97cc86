use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::LexError, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Builds the token kind for a lexeme matched by a pattern.
pub type RegexHandler = fn(&str) -> TokenKind<'_>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^[ \t\r\n]+").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[()+\-*,.]").unwrap(), handler: character_handler },
    ];
}

/// Single-token lookahead over one source text.
///
/// Tokens are produced on demand: `peek` scans the next token and caches it,
/// `consume` drops the cached token so the following `peek` scans again. The
/// cursor only moves forward, so no byte is scanned twice.
///
/// A byte outside every lexical class poisons the lexer. From then on `peek`
/// and `consume` return the same `LexError` and the lexer cannot be resumed.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    file: Rc<String>,
    next_token: Option<Result<Token<'src>, LexError>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            next_token: None,
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until `consume` is called.
    pub fn peek(&mut self) -> Result<Token<'src>, LexError> {
        if let Some(next_token) = &self.next_token {
            return next_token.clone();
        }

        let scanned = self.scan();
        if let Err(error) = &scanned {
            debug!(offset = self.pos, file = %self.file, "lexer poisoned: {}", error);
        }

        self.next_token = Some(scanned.clone());
        scanned
    }

    /// Discards the peeked token, peeking first if nothing is cached.
    ///
    /// Consuming `EndOfInput` is a no-op.
    pub fn consume(&mut self) -> Result<(), LexError> {
        let token = self.peek()?;

        if token.kind != TokenKind::EndOfInput {
            self.next_token = None;
        }

        Ok(())
    }

    /// Position of the cursor, just past the last scanned token.
    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn scan(&mut self) -> Result<Token<'src>, LexError> {
        if let Some(whitespace) = WHITESPACE.find(self.remainder()) {
            self.advance_n(whitespace.end());
        }

        if self.at_eof() {
            return Ok(MK_TOKEN!(TokenKind::EndOfInput, self.pos, self.pos, self.file));
        }

        let remainder = self.remainder();
        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remainder) {
                let start = self.pos;
                let lexeme = matched.as_str();
                self.advance_n(lexeme.len());

                let token = MK_TOKEN!((pattern.handler)(lexeme), start, self.pos, self.file);
                trace!(token = %token, "token scanned");
                return Ok(token);
            }
        }

        Err(LexError::new(self.at(), self.get_position()))
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> u8 {
        self.source.as_bytes()[self.pos]
    }

    fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn symbol_handler(lexeme: &str) -> TokenKind<'_> {
    RESERVED_LOOKUP
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Identifier(lexeme))
}

fn number_handler(lexeme: &str) -> TokenKind<'_> {
    TokenKind::Number(lexeme)
}

fn character_handler(lexeme: &str) -> TokenKind<'_> {
    TokenKind::Character(lexeme)
}

/// Runs a fresh lexer over `source` until end of input.
///
/// The returned tokens end with `EndOfInput`.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token<'_>>, LexError> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.peek()?;
        let at_end = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if at_end {
            return Ok(tokens);
        }
        lex.consume()?;
    }
}
