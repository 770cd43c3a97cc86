//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its entry points. The
//! parser pulls tokens from an owned `Lexer` on demand, one token of
//! lookahead at a time; there is no separate tokenization pass.
//!
//! Sub-routines in `stmt` and `expr` return `ParseFailure` on malformed
//! input. `Parser::parse_next` is the only place that acts on it:
//! - syntax errors are reported to the `ErrorSink`, one token is skipped and
//!   no node is produced
//! - lexer errors are returned to the caller untouched

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::{
        errors::{Error, ErrorImpl, LexError, ParseFailure},
        sink::ErrorSink,
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_top_level;

/// The main parser structure.
///
/// Owns the lexer it reads from and the sink that receives diagnostics. No
/// state survives between `parse_next` calls apart from the lexer's cursor.
pub struct Parser<'src, S: ErrorSink> {
    /// Token source, exclusively owned
    lexer: Lexer<'src>,
    /// Receives recovered syntax errors
    sink: S,
}

impl<'src, S: ErrorSink> Parser<'src, S> {
    pub fn new(lexer: Lexer<'src>, sink: S) -> Self {
        Parser { lexer, sink }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&mut self) -> Result<Token<'src>, LexError> {
        self.lexer.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> Result<TokenKind<'src>, LexError> {
        Ok(self.lexer.peek()?.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token<'src>, LexError> {
        let token = self.lexer.peek()?;
        self.lexer.consume()?;
        Ok(token)
    }

    /// Consumes the current token if it is the `character` symbol.
    ///
    /// Otherwise fails with `message` describing what was required.
    pub fn expect_character(
        &mut self,
        character: char,
        message: &str,
    ) -> Result<Token<'src>, ParseFailure> {
        let token = self.current_token()?;

        if token.kind.is_character(character) {
            self.advance()?;
            Ok(token)
        } else {
            Err(unexpected(&token, message))
        }
    }

    /// Consumes the current token if it is an identifier, returning its text.
    pub fn expect_identifier(
        &mut self,
        message: &str,
    ) -> Result<(&'src str, Token<'src>), ParseFailure> {
        let token = self.current_token()?;

        if let TokenKind::Identifier(name) = token.kind {
            self.advance()?;
            Ok((name, token))
        } else {
            Err(unexpected(&token, message))
        }
    }

    /// Checks if there is anything left to parse.
    pub fn has_tokens(&mut self) -> Result<bool, LexError> {
        Ok(self.current_token_kind()? != TokenKind::EndOfInput)
    }

    /// Parses the next top-level construct.
    ///
    /// Returns `Ok(None)` at end of input, and also after a syntax error once
    /// the diagnostic has been reported and the offending token skipped.
    pub fn parse_next(&mut self) -> Result<Option<Node>, LexError> {
        match parse_top_level(self) {
            Ok(node) => {
                if let Some(node) = &node {
                    trace!(node = %node, "parsed top-level construct");
                }
                Ok(node)
            }
            Err(ParseFailure::Lex(error)) => Err(error),
            Err(ParseFailure::Syntax(error)) => {
                self.sink.report(&error);

                let skipped = self.current_token()?;
                debug!(token = %skipped.kind, offset = skipped.span.start.0, "skipping token after syntax error");
                self.lexer.consume()?;

                Ok(None)
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Builds the failure for a token that is not the one the grammar requires.
pub fn unexpected(token: &Token, message: &str) -> ParseFailure {
    ParseFailure::Syntax(Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: token.kind.to_string(),
            message: String::from(message),
        },
        token.span.start.clone(),
    ))
}

/// Parses a whole source text.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// over `source` and calls `parse_next` until end of input, keeping every
/// node produced. Syntax errors go to `sink`; the first lexer error stops
/// parsing and is returned.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the parsed nodes or the lexer error
pub fn parse<S: ErrorSink>(
    source: &str,
    file: Option<String>,
    sink: S,
) -> (Parser<'_, S>, Result<Vec<Node>, LexError>) {
    let mut parser = Parser::new(Lexer::new(source, file), sink);
    let result = parse_all(&mut parser);

    (parser, result)
}

fn parse_all<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<Vec<Node>, LexError> {
    let mut body = vec![];

    while parser.has_tokens()? {
        if let Some(node) = parser.parse_next()? {
            body.push(node);
        }
    }

    Ok(body)
}
