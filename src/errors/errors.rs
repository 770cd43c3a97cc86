use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A byte that matches none of the lexical classes.
///
/// Fatal to the lexer that produced it: the lexer stays poisoned and returns
/// this same value from every later `peek`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not continue lexing, unknown character found: '{}'", .byte.escape_ascii())]
pub struct LexError {
    byte: u8,
    position: Position,
}

impl LexError {
    pub fn new(byte: u8, position: Position) -> Self {
        LexError { byte, position }
    }

    pub fn get_byte(&self) -> u8 {
        self.byte
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        "UnrecognisedCharacter"
    }

    pub fn get_tip(&self) -> ErrorTip {
        ErrorTip::Suggestion(self.to_string())
    }
}

/// A grammatical mismatch found while parsing.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnclosedParenthesis { .. } => "UnclosedParenthesis",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, an identifier or `(`",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnclosedParenthesis { token } => ErrorTip::Suggestion(format!(
                "Found `{}` where `)` was expected, is a parenthesis left open?",
                token
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token when expecting an expression: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected ')' to close parenthesised expression, found {token:?}")]
    UnclosedParenthesis { token: String },
    #[error("could not convert number: {token:?}")]
    NumberParseError { token: String },
}

/// Why a parse sub-routine produced no node.
///
/// Syntax failures are recovered from by the top-level entry point, lexer
/// failures are handed back to its caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseFailure {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] Error),
}
