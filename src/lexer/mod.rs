//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens on demand, one token of lookahead at a time. It handles:
//!
//! - Recognition of the `def` and `extern` keywords, identifiers and numbers
//! - The single-character symbols `( ) + - * , .`
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
