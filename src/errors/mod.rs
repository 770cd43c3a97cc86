//! Error types and error reporting for the front end.
//!
//! Lexing and parsing fail in two disjoint ways:
//!
//! - `LexError` - a byte outside every lexical class; poisons the lexer
//! - `Error` - a grammatical mismatch; reported to an `ErrorSink` and
//!   recovered from by skipping one token
//!
//! `ParseFailure` carries either one through the parser's sub-routines.

pub mod errors;
pub mod sink;
