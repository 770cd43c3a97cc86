//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that drives a lexer
//! through the grammar and produces one top-level `Node` per call:
//!
//! ```text
//! top         ::= definition | extern_decl | expression
//! definition  ::= 'def' prototype expression
//! extern_decl ::= 'extern' prototype
//! prototype   ::= identifier '(' identifier* ')'
//! expression  ::= primary (binop primary)*
//! primary     ::= identifier | identifier '(' args ')' | number | '(' expression ')'
//! ```
//!
//! Binary operators are parsed by precedence climbing over the numeric
//! table in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
