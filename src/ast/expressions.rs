use crate::Span;

use super::ast::{BinaryOperator, Node};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Variable Expression
/// A bare identifier used as a value. The name is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// `lhs op rhs`, owning both operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
    pub span: Span,
}

/// Call Expression
/// Calls `callee` with its arguments in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Node>,
    pub span: Span,
}
