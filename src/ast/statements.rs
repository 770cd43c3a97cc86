use crate::Span;

use super::ast::Node;

/// Function Prototype
/// The name and parameter names shared by `def` and `extern`.
/// Parameter names are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct FnPrototype {
    pub name: String,
    pub params: Vec<String>,
    pub span: Span,
}

/// Function Declaration
/// A `def`: prototype plus the body expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub prototype: FnPrototype,
    pub body: Box<Node>,
    pub span: Span,
}
