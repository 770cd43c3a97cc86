use std::fmt::{Display, Write};

use crate::Span;

use super::{
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
    statements::{FnDecl, FnPrototype},
};

/// Binary operators the language supports.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the syntax tree.
///
/// Every composite node owns its children outright; trees are never shared
/// and never cyclic. The parser hands nodes out by value and does not touch
/// them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(NumberExpr),
    Variable(VariableExpr),
    BinaryOp(BinaryExpr),
    FnCall(CallExpr),
    FnPrototype(FnPrototype),
    Fn(FnDecl),
}

impl Node {
    pub fn get_span(&self) -> &Span {
        match self {
            Node::Number(node) => &node.span,
            Node::Variable(node) => &node.span,
            Node::BinaryOp(node) => &node.span,
            Node::FnCall(node) => &node.span,
            Node::FnPrototype(node) => &node.span,
            Node::Fn(node) => &node.span,
        }
    }

    /// Writes the node as an indented tree, one field per line.
    ///
    /// Each nesting level is indented by `indent_size` copies of `space_char`.
    pub fn print_to_string(
        &self,
        out: &mut String,
        indent_level: usize,
        space_char: char,
        indent_size: usize,
    ) {
        let printer = TreePrinter {
            space_char,
            indent_size,
        };
        // Writing into a String cannot fail.
        let _ = printer.print(self, out, indent_level);
    }
}

struct TreePrinter {
    space_char: char,
    indent_size: usize,
}

impl TreePrinter {
    fn line(&self, out: &mut String, level: usize, text: std::fmt::Arguments) -> std::fmt::Result {
        for _ in 0..level * self.indent_size {
            out.push(self.space_char);
        }
        out.write_fmt(text)?;
        out.write_char('\n')
    }

    fn print(&self, node: &Node, out: &mut String, level: usize) -> std::fmt::Result {
        match node {
            Node::Number(number) => self.line(out, level, format_args!("number={}", number.value)),
            Node::Variable(variable) => {
                self.line(out, level, format_args!("variable={}", variable.name))
            }
            Node::BinaryOp(binary) => {
                self.line(out, level, format_args!("bin op={}", binary.op))?;
                self.line(out, level + 1, format_args!("lhs="))?;
                self.print(&binary.lhs, out, level + 2)?;
                self.line(out, level + 1, format_args!("rhs="))?;
                self.print(&binary.rhs, out, level + 2)
            }
            Node::FnCall(call) => {
                self.line(out, level, format_args!("fn call={}", call.callee))?;
                for (i, arg) in call.args.iter().enumerate() {
                    self.line(out, level + 1, format_args!("arg[{}]=", i))?;
                    self.print(arg, out, level + 2)?;
                }
                Ok(())
            }
            Node::FnPrototype(prototype) => self.print_prototype(prototype, out, level),
            Node::Fn(function) => {
                self.line(out, level, format_args!("fn"))?;
                self.print_prototype(&function.prototype, out, level + 1)?;
                self.line(out, level + 1, format_args!("body="))?;
                self.print(&function.body, out, level + 2)
            }
        }
    }

    fn print_prototype(
        &self,
        prototype: &FnPrototype,
        out: &mut String,
        level: usize,
    ) -> std::fmt::Result {
        self.line(out, level, format_args!("prototype={}", prototype.name))?;
        for param in &prototype.params {
            self.line(out, level + 1, format_args!("param={}", param))?;
        }
        Ok(())
    }
}

/// One-line s-expression form, e.g. `(+ 1 (* 2 3))`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(number) => write!(f, "{}", number.value),
            Node::Variable(variable) => write!(f, "{}", variable.name),
            Node::BinaryOp(binary) => write!(f, "({} {} {})", binary.op, binary.lhs, binary.rhs),
            Node::FnCall(call) => {
                write!(f, "(call {}", call.callee)?;
                for arg in &call.args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Node::FnPrototype(prototype) => write!(f, "{}", prototype),
            Node::Fn(function) => write!(f, "(def {} {})", function.prototype, function.body),
        }
    }
}

impl Display for FnPrototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(proto {} ({}))", self.name, self.params.join(" "))
    }
}
