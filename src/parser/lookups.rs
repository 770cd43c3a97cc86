use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::BinaryOperator, lexer::tokens::TokenKind};

/// Operator precedence; higher binds tighter.
pub type BindingPower = i32;

pub const ADDITIVE: BindingPower = 20;
pub const MULTIPLICATIVE: BindingPower = 40;

lazy_static! {
    pub static ref BINARY_OPERATOR_LOOKUP: HashMap<&'static str, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert("+", BinaryOperator::Add);
        map.insert("-", BinaryOperator::Subtract);
        map.insert("*", BinaryOperator::Multiply);
        map
    };
}

/// The binary operator a token stands for, if any.
///
/// Any other character token ends the expression being parsed.
pub fn get_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Character(text) => BINARY_OPERATOR_LOOKUP.get(*text).copied(),
        _ => None,
    }
}

pub fn get_binding_power(operator: BinaryOperator) -> BindingPower {
    match operator {
        BinaryOperator::Add | BinaryOperator::Subtract => ADDITIVE,
        BinaryOperator::Multiply => MULTIPLICATIVE,
    }
}
