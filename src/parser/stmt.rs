use crate::{
    ast::{
        ast::Node,
        statements::{FnDecl, FnPrototype},
    },
    errors::{errors::ParseFailure, sink::ErrorSink},
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
};

use super::parser::Parser;

/// top ::= definition | external | expression
///
/// `Ok(None)` means end of input.
pub fn parse_top_level<S: ErrorSink>(
    parser: &mut Parser<'_, S>,
) -> Result<Option<Node>, ParseFailure> {
    let node = match parser.current_token_kind()? {
        TokenKind::EndOfInput => return Ok(None),
        TokenKind::Def => Node::Fn(parse_definition(parser)?),
        TokenKind::Extern => Node::FnPrototype(parse_extern(parser)?),
        _ => parse_expr(parser)?,
    };

    Ok(Some(node))
}

/// definition ::= 'def' prototype expression
pub fn parse_definition<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<FnDecl, ParseFailure> {
    let start = parser.advance()?.span;

    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(FnDecl {
        span: start.to(body.get_span()),
        prototype,
        body: Box::new(body),
    })
}

/// external ::= 'extern' prototype
pub fn parse_extern<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<FnPrototype, ParseFailure> {
    let start = parser.advance()?.span;

    let prototype = parse_prototype(parser)?;

    Ok(FnPrototype {
        span: start.to(&prototype.span),
        ..prototype
    })
}

/// prototype ::= identifier '(' identifier* ')'
///
/// Parameters are separated by whitespace only.
pub fn parse_prototype<S: ErrorSink>(
    parser: &mut Parser<'_, S>,
) -> Result<FnPrototype, ParseFailure> {
    let (name, name_token) = parser.expect_identifier("expected function name in prototype")?;

    parser.expect_character('(', "expected `(` in prototype")?;

    let mut params = vec![];
    while let TokenKind::Identifier(param) = parser.current_token_kind()? {
        params.push(String::from(param));
        parser.advance()?;
    }

    let close = parser.expect_character(')', "expected `)` in prototype")?;

    Ok(FnPrototype {
        name: String::from(name),
        params,
        span: name_token.span.to(&close.span),
    })
}
