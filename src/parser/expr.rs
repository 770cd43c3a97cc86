use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
    },
    errors::{
        errors::{Error, ErrorImpl, ParseFailure},
        sink::ErrorSink,
    },
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{get_binary_operator, get_binding_power, BindingPower},
    parser::{unexpected, Parser},
};

/// expression ::= primary (binop primary)*
pub fn parse_expr<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<Node, ParseFailure> {
    let lhs = parse_primary_expr(parser)?;

    parse_binary_op_rhs(parser, 0, lhs)
}

/// primary ::= identifierexpr | numberexpr | parenexpr
pub fn parse_primary_expr<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<Node, ParseFailure> {
    let token = parser.current_token()?;

    match token.kind {
        TokenKind::Identifier(_) => parse_identifier_expr(parser),
        TokenKind::Number(_) => parse_number_expr(parser),
        kind if kind.is_character('(') => parse_grouping_expr(parser),
        kind => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: kind.to_string(),
            },
            token.span.start,
        )
        .into()),
    }
}

/// Precedence climbing over `(binop primary)*`, folding into `lhs`.
///
/// Operators binding looser than `min_bp` are left for the caller. When the
/// operator after the right operand binds tighter than the current one, the
/// right operand absorbs it first, so `1+2*3` is `1+(2*3)` while equal
/// precedence stays left-associative.
pub fn parse_binary_op_rhs<S: ErrorSink>(
    parser: &mut Parser<'_, S>,
    min_bp: BindingPower,
    mut lhs: Node,
) -> Result<Node, ParseFailure> {
    loop {
        let Some(operator) = get_binary_operator(&parser.current_token_kind()?) else {
            return Ok(lhs);
        };

        let bp = get_binding_power(operator);
        if bp < min_bp {
            return Ok(lhs);
        }

        parser.advance()?;

        let mut rhs = parse_primary_expr(parser)?;

        if let Some(next_operator) = get_binary_operator(&parser.current_token_kind()?) {
            if get_binding_power(next_operator) > bp {
                rhs = parse_binary_op_rhs(parser, bp + 1, rhs)?;
            }
        }

        let span = lhs.get_span().to(rhs.get_span());
        lhs = Node::BinaryOp(BinaryExpr {
            op: operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        });
    }
}

/// parenexpr ::= '(' expression ')'
pub fn parse_grouping_expr<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<Node, ParseFailure> {
    parser.advance()?;
    let expr = parse_expr(parser)?;

    let token = parser.current_token()?;
    if !token.kind.is_character(')') {
        return Err(Error::new(
            ErrorImpl::UnclosedParenthesis {
                token: token.kind.to_string(),
            },
            token.span.start,
        )
        .into());
    }
    parser.advance()?;

    Ok(expr)
}

/// identifierexpr
///   ::= identifier
///   ::= identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr<S: ErrorSink>(
    parser: &mut Parser<'_, S>,
) -> Result<Node, ParseFailure> {
    let (name, name_token) = parser.expect_identifier("expected identifier")?;

    if !parser.current_token_kind()?.is_character('(') {
        return Ok(Node::Variable(VariableExpr {
            name: String::from(name),
            span: name_token.span,
        }));
    }

    parser.advance()?;

    let mut args = vec![];
    let close = if parser.current_token_kind()?.is_character(')') {
        parser.advance()?
    } else {
        loop {
            args.push(parse_expr(parser)?);

            let token = parser.current_token()?;
            if token.kind.is_character(')') {
                break parser.advance()?;
            }
            if !token.kind.is_character(',') {
                return Err(unexpected(&token, "expected `)` or `,` in argument list"));
            }
            parser.advance()?;
        }
    };

    Ok(Node::FnCall(CallExpr {
        callee: String::from(name),
        args,
        span: name_token.span.to(&close.span),
    }))
}

/// numberexpr ::= number
pub fn parse_number_expr<S: ErrorSink>(parser: &mut Parser<'_, S>) -> Result<Node, ParseFailure> {
    let token = parser.current_token()?;

    let TokenKind::Number(text) = token.kind else {
        return Err(unexpected(&token, "expected number"));
    };

    let value = text.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(text),
            },
            token.span.start.clone(),
        )
    })?;
    parser.advance()?;

    Ok(Node::Number(NumberExpr {
        value,
        span: token.span,
    }))
}
