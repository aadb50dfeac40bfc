use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Pratt expression loop.
///
/// On entry the current token starts the expression; on exit it is the
/// last token of the expression. `None` means a failure already recorded
/// in the parser's error list.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let position = parser.get_position();
        parser.push_error(ErrorImpl::NoPrefixParseFunction { kind: token_kind }, position);
        return None;
    };

    trace!("nud {} at {:?}", token_kind, bp);
    let Some(mut left) = nud(parser) else {
        if token_kind == TokenKind::Integer {
            skip_operand_chain(parser, bp);
        }
        return None;
    };

    // Strict `<` keeps equal-precedence operators left associative
    while parser.lookahead_token_kind() != TokenKind::Semicolon
        && bp < parser.lookahead_binding_power()
    {
        let token_kind = parser.lookahead_token_kind();
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Some(left);
        };

        let operator_bp = parser.lookahead_binding_power();
        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

/// Consumes the operators and operands that would have bound to a literal
/// which could not be built, leaving the cursor where a successful parse
/// would have. The consumed expression is discarded.
fn skip_operand_chain(parser: &mut Parser, bp: BindingPower) {
    while parser.lookahead_token_kind() != TokenKind::Semicolon
        && bp < parser.lookahead_binding_power()
    {
        if !parser
            .get_led_lookup()
            .contains_key(&parser.lookahead_token_kind())
        {
            return;
        }

        let operator_bp = parser.lookahead_binding_power();
        parser.advance();
        trace!("skipping {} after absent operand", parser.current_token());

        if parser.current_token_kind() == TokenKind::OpenParen {
            let _ = parse_call_arguments(parser);
        } else {
            parser.advance();
            let _ = parse_expr(parser, operator_bp);
        }
    }
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(IdentifierExpr {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => {
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token.span.start.clone(),
            );
            None
        }
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary).map(Box::new);

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default);
    parser.expect_lookahead(TokenKind::CloseParen)?;

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    parser.expect_lookahead(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default).map(Box::new);
    parser.expect_lookahead(TokenKind::CloseParen)?;

    parser.expect_lookahead(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.lookahead_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_lookahead(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expr::If(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    parser.expect_lookahead(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_lookahead(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser);

    Some(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the cursor on the opening parenthesis.
fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<IdentifierExpr>> {
    let mut parameters = vec![];

    if parser.lookahead_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(parameters);
    }

    loop {
        let token = parser.expect_lookahead(TokenKind::Identifier)?;
        parameters.push(IdentifierExpr {
            value: token.value.clone(),
            token,
        });

        if parser.lookahead_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    parser.expect_lookahead(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp).map(Box::new);

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Option<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

/// Parses `x, y + 1, z)` with the cursor on the opening parenthesis.
/// Arguments that fail to parse are dropped; their errors are already recorded.
fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expr>> {
    let mut args = vec![];

    if parser.lookahead_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Some(args);
    }

    parser.advance();
    args.extend(parse_expr(parser, BindingPower::Default));

    while parser.lookahead_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        args.extend(parse_expr(parser, BindingPower::Default));
    }

    parser.expect_lookahead(TokenKind::CloseParen)?;

    Some(args)
}
