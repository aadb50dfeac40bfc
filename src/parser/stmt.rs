use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token. On exit the current token is the last
/// one belonging to the statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// A bare expression; the trailing semicolon is optional.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default);

    if parser.lookahead_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// `let <identifier> = <expr> [;]`
///
/// A missing identifier or `=` abandons the statement where the cursor
/// stands. There is no skip to the next `;`, so the rest of a malformed
/// statement is parsed as whatever it looks like.
pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_lookahead(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_lookahead(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default);

    if parser.lookahead_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Let(LetStmt { token, name, value }))
}

/// `return [<expr>] [;]`
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let token = parser.current_token().clone();

    let value = match parser.lookahead_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => {
            parser.advance();
            parse_expr(parser, BindingPower::Default)
        }
    };

    if parser.lookahead_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(Stmt::Return(ReturnStmt { token, value }))
}

/// Parses `{ ... }` with the cursor on the opening brace, stopping on the
/// closing brace or at `EOF`. Failed inner statements are left out.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    BlockStmt {
        token,
        body: statements,
    }
}
