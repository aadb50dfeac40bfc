use std::{
    fmt::{Display, Formatter},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_optional, Expr, Stmt},
    expressions::IdentifierExpr,
};

/// `{ ... }`, used as the body of `if` branches and function literals.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Option<Expr>,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_optional(&self.expression, f)
    }
}

#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: IdentifierExpr,
    pub value: Option<Expr>,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.value, self.name)?;
        fmt_optional(&self.value, f)?;
        write!(f, ";")
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token.value)?;
        fmt_optional(&self.value, f)?;
        write!(f, ";")
    }
}
