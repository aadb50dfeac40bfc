use std::fmt::{Display, Formatter};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_list, fmt_optional, Expr},
    statements::BlockStmt,
};

// LITERALS

/// Identifier Expression
/// A bare name, also used for `let` targets and function parameters.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub token: Token,
    pub value: String,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Integer Expression
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// COMPLEX

/// Prefix Expression
/// A unary `-` or `!` applied to an operand.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expr>>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.operator)?;
        fmt_optional(&self.right, f)?;
        write!(f, ")")
    }
}

/// Infix Expression
/// A binary operation. `token` is the operator token.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Option<Box<Expr>>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} ", self.left, self.operator)?;
        fmt_optional(&self.right, f)?;
        write!(f, ")")
    }
}

/// If Expression
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Option<Box<Expr>>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "if")?;
        fmt_optional(&self.condition, f)?;
        write!(f, " {}", self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Expression
/// An anonymous function literal: `fn(<params>) { <body> }`.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub token: Token,
    pub parameters: Vec<IdentifierExpr>,
    pub body: BlockStmt,
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.token.value)?;
        fmt_list(&self.parameters, f)?;
        write!(f, ") {}", self.body)
    }
}

/// Call Expression
/// `token` is the opening parenthesis.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.callee)?;
        fmt_list(&self.arguments, f)?;
        write!(f, ")")
    }
}
