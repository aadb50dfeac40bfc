//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from an owned [`Lexer`] with exactly one token of lookahead and uses a
//! Pratt approach with NUD/LED handlers for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Syntax errors never abort a parse. They are recorded in order and
//! returned next to the (possibly partial) [`Program`].

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The parser owns its lexer. `current` is the token being examined and
/// `lookahead` the one after it; both only ever move forward.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token under the cursor
    current: Token,
    /// The token after the cursor
    lookahead: Token,
    /// Errors recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with the default handler tables installed.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let lookahead = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            lookahead,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Creates a parser directly from source text.
    ///
    /// # Arguments
    ///
    /// * `source` - The program text
    /// * `file` - Name used in positions, `"shell"` when `None`
    pub fn from_source(source: &str, file: Option<String>) -> Self {
        Parser::new(Lexer::new(source, file))
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn lookahead_token(&self) -> &Token {
        &self.lookahead
    }

    pub fn lookahead_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.lookahead, next);
        trace!("advanced to {}", self.current);
    }

    /// Advances if the lookahead is of `expected_kind`, returning the new
    /// current token. Otherwise records an error and returns `None`
    /// without moving the cursor.
    pub fn expect_lookahead(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.lookahead.kind == expected_kind {
            self.advance();
            return Some(self.current.clone());
        }

        let position = self.lookahead.span.start.clone();
        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                received: self.lookahead.kind,
            },
            position,
        );
        None
    }

    /// Records a syntax error.
    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        debug!("parse error at {}:{}: {}", position.1, position.0, error);
        self.errors.push(Error::new(error, position));
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Precedence of the lookahead token, `Default` when it has no infix role.
    pub fn lookahead_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.lookahead.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses every statement until `EOF`.
    ///
    /// Statements that fail to parse are left out; the reason is in the
    /// returned error list. Callers must check that list, since a failed
    /// parse can still produce a non-empty program.
    pub fn parse_program(mut self) -> (Program, Vec<Error>) {
        let mut statements = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(&mut self) {
                statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            statements.len(),
            self.errors.len()
        );

        (Program { statements }, self.errors)
    }
}

/// Parses source text into a [`Program`] plus the errors found on the way.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Name used in positions, `"shell"` when `None`
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    Parser::from_source(source, file).parse_program()
}
