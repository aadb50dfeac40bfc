use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, lexer::tokens::TokenKind, Position};

/// A syntax error recorded by the parser, tagged with where it happened.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human-readable message, identical to `to_string()`.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFunction { .. } => "NoPrefixParseFunction",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseFunction { kind: TokenKind::Illegal } => ErrorTip::Suggestion(
                String::from("Unrecognised character in source"),
            ),
            ErrorImpl::NoPrefixParseFunction { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
        }
    }

    /// Renders a caret diagnostic pointing into `source`.
    ///
    /// ```text
    /// Error: UnexpectedToken (expected next token to be Assignment, got Integer)
    /// -> shell
    ///   |
    /// 1 | let x 5;
    ///   | ------^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut output = String::new();

        match self.get_tip() {
            ErrorTip::None => {
                output.push_str(&format!("Error: {} ({})\n", self.get_error_name(), self))
            }
            tip => output.push_str(&format!(
                "Error: {} ({}; {})\n",
                self.get_error_name(),
                self,
                tip
            )),
        }
        output.push_str(&format!("-> {}\n", self.position.1));

        let Some((line, line_text, line_pos)) = get_line_at_position(source, self.position.0)
        else {
            return output;
        };

        let line_str = line.to_string();
        let padding = line_str.len() + 2;

        output.push_str(&format!("{:>padding$}\n", "|"));

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
        output.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

        let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
        output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

        output
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (String::from(trimmed), string.len() - trimmed.len())
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFunction { kind: TokenKind },
    #[error("could not parse {literal} as integer")]
    IntegerParseError { literal: String },
    #[error("expected next token to be {expected}, got {received}")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
}
