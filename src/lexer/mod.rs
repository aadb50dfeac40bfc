//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token span tracking for error reporting
//! - Whitespace skipping and `Illegal` tokens for unknown characters

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
