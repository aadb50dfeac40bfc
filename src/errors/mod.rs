//! Error types for the front end.
//!
//! The lexer never fails; it hands unknown characters to the parser as
//! `Illegal` tokens. The parser records syntax errors here instead of
//! aborting. This module includes:
//!
//! - Error structures with source position information
//! - The three syntax error variants and their message formats
//! - Caret diagnostics rendered against the source text

pub mod errors;
