//! Loader for Stak source text.
//!
//! Turns source into a [`Program`](stak_ir::Program) in three steps:
//!
//! 1. [`lex`]: source to tokens (whitespace and `#` comments dropped)
//! 2. [`parse`]: tokens to rules, interning stack names and literals and
//!    numbering each rule's variables by first occurrence
//! 3. [`load`]: [`parse`] followed by initial-state extraction
//!
//! Every step fails on the first error. Spans live beside the program in
//! [`RuleSource`] records, parallel to the program's rule list.

mod error;
mod lexer;
mod load;
mod parser;
mod token;

pub use error::{LoadError, ParseError, ParseErrorKind};
pub use lexer::{is_word_char, lex};
pub use load::{load, Loaded, Parsed, RuleSource, VariableSource};
pub use parser::parse;
pub use token::{Token, TokenKind};
