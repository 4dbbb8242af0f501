//! Lexer module shared by all four syntaxes.
//!
//! Tokenizes input using winnow. The token set is a superset; each parser
//! mode rejects kinds its grammar does not admit.

pub mod chars;
pub mod lexer;
pub mod token;

pub use lexer::{tokenize, LexOutput, Lexer};
pub use token::{Token, TokenKind};
