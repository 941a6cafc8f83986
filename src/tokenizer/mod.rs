//! # Tokenizer Component
//!
//! Turns a raw arithmetic expression into a sequence of classified tokens. It is the
//! front end of an expression pipeline; parsing and evaluation happen elsewhere.
//!
//! ## Processing Stages
//!
//! Data flows one way through two stages:
//!
//! 1. **Segmentation** ([`segment`]): the input is split into fragments. Delimiter runs
//!    (anything that is not an ASCII letter or digit) are removed, and a boundary is
//!    inserted wherever a letter meets a digit.
//! 2. **Classification** ([`classify`]): each fragment gets exactly one
//!    [`TokenKind`](token::TokenKind).
//!
//! Both stages are pure. Tokenizing never fails; text that fits no other rule becomes
//! `UNKNOWN`.
//!
//! ## Component Structure
//!
//! * [`token`]: token kinds, tokens and spans
//! * [`segment`]: fragment splitting
//! * [`number`]: numeric literal predicate
//! * [`symbol`]: single-character operators and brackets
//! * [`classify`]: fragment classification
//! * [`lexer`]: the configurable [`Tokenizer`](lexer::Tokenizer)
//!
//! ## Usage Example
//!
//! ```rust
//! use arith_lexer::tokenizer::{tokenize, token::{Token, TokenKind}};
//!
//! let tokens = tokenize("4x + 5");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::new(TokenKind::Number, "4"),
//!         Token::new(TokenKind::Letter, "x"),
//!         Token::new(TokenKind::Number, "5"),
//!     ]
//! );
//! ```

use nom::{error::VerboseError, IResult};

pub mod classify;
pub mod lexer;
pub mod number;
pub mod segment;
pub mod symbol;
pub mod token;

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Tokenizes `input` with the default configuration.
pub fn tokenize(input: &str) -> Vec<token::Token> {
    lexer::Tokenizer::new().tokenize(input)
}
