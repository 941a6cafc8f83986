//! # Symbol Token Handling
//!
//! Single-character operators and grouping symbols recognized by the classifier.
//!
//! ## Matching Rules
//!
//! Only a fragment consisting of exactly one of `+ - / * ( ) [ ]` is a symbol. Longer
//! fragments such as `++` or `()` never match, and `=` is not matched either: the
//! [`TokenKind::Equals`] kind exists for consumers but no fragment classifies to it.
//!
//! The segmenter drops every non-alphanumeric run, so these kinds only appear when a
//! fragment is classified directly through [`classify`](super::classify::classify).

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, value},
    error::context,
};

use super::{token::TokenKind, ParserResult};

/// Parses one operator or grouping symbol from the front of `input`.
///
/// # Examples
///
/// ```
/// # use arith_lexer::tokenizer::symbol::parse_operator;
/// # use arith_lexer::tokenizer::token::TokenKind;
/// let (rest, kind) = parse_operator("+ 1").unwrap();
/// assert_eq!(kind, TokenKind::Add);
/// assert_eq!(rest, " 1");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<TokenKind> {
    context(
        "operator",
        alt((
            value(TokenKind::Add, tag("+")),
            value(TokenKind::Subtract, tag("-")),
            value(TokenKind::Divide, tag("/")),
            value(TokenKind::Multiply, tag("*")),
            value(TokenKind::LeftParen, tag("(")),
            value(TokenKind::RightParen, tag(")")),
            value(TokenKind::LeftBracket, tag("[")),
            value(TokenKind::RightBracket, tag("]")),
        )),
    )(input)
}

/// Classifies `text` as a symbol only when the whole text is one symbol.
pub fn parse_symbol(text: &str) -> Option<TokenKind> {
    all_consuming(parse_operator)(text)
        .ok()
        .map(|(_, kind)| kind)
}
