//! # Classifier
//!
//! Maps a fragment to exactly one [`TokenKind`]. Rules are tried in order and the
//! first match wins:
//!
//! 1. numeric literal ([`is_numeric_literal`]) → `NUMBER`
//! 2. exactly one of `+ - / * ( ) [ ]` → the matching symbol kind
//! 3. exactly one ASCII letter, either case → `LETTER`
//! 4. anything else → `UNKNOWN`
//!
//! Rule 3 looks at single characters only. A grouped letter run such as `abc` is
//! `UNKNOWN`, not an identifier and not three letters; see
//! [`LetterMode::PerCharacter`](crate::config::LetterMode::PerCharacter) for splitting
//! runs before they reach this stage.

use super::{
    number::is_numeric_literal,
    symbol::parse_symbol,
    token::{Token, TokenKind},
};

/// Kind of `text`, a pure function of the text alone.
pub fn classify(text: &str) -> TokenKind {
    if is_numeric_literal(text) {
        return TokenKind::Number;
    }
    if let Some(kind) = parse_symbol(text) {
        return kind;
    }
    if is_single_letter(text) {
        return TokenKind::Letter;
    }
    TokenKind::Unknown
}

fn is_single_letter(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

impl Token {
    /// Builds the token for a fragment, classifying its text.
    pub fn classify(text: &str) -> Self {
        let kind = classify(text);
        tracing::trace!("classified {:?} as {}", text, kind);
        Token::new(kind, text)
    }
}
