//! # Token Data Model
//!
//! Token kinds, tokens and their source spans.
//!
//! Every [`TokenKind`] carries a stable numeric id (`NUMBER` is `0`, `UNKNOWN` is `11`).
//! Downstream consumers serialize kinds by that id, so reordering the variants is a
//! breaking change.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::Error;

/// Lexical category of a fragment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum TokenKind {
    Number = 0,
    LeftParen = 1,
    RightParen = 2,
    LeftBracket = 3,
    RightBracket = 4,
    Add = 5,
    Subtract = 6,
    Multiply = 7,
    Divide = 8,
    Equals = 9,
    Letter = 10,
    Unknown = 11,
}

impl TokenKind {
    /// Stable numeric identity of this kind.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// The single character an operator or grouping kind is spelled with.
    ///
    /// `Equals` reports `=` even though the classifier never produces it.
    pub fn symbol(self) -> Option<char> {
        match self {
            TokenKind::LeftParen => Some('('),
            TokenKind::RightParen => Some(')'),
            TokenKind::LeftBracket => Some('['),
            TokenKind::RightBracket => Some(']'),
            TokenKind::Add => Some('+'),
            TokenKind::Subtract => Some('-'),
            TokenKind::Multiply => Some('*'),
            TokenKind::Divide => Some('/'),
            TokenKind::Equals => Some('='),
            TokenKind::Number | TokenKind::Letter | TokenKind::Unknown => None,
        }
    }

    /// True for the arithmetic operators `+ - * / =`, false for grouping symbols.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Subtract
                | TokenKind::Multiply
                | TokenKind::Divide
                | TokenKind::Equals
        )
    }
}

impl From<TokenKind> for u8 {
    fn from(kind: TokenKind) -> Self {
        kind.id()
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        let kind = match id {
            0 => TokenKind::Number,
            1 => TokenKind::LeftParen,
            2 => TokenKind::RightParen,
            3 => TokenKind::LeftBracket,
            4 => TokenKind::RightBracket,
            5 => TokenKind::Add,
            6 => TokenKind::Subtract,
            7 => TokenKind::Multiply,
            8 => TokenKind::Divide,
            9 => TokenKind::Equals,
            10 => TokenKind::Letter,
            11 => TokenKind::Unknown,
            other => return Err(Error::InvalidTokenKind(other)),
        };
        Ok(kind)
    }
}

/// A classified fragment. `text` is the fragment exactly as segmented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Byte range of a fragment within the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "start: {}, end: {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub token: Token,
    pub span: Span,
}
