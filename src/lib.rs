//! # arith-lexer: Arithmetic Expression Tokenizer
//!
//! Splits a raw arithmetic expression such as `4x + 5x = 0` into classified tokens
//! for a downstream parser or evaluator.
//!
//! - Tokenization ([`tokenizer`])
//! - Configuration ([`config`])
//! - Error handling ([`error`])
//!
//! ```text
//! Raw input → Segmenter → Fragments → Classifier → Tokens
//! ```

pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use config::{LetterMode, TokenizerConfig};
pub use error::*;
pub use tokenizer::{
    classify::classify,
    lexer::{reject_unknown, Tokenizer},
    segment::{segment, Fragment},
    token::{Span, Token, TokenKind, TokenSpan},
    tokenize,
};
