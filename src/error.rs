use thiserror::Error;

use crate::tokenizer::token::Span;

/// Failures of the surfaces around the tokenizer.
///
/// Tokenizing itself never fails; these cover configuration loading, id decoding
/// and the opt-in strict validation of a token stream.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown token {text:?} at {span}")]
    UnknownToken { text: String, span: Span },

    #[error("Invalid token kind id: {0}")]
    InvalidTokenKind(u8),
}

pub type LexResult<T> = Result<T, Error>;
