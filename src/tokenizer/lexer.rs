use super::{
    segment::{segment, split_letters, Fragment},
    token::{Token, TokenKind, TokenSpan},
};
use crate::{
    config::{LetterMode, TokenizerConfig},
    Error, LexResult,
};

/// Segments and classifies input according to a [`TokenizerConfig`].
///
/// Holds no state between calls; one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Tokens of `input` in left-to-right order. Never fails.
    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.tokenize_spans(input)
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    /// Like [`tokenize`](Self::tokenize), keeping each token's byte span.
    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn tokenize_spans(&self, input: &str) -> Vec<TokenSpan> {
        let tokens: Vec<TokenSpan> = self
            .fragments(input)
            .into_iter()
            .filter(|fragment| !fragment.span.is_empty())
            .map(|fragment| TokenSpan {
                token: Token::classify(fragment.text),
                span: fragment.span,
            })
            .filter(|spanned| self.config.keep_unknown || spanned.token.kind != TokenKind::Unknown)
            .collect();

        tracing::debug!("produced {} tokens", tokens.len());
        tokens
    }

    fn fragments<'a>(&self, input: &'a str) -> Vec<Fragment<'a>> {
        let fragments = segment(input);
        match self.config.letter_mode {
            LetterMode::Grouped => fragments,
            LetterMode::PerCharacter => fragments
                .into_iter()
                .flat_map(|fragment| -> Box<dyn Iterator<Item = Fragment<'a>> + 'a> {
                    if fragment.is_letters() {
                        Box::new(split_letters(fragment))
                    } else {
                        Box::new(std::iter::once(fragment))
                    }
                })
                .collect(),
        }
    }
}

/// Fails on the first `UNKNOWN` token, for callers that want strict input.
pub fn reject_unknown(tokens: &[TokenSpan]) -> LexResult<()> {
    match tokens.iter().find(|t| t.token.kind == TokenKind::Unknown) {
        Some(unknown) => {
            let error = Error::UnknownToken {
                text: unknown.token.text.clone(),
                span: unknown.span,
            };
            tracing::warn!("{}", error);
            Err(error)
        }
        None => Ok(()),
    }
}
