//! # Segmenter
//!
//! Splits raw input into fragments ready for classification.
//!
//! Each character falls into one of three classes: ASCII letter, ASCII digit, or
//! anything else. Runs of "anything else" (whitespace, operators, brackets, the
//! underscore, non-ASCII text) are delimiters and are dropped. A change between the
//! letter and digit classes closes the current fragment without consuming either
//! side, so `4x5` yields `4`, `x`, `5` while `x+y` yields `x`, `y`.

use super::token::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// A non-empty slice of the input together with its byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Fragment<'a> {
    fn new(input: &'a str, start: usize, end: usize) -> Self {
        Self {
            text: &input[start..end],
            span: Span::new(start, end),
        }
    }

    pub fn is_letters(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_alphabetic())
    }
}

/// Splits `input` into fragments in left-to-right order.
///
/// Never fails and never yields an empty fragment.
#[tracing::instrument(level = "debug", skip(input))]
pub fn segment(input: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    // (start offset, class) of the fragment being built
    let mut current: Option<(usize, CharClass)> = None;

    for (offset, c) in input.char_indices() {
        let class = CharClass::of(c);
        match (current, class) {
            (Some((start, _)), CharClass::Other) => {
                fragments.push(Fragment::new(input, start, offset));
                current = None;
            }
            (Some((start, prev)), _) if prev != class => {
                fragments.push(Fragment::new(input, start, offset));
                current = Some((offset, class));
            }
            (None, CharClass::Letter | CharClass::Digit) => current = Some((offset, class)),
            _ => {}
        }
    }

    if let Some((start, _)) = current {
        fragments.push(Fragment::new(input, start, input.len()));
    }

    tracing::debug!("segmented into {} fragments", fragments.len());
    fragments
}

/// Splits a letter fragment into one fragment per character.
pub(crate) fn split_letters(fragment: Fragment<'_>) -> impl Iterator<Item = Fragment<'_>> {
    let Fragment { text, span } = fragment;
    text.char_indices().map(move |(offset, c)| {
        let width = c.len_utf8();
        let start = span.start + offset;
        Fragment {
            text: &text[offset..offset + width],
            span: Span::new(start, start + width),
        }
    })
}
