// src/segmenter/unbound.rs
//! Default-branch tokenizer – text that no registered script claims.
//!
//! Three token classes, tried in this order at every position:
//! 1. a single control character (always atomic);
//! 2. a run of non-space, non-control characters plus at most ONE trailing
//!    whitespace character ("word ");
//! 3. a run of whitespace not already taken as a trailing space.
//!
//! The classes are exhaustive, so `find_iter` leaves no gaps and the tokens
//! concatenate back to the span.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::{
    segmenter::{SegmentError, Tokens, WordSegmenter},
    unicode::CONTROL_CLASS,
};

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"[{CONTROL_CLASS}]|[^\s{CONTROL_CLASS}]+\s?|\s+"
    ))
    .expect("default token pattern is a constant – this is a bug")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct UnboundWords;

impl WordSegmenter for UnboundWords {
    fn name(&self) -> &'static str {
        "unbound_words"
    }

    #[inline]
    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError> {
        Ok(unbound_words(span).map(Cow::Borrowed).collect())
    }
}

/// Lazily tokenize an unscripted span.
#[inline]
pub fn unbound_words(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str())
}
