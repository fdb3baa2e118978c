//! Per-language segmentation capability.
//!
//! The router never decides where a word ends inside a script span. It hands
//! the span to a [`WordSegmenter`] and yields whatever comes back. Anything that
//! can turn `&str` into tokens qualifies: the built-in dictionary-free
//! segmenters below, a host-provided dictionary segmenter, or a plain
//! [`SegmentFn`] stub in tests.
//!
//! A segmenter may hold a lazily-initialised resource. If that resource cannot
//! be loaded it returns [`SegmentError::Unavailable`], and the error travels to
//! the caller of `segment` untouched. The router never substitutes the Default
//! tokenizer for a failing language.

pub mod chinese;
pub mod japanese;
pub mod signwriting;
pub mod thai;
pub mod unbound;

use std::borrow::Cow;
use thiserror::Error;

pub use chinese::ChineseUnigram;
pub use japanese::JapaneseScriptRuns;
pub use signwriting::SignWritingSymbols;
pub use thai::ThaiDictionary;
pub use unbound::UnboundWords;

/// Tokens produced from one span. Borrowed whenever the segmenter only slices.
pub type Tokens<'a> = Vec<Cow<'a, str>>;

/// Plain function segmenter. Lets a host register `fn` items without a wrapper
/// type: `Arc::new(my_segmenter as SegmentFn)`.
pub type SegmentFn = for<'a> fn(&'a str) -> Result<Tokens<'a>, SegmentError>;

/// Errors raised while segmenting. None of them is recovered by the router.
#[derive(Debug, Clone, Error)]
pub enum SegmentError {
    /// A collaborator's external resource (dictionary, model) failed to load.
    #[error("segmenter for `{language}` is unavailable: {reason}")]
    Unavailable {
        language: &'static str,
        reason: String,
    },

    /// A collaborator rejected a span it was handed.
    #[error("segmenter for `{language}` failed: {reason}")]
    Failed {
        language: &'static str,
        reason: String,
    },

    /// The composite routing pattern did not compile.
    #[error("routing pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    /// A match came back from a branch that no registry entry owns.
    #[error("internal error: matched branch `{0}` has no registry entry")]
    UnresolvedBranch(String),
}

/// Turns one span of text into tokens.
pub trait WordSegmenter: Send + Sync {
    /// Human-readable name – used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Segment `span`. The span is never empty and only contains characters
    /// claimed by the language this segmenter is registered for.
    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError>;
}

impl WordSegmenter for SegmentFn {
    fn name(&self) -> &'static str {
        "fn"
    }

    #[inline]
    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError> {
        (*self)(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(span: &str) -> Result<Tokens<'_>, SegmentError> {
        Ok(vec![Cow::Borrowed(span)])
    }

    fn broken(_: &str) -> Result<Tokens<'_>, SegmentError> {
        Err(SegmentError::Unavailable {
            language: "Klingon",
            reason: "dictionary missing".into(),
        })
    }

    #[test]
    fn fn_pointers_are_segmenters() {
        let seg = whole as SegmentFn;
        assert_eq!(seg.segment("abc").unwrap(), vec!["abc"]);
        assert_eq!(seg.name(), "fn");
    }

    #[test]
    fn unavailable_error_names_the_language() {
        let err = (broken as SegmentFn).segment("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "segmenter for `Klingon` is unavailable: dictionary missing"
        );
    }
}
