use std::borrow::Cow;

use crate::segmenter::WordSegmenter;

/// Segmenters opt into the shared contract suite by implementing this.
pub trait SegmenterTestConfig: WordSegmenter + Sized {
    /// Spans this segmenter may be handed by the router: non-empty, and only
    /// characters of the scripts it is registered for.
    fn spans() -> &'static [&'static str];

    /// Span → expected tokens.
    fn expected() -> &'static [(&'static str, &'static [&'static str])] {
        &[]
    }
}

/// Assert that a segmenter satisfies the universal contracts:
///
/// 1. `tokens_reassemble_span` → tokens concatenate back to the span;
/// 2. `no_empty_tokens` → every token has at least one character;
/// 3. `borrowed_tokens_point_into_span` → borrowed tokens slice the input;
/// 4. `segmentation_is_deterministic` → same span, same tokens;
/// 5. `expected_tokens` → known inputs produce the documented tokens.
#[macro_export]
macro_rules! assert_segmenter_contract {
    ($seg:expr) => {
        $crate::testing::segmenter_contract::tokens_reassemble_span(&$seg);
        $crate::testing::segmenter_contract::no_empty_tokens(&$seg);
        $crate::testing::segmenter_contract::borrowed_tokens_point_into_span(&$seg);
        $crate::testing::segmenter_contract::segmentation_is_deterministic(&$seg);
        $crate::testing::segmenter_contract::expected_tokens(&$seg);
    };
}

pub fn tokens_reassemble_span<S: SegmenterTestConfig>(seg: &S) {
    for &span in S::spans() {
        let tokens = seg.segment(span).unwrap();
        assert_eq!(
            tokens.concat(),
            span,
            "`{}` lost or reordered text of `{span}`: {tokens:?}",
            seg.name()
        );
    }
}

pub fn no_empty_tokens<S: SegmenterTestConfig>(seg: &S) {
    for &span in S::spans() {
        let tokens = seg.segment(span).unwrap();
        assert!(
            tokens.iter().all(|t| !t.is_empty()),
            "`{}` produced an empty token for `{span}`: {tokens:?}",
            seg.name()
        );
    }
}

pub fn borrowed_tokens_point_into_span<S: SegmenterTestConfig>(seg: &S) {
    for &span in S::spans() {
        let range = span.as_bytes().as_ptr_range();
        for token in seg.segment(span).unwrap() {
            if let Cow::Borrowed(t) = token {
                let p = t.as_ptr();
                assert!(
                    range.start <= p && p < range.end,
                    "`{}` borrowed `{t}` from outside `{span}`",
                    seg.name()
                );
            }
        }
    }
}

pub fn segmentation_is_deterministic<S: SegmenterTestConfig>(seg: &S) {
    for &span in S::spans() {
        assert_eq!(
            seg.segment(span).unwrap(),
            seg.segment(span).unwrap(),
            "`{}` is not deterministic on `{span}`",
            seg.name()
        );
    }
}

pub fn expected_tokens<S: SegmenterTestConfig>(seg: &S) {
    for &(span, expected) in S::expected() {
        let tokens = seg.segment(span).unwrap();
        assert_eq!(tokens, expected, "`{}` on `{span}`", seg.name());
    }
}
