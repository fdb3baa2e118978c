// src/dispatch.rs
//! Segmentation dispatcher.
//!
//! [`Spans`] walks the routing pattern over the input and yields one [`Span`]
//! per match; [`Segments`] hands each span to its language's segmenter and
//! yields the result untouched. Both are lazy, forward-only and fused: after
//! the first error nothing more is produced.
//!
//! Spans partition the input: concatenated in order they reproduce it byte for
//! byte.

use std::iter::FusedIterator;

use regex::CaptureLocations;

use crate::{
    lang::LanguageSpec,
    pattern::CompositePattern,
    registry::Registry,
    segmenter::{SegmentError, Tokens},
};

/// A maximal substring routed to one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'r, 't> {
    /// Name of the branch (registry entry) that matched.
    pub name: &'r str,
    pub text: &'t str,
    /// Byte offsets into the input.
    pub start: usize,
    pub end: usize,
}

pub struct Spans<'r, 't> {
    registry: &'r Registry,
    text: &'t str,
    pos: usize,
    locs: Option<CaptureLocations>,
    done: bool,
}

impl<'r, 't> Spans<'r, 't> {
    pub(crate) fn new(registry: &'r Registry, text: &'t str) -> Self {
        Self {
            registry,
            text,
            pos: 0,
            locs: None,
            done: false,
        }
    }

    fn next_span(&mut self) -> Result<(Span<'r, 't>, &'r LanguageSpec), SegmentError> {
        let registry = self.registry;
        let pattern = registry.pattern()?;
        let locs = self.locs.get_or_insert_with(|| pattern.capture_locations());
        let start = self.pos;

        let (end, lang) = route(registry, pattern, locs, self.text, start)?;
        self.pos = end;

        tracing::trace!(language = lang.name(), start, end, "routed span");
        Ok((
            Span {
                name: lang.name(),
                text: &self.text[start..end],
                start,
                end,
            },
            lang,
        ))
    }

    fn advance(&mut self) -> Option<Result<(Span<'r, 't>, &'r LanguageSpec), SegmentError>> {
        if self.done || self.pos >= self.text.len() {
            return None;
        }
        let next = self.next_span();
        if next.is_err() {
            self.done = true;
        }
        Some(next)
    }
}

impl<'r, 't> Iterator for Spans<'r, 't> {
    type Item = Result<Span<'r, 't>, SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|r| r.map(|(span, _)| span))
    }
}

impl FusedIterator for Spans<'_, '_> {}

/// Resolve the span starting at `start` to its registry entry and end offset.
fn route<'r>(
    registry: &'r Registry,
    pattern: &CompositePattern,
    locs: &mut CaptureLocations,
    text: &str,
    start: usize,
) -> Result<(usize, &'r LanguageSpec), SegmentError> {
    let (end, name) = pattern
        .match_at(locs, text, start)
        .ok_or_else(|| SegmentError::UnresolvedBranch(format!("<no match at byte {start}>")))?;
    let name =
        name.ok_or_else(|| SegmentError::UnresolvedBranch(format!("<unnamed at byte {start}>")))?;
    let lang = registry
        .get(name)
        .ok_or_else(|| SegmentError::UnresolvedBranch(name.to_owned()))?;

    let end = if lang.is_fallback() {
        pattern.default_end(text, start, end)
    } else {
        end
    };
    Ok((end, lang))
}

/// Callback results, one per span, in input order.
pub struct Segments<'r, 't> {
    spans: Spans<'r, 't>,
}

impl<'r, 't> Segments<'r, 't> {
    pub(crate) fn new(registry: &'r Registry, text: &'t str) -> Self {
        Self {
            spans: Spans::new(registry, text),
        }
    }
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = Result<Tokens<'t>, SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        let routed = self.spans.advance()?;
        let result = routed.and_then(|(span, lang)| lang.segmenter().segment(span.text));
        if result.is_err() {
            self.spans.done = true;
        }
        Some(result)
    }
}

impl FusedIterator for Segments<'_, '_> {}

impl Registry {
    /// Route `text` without segmenting: one [`Span`] per match.
    pub fn spans<'r, 't>(&'r self, text: &'t str) -> Spans<'r, 't> {
        Spans::new(self, text)
    }

    /// Route `text` and run each span through its language's segmenter.
    pub fn segment<'r, 't>(&'r self, text: &'t str) -> Segments<'r, 't> {
        Segments::new(self, text)
    }

    /// All tokens of `text`, flattened. Stops at the first error.
    pub fn words<'t>(&self, text: &'t str) -> Result<Tokens<'t>, SegmentError> {
        let mut words = Tokens::new();
        for tokens in self.segment(text) {
            words.extend(tokens?);
        }
        Ok(words)
    }
}

/// [`Registry::segment`] on the process-wide registry.
pub fn segment(text: &str) -> Segments<'static, '_> {
    Registry::global().segment(text)
}

/// [`Registry::spans`] on the process-wide registry.
pub fn spans(text: &str) -> Spans<'static, '_> {
    Registry::global().spans(text)
}

/// [`Registry::words`] on the process-wide registry.
pub fn words(text: &str) -> Result<Tokens<'_>, SegmentError> {
    Registry::global().words(text)
}
