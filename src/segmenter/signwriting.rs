// src/segmenter/signwriting.rs
//! Sutton SignWriting – one token per symbol.
//!
//! In the Unicode SignWriting block the fill (U+1DA9B..) and rotation
//! (U+1DAA1..) modifiers are combining marks, so a base symbol and its
//! modifiers form one extended grapheme cluster. Each cluster is a token.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::segmenter::{SegmentError, Tokens, WordSegmenter};

#[derive(Debug, Default, Clone, Copy)]
pub struct SignWritingSymbols;

impl WordSegmenter for SignWritingSymbols {
    fn name(&self) -> &'static str {
        "signwriting_symbols"
    }

    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError> {
        Ok(span.graphemes(true).map(Cow::Borrowed).collect())
    }
}
