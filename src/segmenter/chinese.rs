// src/segmenter/chinese.rs
//! Chinese – one token per Han grapheme.
//!
//! Unigram indexing needs no dictionary: "北京" becomes "北" and "京". Hosts
//! that want real word boundaries register a dictionary segmenter under the
//! same name instead.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::segmenter::{SegmentError, Tokens, WordSegmenter};

#[derive(Debug, Default, Clone, Copy)]
pub struct ChineseUnigram;

impl WordSegmenter for ChineseUnigram {
    fn name(&self) -> &'static str {
        "chinese_unigram"
    }

    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError> {
        Ok(span.graphemes(true).map(Cow::Borrowed).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ideograph_is_a_token() {
        let cases: &[(&str, &[&str])] = &[
            ("中", &["中"]),
            ("东京", &["东", "京"]),
            ("中华人民共和国", &["中", "华", "人", "民", "共", "和", "国"]),
            ("一二三四五六七八九十", &["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"]),
        ];
        for &(input, expected) in cases {
            let tokens = ChineseUnigram.segment(input).unwrap();
            assert_eq!(tokens, expected, "Failed on input: {input}");
        }
    }

    #[test]
    fn shared_han_punctuation_is_its_own_token() {
        assert_eq!(ChineseUnigram.segment("你好。").unwrap(), ["你", "好", "。"]);
    }

    #[test]
    fn ideographic_variation_sequences_stay_whole() {
        // 葛 + VARIATION SELECTOR-17
        let input = "葛\u{E0100}城";
        assert_eq!(ChineseUnigram.segment(input).unwrap(), ["葛\u{E0100}", "城"]);
    }
}
