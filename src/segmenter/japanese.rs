// src/segmenter/japanese.rs
//! Japanese – split at writing-system transitions.
//!
//! Without a morphological dictionary the most reliable cue in Japanese text
//! is the switch between kanji, hiragana and katakana: 私は学生です →
//! 私 | は | 学生 | です. Rules:
//! * a token is a maximal run of one class (Han, Hiragana or Katakana);
//! * the prolonged sound mark and the iteration marks (ー, ゝ, ヽ, 々 …) extend
//!   whatever run precedes them;
//! * everything else in a Japanese span (、 。 ・ 「 」 …) is a one-grapheme
//!   token.
//!
//! Graphemes are the unit, so a combining voiced mark never leaves its kana.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    segmenter::{SegmentError, Tokens, WordSegmenter},
    unicode::{is_cjk_unified_ideograph, is_hiragana, is_katakana, is_run_continuation},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseScriptRuns;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KanaClass {
    Han,
    Hiragana,
    Katakana,
    Continuation,
    Symbol,
}

#[inline(always)]
fn classify(cluster: &str) -> KanaClass {
    let Some(c) = cluster.chars().next() else {
        return KanaClass::Symbol;
    };
    if is_run_continuation(c) {
        KanaClass::Continuation
    } else if is_cjk_unified_ideograph(c) {
        KanaClass::Han
    } else if is_hiragana(c) {
        KanaClass::Hiragana
    } else if is_katakana(c) {
        KanaClass::Katakana
    } else {
        KanaClass::Symbol
    }
}

impl WordSegmenter for JapaneseScriptRuns {
    fn name(&self) -> &'static str {
        "japanese_script_runs"
    }

    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError> {
        let mut tokens = Tokens::new();
        let mut run_start = 0;
        let mut run_class: Option<KanaClass> = None;

        for (idx, cluster) in span.grapheme_indices(true) {
            let class = classify(cluster);
            let extends = match (run_class, class) {
                (Some(KanaClass::Symbol), _) | (None, _) => false,
                (Some(_), KanaClass::Continuation) => true,
                (Some(prev), curr) => prev == curr,
            };
            if !extends {
                if idx > run_start {
                    tokens.push(Cow::Borrowed(&span[run_start..idx]));
                }
                run_start = idx;
                // A leading mark has nothing to extend; treat it as a symbol.
                run_class = Some(match class {
                    KanaClass::Continuation => KanaClass::Symbol,
                    other => other,
                });
            }
        }
        if run_start < span.len() {
            tokens.push(Cow::Borrowed(&span[run_start..]));
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(s: &str) -> Vec<Cow<'_, str>> {
        JapaneseScriptRuns.segment(s).unwrap()
    }

    #[test]
    fn splits_at_script_transitions() {
        assert_eq!(seg("私は学生です"), ["私", "は", "学生", "です"]);
        assert_eq!(seg("かなカナ漢字"), ["かな", "カナ", "漢字"]);
        assert_eq!(seg("東京タワーに行く"), ["東京", "タワー", "に", "行", "く"]);
    }

    #[test]
    fn marks_extend_the_previous_run() {
        assert_eq!(seg("すごーい"), ["すごーい"]);
        assert_eq!(seg("人々"), ["人々"]);
        assert_eq!(seg("いすゞ"), ["いすゞ"]);
    }

    #[test]
    fn leading_mark_is_a_symbol() {
        assert_eq!(seg("ーあ"), ["ー", "あ"]);
    }

    #[test]
    fn punctuation_is_atomic() {
        assert_eq!(seg("はい、そう。"), ["はい", "、", "そう", "。"]);
        assert_eq!(seg("「」"), ["「", "」"]);
        assert_eq!(seg("カ・ナ"), ["カ", "・", "ナ"]);
    }

    #[test]
    fn combining_voiced_mark_stays_with_its_kana() {
        // か + COMBINING VOICED SOUND MARK, then カ
        assert_eq!(seg("か\u{3099}カ"), ["か\u{3099}", "カ"]);
    }

    #[test]
    fn halfwidth_katakana_is_katakana() {
        assert_eq!(seg("ｶﾀｶﾅかな"), ["ｶﾀｶﾅ", "かな"]);
    }

    #[test]
    fn tokens_reassemble_the_span() {
        for s in ["私は学生です", "東京タワーに行く", "ーー、。", "ｶﾀｶﾅ々"] {
            assert_eq!(seg(s).concat(), s);
        }
    }
}
