use std::sync::Arc;

use crate::{
    lang::{CHINESE, DEFAULT, JAPANESE, SIGNWRITING, THAI},
    registry::Registry,
    segmenter::{ChineseUnigram, JapaneseScriptRuns, SignWritingSymbols, ThaiDictionary, UnboundWords},
};

/// The canonical table:
///
/// | # | language    | scripts                  |
/// |---|-------------|--------------------------|
/// | 1 | SignWriting | SignWriting              |
/// | 2 | Chinese     | Han                      |
/// | 3 | Japanese    | Han, Hiragana, Katakana  |
/// | 4 | Thai        | Thai                     |
/// | 5 | Default     | everything else          |
///
/// Chinese precedes Japanese, so a run that *starts* with Han goes to Chinese;
/// a run that starts with kana goes to Japanese and keeps any Han that follows.
/// Thai reads its lexicon from `WORDS_SEGMENTATION_THAI_DICT` when set.
pub fn standard() -> Registry {
    Registry::builder()
        .add_language(SIGNWRITING, ["SignWriting"], Arc::new(SignWritingSymbols))
        .add_language(CHINESE, ["Han"], Arc::new(ChineseUnigram))
        .add_language(JAPANESE, ["Han", "Hiragana", "Katakana"], Arc::new(JapaneseScriptRuns))
        .add_language(THAI, ["Thai"], Arc::new(ThaiDictionary::from_env()))
        .fallback(DEFAULT, Arc::new(UnboundWords))
        .build()
        .expect("standard registry is a constant table – this is a bug")
}

/// Whitespace/control tokenization only; no script routing.
pub fn unscripted() -> Registry {
    Registry::builder()
        .fallback(DEFAULT, Arc::new(UnboundWords))
        .build()
        .expect("unscripted registry is a constant table – this is a bug")
}
