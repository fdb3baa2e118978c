//! Script-aware multilingual word segmentation.
//!
//! Text is first cut into spans by writing system (Unicode
//! Script_Extensions), then each span is handed to the segmenter of the
//! language that claims its script. Text no language claims goes to the
//! Default tokenizer: control characters, words with one trailing space, and
//! whitespace runs.
//!
//! ```
//! use words_segmentation::words;
//!
//! let tokens = words("hello world 東京").unwrap();
//! assert_eq!(tokens, ["hello ", "world ", "東", "京"]);
//! ```

pub mod dispatch;
pub mod lang;
pub mod pattern;
pub mod registry;
pub mod segmenter;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatch::{Segments, Span, Spans, segment, spans, words};
pub use lang::{LanguageSpec, ScriptSet};
pub use registry::{Registry, RegistryBuilder, RegistryError, preset};
pub use segmenter::{
    ChineseUnigram, JapaneseScriptRuns, SegmentError, SegmentFn, SignWritingSymbols,
    ThaiDictionary, Tokens, UnboundWords, WordSegmenter,
};
