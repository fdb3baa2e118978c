// src/segmenter/thai.rs
//! Thai – longest-match dictionary segmentation.
//!
//! Thai is written without spaces between words, so boundaries come from a
//! lexicon. At each position the longest dictionary word (measured in grapheme
//! clusters, so above/below vowels and tone marks never detach) is taken.
//! Clusters that start no known word are gathered into a single "unknown"
//! token until the next known word begins.
//!
//! The lexicon is loaded on first use:
//! * [`DictionarySource::Builtin`] – a small core vocabulary compiled in;
//! * [`DictionarySource::File`] – one word per line, `#` starts a comment.
//!
//! A file that cannot be read makes every call fail with
//! [`SegmentError::Unavailable`]. The failure is cached; the file is not
//! retried.

use std::{
    borrow::Cow,
    collections::HashSet,
    ffi::OsString,
    path::PathBuf,
    sync::OnceLock,
};

use phf::{Set, phf_set};
use unicode_segmentation::UnicodeSegmentation;

use crate::segmenter::{SegmentError, Tokens, WordSegmenter};

/// Environment variable naming a Thai word list for [`ThaiDictionary::from_env`].
pub const THAI_DICT_ENV: &str = "WORDS_SEGMENTATION_THAI_DICT";

const LANGUAGE: &str = "Thai";

static BUILTIN_WORDS: Set<&'static str> = phf_set! {
    "กรุงเทพ", "กับ", "การ", "กิน", "ขอบคุณ", "ของ", "ข้าว", "ครับ", "ความ", "คน",
    "คุณ", "ค่ะ", "งาน", "จะ", "ฉัน", "ชื่อ", "ดี", "ได้", "ทำ", "ทำงาน",
    "ที่", "ที่ไหน", "นักเรียน", "นี้", "น้ำ", "บ้าน", "ประเทศ", "ปี", "ผม", "พรุ่งนี้",
    "พูด", "ฟัง", "ภาษา", "มา", "มาก", "มี", "เมือง", "เมื่อวาน", "รถ", "รัก",
    "ร้อน", "เรา", "เรียน", "โรงเรียน", "โลก", "วัน", "วันนี้", "สวย", "สวัสดี", "หนังสือ",
    "อยู่", "อ่าน", "อะไร", "อาหาร", "เขา", "เขียน", "เดือน", "เป็น", "เล็ก", "เวลา",
    "และ", "โรง", "ใน", "ใหม่", "ใหญ่", "ให้", "ไทย", "ไป", "ไม่",
};

/// Where the lexicon comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Builtin,
    File(PathBuf),
}

impl DictionarySource {
    /// Source for a value of [`THAI_DICT_ENV`]: unset or empty means the
    /// built-in list.
    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::File(path.into()),
            _ => Self::Builtin,
        }
    }
}

#[derive(Debug)]
struct Lexicon {
    words: HashSet<Box<str>>,
    /// Longest entry, in bytes – bounds the prefix search.
    max_len: usize,
}

impl Lexicon {
    fn from_words<'w, I: IntoIterator<Item = &'w str>>(words: I) -> Self {
        let words: HashSet<Box<str>> = words
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .map(Box::from)
            .collect();
        let max_len = words.iter().map(|w| w.len()).max().unwrap_or(0);
        Self { words, max_len }
    }

    fn load(source: &DictionarySource) -> Result<Self, String> {
        match source {
            DictionarySource::Builtin => Ok(Self::from_words(BUILTIN_WORDS.iter().copied())),
            DictionarySource::File(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
                let lexicon = Self::from_words(content.lines());
                if lexicon.words.is_empty() {
                    return Err(format!("{} contains no words", path.display()));
                }
                Ok(lexicon)
            }
        }
    }

    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Longest-match Thai segmenter with a lazily loaded lexicon.
#[derive(Debug)]
pub struct ThaiDictionary {
    source: DictionarySource,
    lexicon: OnceLock<Result<Lexicon, String>>,
}

impl Default for ThaiDictionary {
    fn default() -> Self {
        Self::new(DictionarySource::Builtin)
    }
}

impl ThaiDictionary {
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            lexicon: OnceLock::new(),
        }
    }

    /// Use the file named by [`THAI_DICT_ENV`] when set, the built-in list
    /// otherwise.
    pub fn from_env() -> Self {
        Self::new(DictionarySource::from_env_value(std::env::var_os(THAI_DICT_ENV)))
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }

    fn lexicon(&self) -> Result<&Lexicon, SegmentError> {
        self.lexicon
            .get_or_init(|| {
                let loaded = Lexicon::load(&self.source);
                match &loaded {
                    Ok(lex) => tracing::debug!(
                        source = ?self.source,
                        words = lex.words.len(),
                        "loaded Thai lexicon"
                    ),
                    Err(reason) => tracing::debug!(source = ?self.source, %reason, "Thai lexicon unavailable"),
                }
                loaded
            })
            .as_ref()
            .map_err(|reason| SegmentError::Unavailable {
                language: LANGUAGE,
                reason: reason.clone(),
            })
    }
}

impl WordSegmenter for ThaiDictionary {
    fn name(&self) -> &'static str {
        "thai_dictionary"
    }

    fn segment<'a>(&self, span: &'a str) -> Result<Tokens<'a>, SegmentError> {
        let lexicon = self.lexicon()?;
        let bounds: Vec<usize> = span
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .chain(std::iter::once(span.len()))
            .collect();

        let mut tokens = Tokens::new();
        let mut unknown_start: Option<usize> = None;
        let mut k = 0;

        while k + 1 < bounds.len() {
            let start = bounds[k];
            let longest = (k + 1..bounds.len())
                .take_while(|&j| bounds[j] - start <= lexicon.max_len)
                .filter(|&j| lexicon.contains(&span[start..bounds[j]]))
                .last();

            match longest {
                Some(j) => {
                    if let Some(u) = unknown_start.take() {
                        tokens.push(Cow::Borrowed(&span[u..start]));
                    }
                    tokens.push(Cow::Borrowed(&span[start..bounds[j]]));
                    k = j;
                }
                None => {
                    unknown_start.get_or_insert(start);
                    k += 1;
                }
            }
        }
        if let Some(u) = unknown_start {
            tokens.push(Cow::Borrowed(&span[u..]));
        }
        Ok(tokens)
    }
}
