use std::{borrow::Cow, fmt, sync::Arc};

use smallvec::SmallVec;

use crate::segmenter::{SegmentFn, WordSegmenter};

pub const CHINESE: &str = "Chinese";
pub const JAPANESE: &str = "Japanese";
pub const SIGNWRITING: &str = "SignWriting";
pub const THAI: &str = "Thai";
pub const DEFAULT: &str = "Default";

/// Unicode script identifiers (`Han`, `Hiragana`, …) claimed by one language,
/// in declaration order.
pub type ScriptSet = SmallVec<[Cow<'static, str>; 4]>;

/// One registry entry: a language name, the scripts it claims and the
/// segmenter its spans are handed to.
///
/// The name doubles as the branch name in the routing pattern, so it must be a
/// plain identifier. The fallback entry claims no scripts and receives
/// everything the other entries leave over.
#[derive(Clone)]
pub struct LanguageSpec {
    pub(crate) name: Cow<'static, str>,
    pub(crate) scripts: ScriptSet,
    pub(crate) segmenter: Arc<dyn WordSegmenter>,
    pub(crate) fallback: bool,
}

impl LanguageSpec {
    pub fn new<N, I, S>(name: N, scripts: I, segmenter: Arc<dyn WordSegmenter>) -> Self
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            scripts: scripts.into_iter().map(Into::into).collect(),
            segmenter,
            fallback: false,
        }
    }

    /// The catch-all entry for text no other entry claims.
    pub fn fallback<N: Into<Cow<'static, str>>>(name: N, segmenter: Arc<dyn WordSegmenter>) -> Self {
        Self {
            name: name.into(),
            scripts: ScriptSet::new(),
            segmenter,
            fallback: true,
        }
    }

    /// Shorthand for registering a plain function.
    pub fn from_fn<N, I, S>(name: N, scripts: I, segment: SegmentFn) -> Self
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self::new(name, scripts, Arc::new(segment))
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn scripts(&self) -> &[Cow<'static, str>] {
        &self.scripts
    }

    #[inline(always)]
    pub fn segmenter(&self) -> &dyn WordSegmenter {
        self.segmenter.as_ref()
    }

    #[inline(always)]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl fmt::Debug for LanguageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSpec")
            .field("name", &self.name)
            .field("scripts", &self.scripts)
            .field("segmenter", &self.segmenter.name())
            .field("fallback", &self.fallback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::{ChineseUnigram, UnboundWords};

    #[test]
    fn scripts_keep_declaration_order() {
        let spec = LanguageSpec::new(
            JAPANESE,
            ["Han", "Hiragana", "Katakana"],
            Arc::new(ChineseUnigram),
        );
        assert_eq!(spec.scripts(), ["Han", "Hiragana", "Katakana"]);
        assert!(!spec.is_fallback());
    }

    #[test]
    fn fallback_claims_nothing() {
        let spec = LanguageSpec::fallback(DEFAULT, Arc::new(UnboundWords));
        assert!(spec.scripts().is_empty());
        assert!(spec.is_fallback());
        assert_eq!(spec.name(), "Default");
    }

    #[test]
    fn debug_shows_segmenter_name() {
        let spec = LanguageSpec::new(CHINESE, ["Han"], Arc::new(ChineseUnigram));
        assert!(format!("{spec:?}").contains("chinese_unigram"));
    }
}
