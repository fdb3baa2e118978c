// src/pattern.rs
//! Composite routing pattern.
//!
//! One regex, one named alternative per registry entry:
//!
//! ```text
//! (?P<SignWriting>[\p{scx=SignWriting}]+)
//! |(?P<Chinese>[\p{scx=Han}]+)
//! |(?P<Japanese>[\p{scx=Han}\p{scx=Hiragana}\p{scx=Katakana}]+)
//! |(?P<Thai>[\p{scx=Thai}]+)
//! |(?P<Default>[^\p{scx=Han}\p{scx=Hiragana}\p{scx=Katakana}\p{scx=SignWriting}\p{scx=Thai}]+)
//! ```
//!
//! `regex` alternation is leftmost-first, so when two entries claim a script
//! the one registered earlier always wins that script's runs; the later entry
//! still wins runs that start with a character only it claims. Every code
//! point is either in some claimed script or in the Default complement, so a
//! match always starts exactly where the previous one ended.
//!
//! The Default branch works on code points; [`CompositePattern::default_end`]
//! widens it to the end of a grapheme cluster when a claimed combining mark
//! hangs off Default text (`a` + U+3099), so clusters are never split at the
//! end of a Default span.

use regex::{CaptureLocations, Regex};
use unicode_segmentation::GraphemeCursor;

use crate::{
    lang::LanguageSpec,
    unicode::{excluded_scripts_class, script_set_class, script_union},
};

/// Compiled router. Immutable once built.
#[derive(Debug)]
pub struct CompositePattern {
    regex: Regex,
    /// Anchored run of Default characters, used to continue a Default span
    /// after an absorbed grapheme extension.
    default_run: Regex,
    /// Capture group index → branch name (index 0 is the whole match).
    branch_names: Vec<Option<Box<str>>>,
}

/// Pattern source for a registry snapshot.
///
/// Non-fallback entries in registry order, then the synthesized Default branch
/// named after the fallback entry.
pub fn routing_pattern_source(languages: &[LanguageSpec], default_name: &str) -> String {
    let mut branches: Vec<String> = languages
        .iter()
        .filter(|l| !l.is_fallback())
        .map(|l| format!("(?P<{}>{}+)", l.name(), script_set_class(l.scripts())))
        .collect();

    let claimed = claimed_scripts(languages);
    branches.push(format!(
        "(?P<{default_name}>{}+)",
        excluded_scripts_class(&claimed)
    ));
    branches.join("|")
}

fn claimed_scripts(languages: &[LanguageSpec]) -> Vec<&str> {
    script_union(
        languages
            .iter()
            .flat_map(|l| l.scripts().iter().map(|s| s.as_ref())),
    )
}

impl CompositePattern {
    pub fn compile(languages: &[LanguageSpec], default_name: &str) -> Result<Self, regex::Error> {
        let source = routing_pattern_source(languages, default_name);
        let default_class = excluded_scripts_class(&claimed_scripts(languages));
        Self::from_source(&source, &default_class)
    }

    /// Compile a routing pattern from its source and the single-character
    /// class of its Default branch.
    pub(crate) fn from_source(source: &str, default_class: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(source)?;
        let default_run = Regex::new(&format!("^{default_class}+"))?;
        let branch_names = regex
            .capture_names()
            .map(|n| n.map(Box::from))
            .collect();

        tracing::debug!(
            branches = regex.captures_len() - 1,
            pattern_len = source.len(),
            "compiled routing pattern"
        );
        Ok(Self {
            regex,
            default_run,
            branch_names,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    #[inline]
    pub(crate) fn capture_locations(&self) -> CaptureLocations {
        self.regex.capture_locations()
    }

    /// Match the branch starting at `start`.
    ///
    /// Returns the end of the match and the name of the branch that matched.
    /// `None` means the pattern did not match at `start`, or no named group
    /// took part in the match – both are defects in the compiled pattern.
    pub(crate) fn match_at<'p>(
        &'p self,
        locs: &mut CaptureLocations,
        text: &str,
        start: usize,
    ) -> Option<(usize, Option<&'p str>)> {
        let m = self.regex.captures_read_at(locs, text, start)?;
        if m.start() != start {
            return None;
        }
        let name = (1..locs.len())
            .find(|&i| locs.get(i).is_some())
            .and_then(|i| self.branch_names.get(i))
            .and_then(|n| n.as_deref());
        Some((m.end(), name))
    }

    /// Extend a Default match `[start, end)` so it does not stop inside a
    /// grapheme cluster.
    ///
    /// Clusters are measured from `start`, the same way a fresh match would
    /// see them.
    pub(crate) fn default_end(&self, text: &str, start: usize, end: usize) -> usize {
        let chunk = &text[start..];
        let mut rel = end - start;
        while rel < chunk.len() {
            let mut cursor = GraphemeCursor::new(rel, chunk.len(), true);
            if cursor.is_boundary(chunk, 0).unwrap_or(true) {
                break;
            }
            let next = match cursor.next_boundary(chunk, 0) {
                Ok(Some(n)) => n,
                _ => chunk.len(),
            };
            rel = next
                + self
                    .default_run
                    .find(&chunk[next..])
                    .map_or(0, |m| m.end());
        }
        start + rel
    }
}
