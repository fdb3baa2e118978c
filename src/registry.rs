//! Language registry – the ordered table the router is compiled from.
//!
//! Order is precedence: when two entries claim the same script, the one
//! registered first wins that script's runs. Put logographic languages before
//! syllabary languages that also claim the logographs (Chinese before
//! Japanese), and script-exclusive languages before the catch-all.
//!
//! A [`Registry`] is validated once in [`RegistryBuilder::build`] and is
//! immutable afterwards. Its routing pattern is compiled on the first
//! segmentation request and cached for the registry's lifetime.

pub mod preset;

use std::{
    borrow::Cow,
    collections::HashSet,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

use regex::Regex;
use thiserror::Error;

use crate::{
    lang::{DEFAULT, LanguageSpec},
    pattern::CompositePattern,
    segmenter::{SegmentError, UnboundWords, WordSegmenter},
    unicode::{is_valid_script_ident, scx_atom},
};

/// Configuration errors. All are raised by [`RegistryBuilder::build`], before
/// anything is compiled.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("language name `{0}` is not an identifier ([A-Za-z_][A-Za-z0-9_]*)")]
    InvalidName(String),

    #[error("language `{0}` is registered more than once")]
    DuplicateName(String),

    #[error("language `{0}` claims no scripts; only the fallback may do that")]
    EmptyScripts(String),

    #[error("more than one fallback language: `{0}` and `{1}`")]
    MultipleFallbacks(String, String),

    #[error("language `{language}` claims malformed script identifier `{script}`")]
    InvalidScript { language: String, script: String },

    #[error("language `{language}` claims unknown script `{script}`: {source}")]
    UnknownScript {
        language: String,
        script: String,
        #[source]
        source: regex::Error,
    },
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Validated, ordered set of languages plus the lazily compiled router.
#[derive(Debug)]
pub struct Registry {
    languages: Vec<LanguageSpec>,
    fallback: usize,
    pattern: OnceLock<Result<CompositePattern, regex::Error>>,
    compilations: AtomicUsize,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide registry: whatever [`Registry::install_global`] installed,
    /// or [`preset::standard`] on first use.
    pub fn global() -> &'static Registry {
        current(&GLOBAL)
    }

    /// Install the process-wide registry. Fails, handing the registry back,
    /// once a global registry exists (installed or already used).
    pub fn install_global(registry: Registry) -> Result<(), Registry> {
        install(&GLOBAL, registry)
    }

    #[inline]
    pub fn languages(&self) -> &[LanguageSpec] {
        &self.languages
    }

    #[inline]
    pub fn fallback(&self) -> &LanguageSpec {
        &self.languages[self.fallback]
    }

    pub fn get(&self, name: &str) -> Option<&LanguageSpec> {
        self.languages.iter().find(|l| l.name() == name)
    }

    /// The routing pattern, compiled on first call.
    ///
    /// Concurrent first calls block on one compilation; only a fully built
    /// pattern is ever observed.
    pub fn pattern(&self) -> Result<&CompositePattern, SegmentError> {
        self.pattern
            .get_or_init(|| {
                self.compilations.fetch_add(1, Ordering::Relaxed);
                CompositePattern::compile(&self.languages, self.fallback().name())
            })
            .as_ref()
            .map_err(|e| SegmentError::Pattern(e.clone()))
    }

    /// How many times the routing pattern has been compiled (0 or 1).
    #[inline]
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }
}

fn current(slot: &OnceLock<Registry>) -> &Registry {
    slot.get_or_init(preset::standard)
}

fn install(slot: &OnceLock<Registry>, registry: Registry) -> Result<(), Registry> {
    tracing::debug!(languages = registry.languages.len(), "installing process-wide registry");
    slot.set(registry)
}

#[derive(Default)]
pub struct RegistryBuilder {
    languages: Vec<LanguageSpec>,
}

impl RegistryBuilder {
    /// Append a language. Registration order is precedence order.
    pub fn language(mut self, spec: LanguageSpec) -> Self {
        self.languages.push(spec);
        self
    }

    pub fn add_language<N, I, S>(self, name: N, scripts: I, segmenter: Arc<dyn WordSegmenter>) -> Self
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.language(LanguageSpec::new(name, scripts, segmenter))
    }

    /// Set the catch-all entry. Without one, [`UnboundWords`] is used under
    /// the name `Default`.
    pub fn fallback<N: Into<Cow<'static, str>>>(self, name: N, segmenter: Arc<dyn WordSegmenter>) -> Self {
        self.language(LanguageSpec::fallback(name, segmenter))
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut languages = self.languages;
        let mut seen = HashSet::new();
        let mut fallback: Option<usize> = None;

        for (idx, lang) in languages.iter().enumerate() {
            let name = lang.name();
            if !is_identifier(name) {
                return Err(RegistryError::InvalidName(name.to_owned()));
            }
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateName(name.to_owned()));
            }
            if lang.is_fallback() {
                if let Some(first) = fallback {
                    return Err(RegistryError::MultipleFallbacks(
                        languages[first].name().to_owned(),
                        name.to_owned(),
                    ));
                }
                fallback = Some(idx);
                continue;
            }
            if lang.scripts().is_empty() {
                return Err(RegistryError::EmptyScripts(name.to_owned()));
            }
            for script in lang.scripts() {
                validate_script(name, script)?;
            }
        }

        let fallback = match fallback {
            Some(idx) => idx,
            None => {
                if seen.contains(DEFAULT) {
                    return Err(RegistryError::DuplicateName(DEFAULT.to_owned()));
                }
                languages.push(LanguageSpec::fallback(DEFAULT, Arc::new(UnboundWords)));
                languages.len() - 1
            }
        };

        tracing::debug!(
            languages = ?languages.iter().map(LanguageSpec::name).collect::<Vec<_>>(),
            fallback = languages[fallback].name(),
            "built language registry"
        );
        Ok(Registry {
            languages,
            fallback,
            pattern: OnceLock::new(),
            compilations: AtomicUsize::new(0),
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic() || b == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn validate_script(language: &str, script: &str) -> Result<(), RegistryError> {
    if !is_valid_script_ident(script) {
        return Err(RegistryError::InvalidScript {
            language: language.to_owned(),
            script: script.to_owned(),
        });
    }
    Regex::new(&scx_atom(script))
        .map(drop)
        .map_err(|source| RegistryError::UnknownScript {
            language: language.to_owned(),
            script: script.to_owned(),
            source,
        })
}
