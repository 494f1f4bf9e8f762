//! Registry of phonemizers selected by language tag.
//!
//! A TTS pipeline serving several languages registers one phonemizer per
//! language and routes each utterance through [`PhonemizerRegistry::phonemize`].
//! Unlike individual phonemizers, the registry rejects language tags it does
//! not know.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{FonemaConfig, PhonemizerConfig};
use crate::error::{FonemaError, FonemaResult};
use crate::phonemizer::Phonemizer;
use crate::sources::PronunciationSource;
use crate::uk_ua::{UkUaPhonemizer, UK_UA_LANGUAGE, UK_UA_PHONEMIZER_NAME};

/// Names accepted by [`phonemizer_by_name`]
pub const AVAILABLE_PHONEMIZERS: &[&str] = &[UK_UA_PHONEMIZER_NAME];

/// Build a phonemizer from its name
///
/// # Errors
///
/// Returns [`FonemaError::UnknownPhonemizer`] if `name` is not one of
/// [`AVAILABLE_PHONEMIZERS`].
pub fn phonemizer_by_name(
    name: &str,
    source: Arc<dyn PronunciationSource>,
    config: PhonemizerConfig,
) -> FonemaResult<Arc<dyn Phonemizer>> {
    match name {
        UK_UA_PHONEMIZER_NAME => Ok(Arc::new(UkUaPhonemizer::with_config(source, config))),
        _ => Err(FonemaError::unknown_phonemizer(name)),
    }
}

/// Name of the phonemizer used for `language` when none is configured
#[must_use]
pub fn default_phonemizer_for(language: &str) -> Option<&'static str> {
    match language {
        UK_UA_LANGUAGE => Some(UK_UA_PHONEMIZER_NAME),
        _ => None,
    }
}

/// Phonemizers indexed by the language tags they serve
#[derive(Debug, Default, Clone)]
pub struct PhonemizerRegistry {
    phonemizers: HashMap<String, Arc<dyn Phonemizer>>,
}

impl PhonemizerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the phonemizers described by `config`
    #[must_use]
    pub fn from_config(config: &FonemaConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(config.build_phonemizer()));
        registry
    }

    /// Register a phonemizer under every language it supports.
    ///
    /// A language already served by another phonemizer is taken over.
    pub fn register(&mut self, phonemizer: Arc<dyn Phonemizer>) {
        for language in phonemizer.supported_languages().into_keys() {
            if let Some(previous) = self.phonemizers.get(&language) {
                warn!(
                    "Replacing phonemizer '{}' for {} with '{}'",
                    previous.name(),
                    language,
                    phonemizer.name()
                );
            }
            info!("Registered phonemizer '{}' for {}", phonemizer.name(), language);
            self.phonemizers.insert(language, Arc::clone(&phonemizer));
        }
    }

    /// Get the phonemizer serving `language`
    ///
    /// # Errors
    ///
    /// Returns [`FonemaError::UnsupportedLanguage`] if no phonemizer serves it.
    pub fn get(&self, language: &str) -> FonemaResult<&Arc<dyn Phonemizer>> {
        self.phonemizers
            .get(language)
            .ok_or_else(|| FonemaError::unsupported_language(language))
    }

    /// Phonemize `text` with the phonemizer serving `language`
    ///
    /// # Errors
    ///
    /// Returns an error if the language is not registered, or whatever the
    /// selected phonemizer returns.
    pub fn phonemize(&self, text: &str, separator: &str, language: &str) -> FonemaResult<String> {
        let phonemizer = self.get(language)?;
        debug!("Routing {} text to '{}'", language, phonemizer.name());
        phonemizer.phonemize(text, separator, Some(language))
    }

    /// Whether a phonemizer serves `language` and its resource resolves
    #[must_use]
    pub fn is_available(&self, language: &str) -> bool {
        self.phonemizers
            .get(language)
            .is_some_and(|phonemizer| phonemizer.is_available())
    }

    /// Every registered language tag mapped to its human-readable name
    #[must_use]
    pub fn supported_languages(&self) -> BTreeMap<String, String> {
        self.phonemizers
            .iter()
            .filter_map(|(tag, phonemizer)| {
                phonemizer
                    .supported_languages()
                    .remove(tag)
                    .map(|name| (tag.clone(), name))
            })
            .collect()
    }

    /// Registered language tags, sorted
    #[must_use]
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.phonemizers.keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Log every registered phonemizer
    pub fn log_summary(&self) {
        for language in self.languages() {
            if let Some(phonemizer) = self.phonemizers.get(&language) {
                info!("- {}: {} v{}", language, phonemizer.name(), phonemizer.version());
            }
        }
    }
}
