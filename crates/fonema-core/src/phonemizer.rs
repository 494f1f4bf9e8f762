//! The phonemizer interface.
//!
//! Every language-specific phonemizer implements [`Phonemizer`] so a TTS
//! pipeline can hold them interchangeably and pick one by language tag
//! (see [`crate::PhonemizerRegistry`]).

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::PhonemizerConfig;
use crate::error::FonemaResult;
use crate::punctuation::Punctuation;

/// Trait that all phonemizers must implement
pub trait Phonemizer: Send + Sync + std::fmt::Debug {
    /// Fixed identifier of this phonemizer variant
    fn name(&self) -> &str;

    /// Language tags served by this phonemizer, mapped to their
    /// human-readable names
    fn supported_languages(&self) -> BTreeMap<String, String>;

    /// Version of this phonemizer
    fn version(&self) -> &str;

    /// Whether the pronunciation resource can be resolved.
    ///
    /// Never fails: resolution problems are reported as `false`.
    fn is_available(&self) -> bool;

    /// Convert `text` to a phoneme string with symbols joined by `separator`
    ///
    /// # Arguments
    ///
    /// * `text` - Raw text to convert
    /// * `separator` - Delimiter placed between phoneme symbols
    /// * `language` - Requested language tag; single-language phonemizers may
    ///   ignore it
    ///
    /// # Errors
    ///
    /// Returns an error if the pronunciation resource is unavailable or
    /// fails on this input.
    fn phonemize(&self, text: &str, separator: &str, language: Option<&str>) -> FonemaResult<String>;

    /// The language tag this instance serves
    fn language(&self) -> &str;

    /// Punctuation settings this phonemizer was built with
    fn config(&self) -> &PhonemizerConfig;

    /// Compiled punctuation matcher for [`Phonemizer::config`]
    fn punctuation(&self) -> &Punctuation;

    /// Whether `language` is one of [`Phonemizer::supported_languages`]
    fn is_supported_language(&self, language: &str) -> bool {
        self.supported_languages().contains_key(language)
    }

    /// Phonemize with punctuation handled around the backend.
    ///
    /// With `keep_punctuation`, the text is cut at punctuation runs, each
    /// segment is phonemized on its own and the runs are put back verbatim.
    /// Without it, punctuation runs collapse to a single space before the
    /// whole text is phonemized.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Phonemizer::phonemize`].
    fn phonemize_with_punctuation(&self, text: &str, separator: &str) -> FonemaResult<String> {
        let text = text.trim();

        if !self.config().keep_punctuation {
            let stripped = self.punctuation().strip(text);
            return self.phonemize(&stripped, separator, None);
        }

        let (segments, marks) = self.punctuation().strip_to_restore(text);
        debug!(
            "Phonemizing {} segments around {} punctuation runs",
            segments.len(),
            marks.len()
        );

        let phonemized = segments
            .iter()
            .map(|segment| self.phonemize(segment, separator, None))
            .collect::<FonemaResult<Vec<_>>>()?;

        Ok(Punctuation::restore(phonemized, &marks).concat())
    }

    /// Log the language and backend of this phonemizer
    fn log_summary(&self) {
        info!("- Phoneme language: {}", self.language());
        info!("- Phoneme backend: {}", self.name());
    }
}
