//! Ukrainian phonemizer.
//!
//! Thin adapter over a [`PronunciationSource`]: the source turns text into
//! phoneme symbols and this phonemizer joins them with the caller's
//! separator. No other transformation is applied.
//!
//! ```rust
//! use fonema_core::{FnSource, Phonemizer, UkUaPhonemizer};
//! use std::sync::Arc;
//!
//! let source = FnSource::new("chars", |text: &str| -> anyhow::Result<Vec<String>> {
//!     Ok(text.chars().map(String::from).collect())
//! });
//! let phonemizer = UkUaPhonemizer::new(Arc::new(source));
//! assert_eq!(phonemizer.phonemize("так", "|", None).unwrap(), "т|а|к");
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::PhonemizerConfig;
use crate::error::FonemaResult;
use crate::phonemizer::Phonemizer;
use crate::punctuation::Punctuation;
use crate::sources::{Availability, EspeakSource, PronunciationSource};

/// Language tag served by [`UkUaPhonemizer`]
pub const UK_UA_LANGUAGE: &str = "uk-UA";

/// Name reported by [`UkUaPhonemizer`]
pub const UK_UA_PHONEMIZER_NAME: &str = "uk_ua_phonemizer";

const UK_UA_PHONEMIZER_VERSION: &str = "0.1.0";

/// Ukrainian phonemizer delegating to a pronunciation source
#[derive(Debug, Clone)]
pub struct UkUaPhonemizer {
    source: Arc<dyn PronunciationSource>,
    config: PhonemizerConfig,
    punctuation: Punctuation,
}

impl UkUaPhonemizer {
    /// Create a phonemizer with default punctuation settings
    #[must_use]
    pub fn new(source: Arc<dyn PronunciationSource>) -> Self {
        Self::with_config(source, PhonemizerConfig::default())
    }

    /// Create a phonemizer with explicit punctuation settings
    #[must_use]
    pub fn with_config(source: Arc<dyn PronunciationSource>, config: PhonemizerConfig) -> Self {
        info!(
            "Creating {} (punctuations: {:?}, keep: {})",
            UK_UA_PHONEMIZER_NAME, config.punctuations, config.keep_punctuation
        );
        let punctuation = Punctuation::new(&config.punctuations);
        Self {
            source,
            config,
            punctuation,
        }
    }

    /// Resolve the pronunciation source and report the outcome
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.source.probe()
    }

    /// Name of the pronunciation source in use
    #[must_use]
    pub fn backend_name(&self) -> &str {
        self.source.backend_name()
    }
}

impl Default for UkUaPhonemizer {
    fn default() -> Self {
        Self::new(Arc::new(EspeakSource::ukrainian()))
    }
}

impl Phonemizer for UkUaPhonemizer {
    fn name(&self) -> &str {
        UK_UA_PHONEMIZER_NAME
    }

    fn supported_languages(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(UK_UA_LANGUAGE.to_string(), "Ukrainian".to_string())])
    }

    fn version(&self) -> &str {
        UK_UA_PHONEMIZER_VERSION
    }

    fn is_available(&self) -> bool {
        self.availability().is_available()
    }

    // The language argument exists for interface uniformity; this
    // phonemizer always treats its input as Ukrainian.
    fn phonemize(&self, text: &str, separator: &str, _language: Option<&str>) -> FonemaResult<String> {
        let symbols = self.source.pronounce(text)?;
        debug!("Phonemized {} chars into {} symbols", text.chars().count(), symbols.len());
        Ok(symbols.join(separator))
    }

    fn language(&self) -> &str {
        UK_UA_LANGUAGE
    }

    fn config(&self) -> &PhonemizerConfig {
        &self.config
    }

    fn punctuation(&self) -> &Punctuation {
        &self.punctuation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{FnSource, LexiconSource};
    use crate::FonemaError;
    use proptest::prelude::*;
    use rstest::rstest;

    fn hello_phonemizer(config: PhonemizerConfig) -> UkUaPhonemizer {
        let source = FnSource::new("fixed", |text: &str| -> anyhow::Result<Vec<String>> {
            Ok(match text {
                "Hello" => vec!["h", "e", "l", "o"].into_iter().map(String::from).collect(),
                _ => Vec::new(),
            })
        });
        UkUaPhonemizer::with_config(Arc::new(source), config)
    }

    fn char_phonemizer() -> UkUaPhonemizer {
        let source = FnSource::new("chars", |text: &str| -> anyhow::Result<Vec<String>> {
            Ok(text.chars().map(String::from).collect())
        });
        UkUaPhonemizer::new(Arc::new(source))
    }

    #[rstest]
    #[case("|", "h|e|l|o")]
    #[case("", "helo")]
    #[case(" ", "h e l o")]
    #[case("--", "h--e--l--o")]
    fn test_phonemize_joins_with_separator(#[case] separator: &str, #[case] expected: &str) {
        let phonemizer = hello_phonemizer(PhonemizerConfig::default());
        assert_eq!(phonemizer.phonemize("Hello", separator, None).unwrap(), expected);
    }

    #[test]
    fn test_phonemize_empty_text() {
        let phonemizer = hello_phonemizer(PhonemizerConfig::default());
        assert_eq!(phonemizer.phonemize("", "|", None).unwrap(), "");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("uk-UA"))]
    #[case(Some("en-US"))]
    fn test_language_argument_is_ignored(#[case] language: Option<&str>) {
        let phonemizer = hello_phonemizer(PhonemizerConfig::default());
        assert_eq!(phonemizer.phonemize("Hello", "|", language).unwrap(), "h|e|l|o");
    }

    #[rstest]
    #[case(PhonemizerConfig::default())]
    #[case(PhonemizerConfig::new("", false))]
    #[case(PhonemizerConfig::new("…«»", true))]
    fn test_constants_ignore_config(#[case] config: PhonemizerConfig) {
        let phonemizer = hello_phonemizer(config);

        assert_eq!(phonemizer.name(), "uk_ua_phonemizer");
        assert_eq!(phonemizer.version(), "0.1.0");
        assert_eq!(phonemizer.language(), "uk-UA");
        assert_eq!(
            phonemizer.supported_languages(),
            BTreeMap::from([("uk-UA".to_string(), "Ukrainian".to_string())])
        );
        assert!(phonemizer.is_supported_language("uk-UA"));
        assert!(!phonemizer.is_supported_language("ru-RU"));
    }

    #[test]
    fn test_default_config() {
        let phonemizer = hello_phonemizer(PhonemizerConfig::default());
        assert_eq!(phonemizer.config().punctuations, ".,!?;:()[]");
        assert!(phonemizer.config().keep_punctuation);
        assert_eq!(phonemizer.punctuation().marks(), ".,!?;:()[]");
    }

    #[test]
    fn test_source_failure_propagates() {
        let source = FnSource::new("broken", |_: &str| -> anyhow::Result<Vec<String>> {
            anyhow::bail!("malformed input")
        });
        let phonemizer = UkUaPhonemizer::new(Arc::new(source));

        let err = phonemizer.phonemize("так", "|", None).unwrap_err();
        assert_eq!(err, FonemaError::pronunciation("malformed input"));
    }

    #[test]
    fn test_unavailable_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = LexiconSource::new(dir.path().join("uk-UA.tsv"));
        let phonemizer = UkUaPhonemizer::new(Arc::new(source));

        assert!(!phonemizer.is_available());
        assert!(matches!(phonemizer.availability(), Availability::Unavailable { .. }));
        assert!(phonemizer.phonemize("так", "|", None).unwrap_err().is_dependency_error());
    }

    #[test]
    fn test_phonemize_with_punctuation_kept() {
        let phonemizer = char_phonemizer();
        let result = phonemizer.phonemize_with_punctuation("так, ні!", "|").unwrap();
        assert_eq!(result, "т|а|к, н|і!");
    }

    #[test]
    fn test_phonemize_with_punctuation_dropped() {
        let source = FnSource::new("chars", |text: &str| -> anyhow::Result<Vec<String>> {
            Ok(text.chars().map(String::from).collect())
        });
        let phonemizer =
            UkUaPhonemizer::with_config(Arc::new(source), PhonemizerConfig::new(".,!?", false));

        let result = phonemizer.phonemize_with_punctuation(" так, ні! ", "|").unwrap();
        assert_eq!(result, "т|а|к| |н|і");
    }

    #[test]
    fn test_phonemize_with_punctuation_only_punctuation() {
        let phonemizer = char_phonemizer();
        assert_eq!(phonemizer.phonemize_with_punctuation("?!", "|").unwrap(), "?!");
        assert_eq!(phonemizer.phonemize_with_punctuation("", "|").unwrap(), "");
    }

    #[rstest]
    #[case("(так", "(т|а|к")]
    #[case("...так", "...т|а|к")]
    #[case("(так) ні", "(т|а|к) н|і")]
    fn test_phonemize_with_punctuation_leading_run(#[case] text: &str, #[case] expected: &str) {
        let phonemizer = char_phonemizer();
        assert_eq!(phonemizer.phonemize_with_punctuation(text, "|").unwrap(), expected);
    }

    proptest! {
        #[test]
        fn prop_phonemize_is_join(text in "\\PC{0,40}", separator in "\\PC{0,3}") {
            let phonemizer = char_phonemizer();
            let expected: Vec<String> = text.chars().map(String::from).collect();
            prop_assert_eq!(
                phonemizer.phonemize(&text, &separator, None).unwrap(),
                expected.join(&separator)
            );
        }
    }
}
