//! Phonemizer configuration.
//!
//! Configuration is plain serde data so it can live in the pipeline's TOML
//! file:
//!
//! ```toml
//! [phonemizer]
//! punctuations = ".,!?;:()[]"
//! keep_punctuation = true
//!
//! [backend]
//! kind = "lexicon"
//! path = "/opt/tts/uk-UA.tsv"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::FonemaResult;
use crate::sources::espeak::{DEFAULT_ESPEAK_BINARY, DEFAULT_UK_VOICE};
use crate::sources::{EspeakSource, LexiconSource, PronunciationSource};
use crate::uk_ua::UkUaPhonemizer;
use crate::DEFAULT_UK_PUNCTUATIONS;

/// Punctuation handling shared by every phonemizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonemizerConfig {
    /// Characters treated as punctuation
    pub punctuations: String,
    /// Whether punctuation survives as standalone tokens in the output
    pub keep_punctuation: bool,
}

impl Default for PhonemizerConfig {
    fn default() -> Self {
        Self {
            punctuations: DEFAULT_UK_PUNCTUATIONS.to_string(),
            keep_punctuation: true,
        }
    }
}

impl PhonemizerConfig {
    /// Create a configuration with explicit punctuation settings
    pub fn new<S: Into<String>>(punctuations: S, keep_punctuation: bool) -> Self {
        Self {
            punctuations: punctuations.into(),
            keep_punctuation,
        }
    }
}

/// Which pronunciation resource backs the phonemizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// The espeak-ng executable
    Espeak {
        /// Executable name or path
        #[serde(default = "default_espeak_binary")]
        binary: String,
        /// espeak-ng voice
        #[serde(default = "default_espeak_voice")]
        voice: String,
    },
    /// A lexicon file; searched in the standard locations when unset
    Lexicon {
        /// Path to the lexicon file
        #[serde(default)]
        path: Option<PathBuf>,
    },
}

fn default_espeak_binary() -> String {
    DEFAULT_ESPEAK_BINARY.to_string()
}

fn default_espeak_voice() -> String {
    DEFAULT_UK_VOICE.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::Espeak {
            binary: default_espeak_binary(),
            voice: default_espeak_voice(),
        }
    }
}

impl BackendConfig {
    /// Build the pronunciation source this configuration describes.
    ///
    /// No resource is touched here; sources resolve lazily.
    #[must_use]
    pub fn build_source(&self) -> Arc<dyn PronunciationSource> {
        match self {
            Self::Espeak { binary, voice } => Arc::new(EspeakSource::new(binary.clone(), voice.clone())),
            Self::Lexicon { path: Some(path) } => Arc::new(LexiconSource::new(path.clone())),
            Self::Lexicon { path: None } => Arc::new(LexiconSource::from_default_location()),
        }
    }
}

/// Top-level Fonema configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FonemaConfig {
    /// Punctuation handling
    pub phonemizer: PhonemizerConfig,
    /// Pronunciation resource
    pub backend: BackendConfig,
}

impl FonemaConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is not valid TOML or does
    /// not match the expected layout.
    pub fn from_toml_str(content: &str) -> FonemaResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FonemaResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded phonemizer configuration from {}", path.display());
        Ok(config)
    }

    /// Assemble the Ukrainian phonemizer described by this configuration
    #[must_use]
    pub fn build_phonemizer(&self) -> UkUaPhonemizer {
        UkUaPhonemizer::with_config(self.backend.build_source(), self.phonemizer.clone())
    }
}
