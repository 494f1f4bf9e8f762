//! Pronunciation sources.
//!
//! A pronunciation source is the external resource a phonemizer delegates to:
//! it turns text into an ordered sequence of phoneme symbols. Sources are
//! injected into phonemizers at construction and resolve their backing
//! resource lazily, so a phonemizer can always be built and only its
//! availability probe or its `phonemize` calls touch the resource.

pub mod espeak;
pub mod function;
pub mod lexicon;

pub use espeak::EspeakSource;
pub use function::FnSource;
pub use lexicon::LexiconSource;

use crate::error::FonemaResult;

/// Outcome of resolving a pronunciation source's backing resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The resource resolved and can be used
    Available,
    /// The resource could not be resolved
    Unavailable {
        /// Why resolution failed
        reason: String,
    },
}

impl Availability {
    /// Create an unavailable status
    #[must_use]
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether the resource resolved
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Trait that every pronunciation resource must implement
pub trait PronunciationSource: Send + Sync + std::fmt::Debug {
    /// Short name of the backing resource, used in logs
    fn backend_name(&self) -> &str;

    /// Resolve the backing resource without failing.
    ///
    /// Only resolution failures are reported here; they never escape as
    /// errors.
    fn probe(&self) -> Availability;

    /// Convert text into an ordered sequence of phoneme symbols
    ///
    /// # Errors
    ///
    /// Returns [`crate::FonemaError::DependencyUnavailable`] if the resource
    /// cannot be resolved, or [`crate::FonemaError::PronunciationFailed`] if it
    /// fails on this input.
    fn pronounce(&self, text: &str) -> FonemaResult<Vec<String>>;
}
