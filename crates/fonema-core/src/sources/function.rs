//! Closure-backed pronunciation source.

use std::fmt;

use crate::error::FonemaResult;

use super::{Availability, PronunciationSource};

/// Pronunciation source wrapping a plain function.
///
/// Useful for plugging an in-process G2P routine into a phonemizer, and for
/// tests that need a stand-in for the real resource. A function source is
/// always available.
pub struct FnSource<F> {
    name: String,
    pronounce: F,
}

impl<F> FnSource<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<String>> + Send + Sync,
{
    /// Wrap `pronounce` under the given backend name
    pub fn new<S: Into<String>>(name: S, pronounce: F) -> Self {
        Self {
            name: name.into(),
            pronounce,
        }
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<F> PronunciationSource for FnSource<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<String>> + Send + Sync,
{
    fn backend_name(&self) -> &str {
        &self.name
    }

    fn probe(&self) -> Availability {
        Availability::Available
    }

    fn pronounce(&self, text: &str) -> FonemaResult<Vec<String>> {
        Ok((self.pronounce)(text)?)
    }
}
