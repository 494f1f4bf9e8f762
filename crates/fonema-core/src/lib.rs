//! # Fonema Core
//!
//! Phonemizer adapters for text-to-speech pipelines.
//!
//! ## Features
//!
//! - A uniform [`Phonemizer`] interface selectable by language tag
//! - Ukrainian phonemizer delegating to a pluggable pronunciation source
//! - espeak-ng and lexicon-file pronunciation sources
//! - Punctuation-preserving phonemization
//! - TOML configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use fonema_core::{Phonemizer, UkUaPhonemizer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let phonemizer = UkUaPhonemizer::default();
//!     if phonemizer.is_available() {
//!         let phonemes = phonemizer.phonemize("Це тестове речення.", "|", None)?;
//!         println!("{phonemes}");
//!     }
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod phonemizer;
pub mod punctuation;
pub mod registry;
pub mod sources;
pub mod uk_ua;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::{BackendConfig, FonemaConfig, PhonemizerConfig};
pub use error::{FonemaError, FonemaResult};
pub use phonemizer::Phonemizer;
pub use punctuation::{Punctuation, PunctuationMark, PunctuationPosition};
pub use registry::{default_phonemizer_for, phonemizer_by_name, PhonemizerRegistry};
pub use sources::{Availability, EspeakSource, FnSource, LexiconSource, PronunciationSource};
pub use uk_ua::{UkUaPhonemizer, UK_UA_LANGUAGE, UK_UA_PHONEMIZER_NAME};

/// Version information for the fonema-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default punctuation set for Ukrainian text
pub const DEFAULT_UK_PUNCTUATIONS: &str = ".,!?;:()[]";

/// Default separator placed between phoneme symbols
pub const DEFAULT_SEPARATOR: &str = "|";
