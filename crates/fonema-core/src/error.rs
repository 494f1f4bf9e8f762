//! Error types for Fonema phonemizers.

/// Result type alias for Fonema operations
pub type FonemaResult<T> = Result<T, FonemaError>;

/// Main error type for phonemizer operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FonemaError {
    /// The external pronunciation resource could not be located
    #[error("Pronunciation resource unavailable: {message}")]
    DependencyUnavailable {
        /// Error message describing what could not be resolved
        message: String,
    },

    /// The pronunciation resource is present but failed on the given input
    #[error("Pronunciation failed: {message}")]
    PronunciationFailed {
        /// Error message describing the failure
        message: String,
    },

    /// No phonemizer serves the requested language tag
    #[error("Language '{language}' is not supported")]
    UnsupportedLanguage {
        /// The language tag that was requested
        language: String,
    },

    /// No phonemizer is known under the requested name
    #[error("Phonemizer '{name}' not found")]
    UnknownPhonemizer {
        /// The phonemizer name that was requested
        name: String,
    },

    /// Invalid input error
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing the invalid input
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Error message describing the configuration issue
        message: String,
    },

    /// File I/O error
    #[error("File I/O error: {message}")]
    FileError {
        /// Error message describing the file operation failure
        message: String,
    },
}

impl FonemaError {
    /// Create a new dependency-unavailable error
    #[must_use]
    pub fn dependency_unavailable<S: Into<String>>(message: S) -> Self {
        Self::DependencyUnavailable {
            message: message.into(),
        }
    }

    /// Create a new pronunciation failure
    #[must_use]
    pub fn pronunciation<S: Into<String>>(message: S) -> Self {
        Self::PronunciationFailed {
            message: message.into(),
        }
    }

    /// Create a new unsupported language error
    #[must_use]
    pub fn unsupported_language<S: Into<String>>(language: S) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    /// Create a new unknown phonemizer error
    #[must_use]
    pub fn unknown_phonemizer<S: Into<String>>(name: S) -> Self {
        Self::UnknownPhonemizer { name: name.into() }
    }

    /// Create a new invalid input error
    #[must_use]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create a new file error
    #[must_use]
    pub fn file<S: Into<String>>(message: S) -> Self {
        Self::FileError {
            message: message.into(),
        }
    }

    /// Check if this error means the pronunciation resource is missing
    #[must_use]
    pub const fn is_dependency_error(&self) -> bool {
        matches!(self, Self::DependencyUnavailable { .. })
    }

    /// Check if this error is due to invalid user input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::UnsupportedLanguage { .. }
                | Self::UnknownPhonemizer { .. }
                | Self::ConfigurationError { .. }
        )
    }

    /// Get the error category for logging
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::DependencyUnavailable { .. } => "dependency",
            Self::PronunciationFailed { .. } => "pronunciation",
            Self::UnsupportedLanguage { .. } => "language",
            Self::UnknownPhonemizer { .. } => "phonemizer",
            Self::InvalidInput { .. } => "input",
            Self::ConfigurationError { .. } => "configuration",
            Self::FileError { .. } => "file",
        }
    }
}

impl From<std::io::Error> for FonemaError {
    fn from(err: std::io::Error) -> Self {
        Self::file(err.to_string())
    }
}

impl From<serde_json::Error> for FonemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::configuration(format!("JSON parsing error: {err}"))
    }
}

impl From<toml::de::Error> for FonemaError {
    fn from(err: toml::de::Error) -> Self {
        Self::configuration(format!("TOML parsing error: {err}"))
    }
}

impl From<anyhow::Error> for FonemaError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<Self>() {
            Ok(err) => err,
            Err(err) => Self::pronunciation(format!("{err:#}")),
        }
    }
}
