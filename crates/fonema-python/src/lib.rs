//! Python bindings for Fonema phonemizers
//!
//! Exposes the Ukrainian phonemizer to Python TTS pipelines with the method
//! set their phonemizer registries expect: `name()`, `supported_languages()`,
//! `version()`, `is_available()` and `phonemize(text, separator, language)`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;

use fonema_core::{
    EspeakSource, FonemaConfig, FonemaError, LexiconSource, Phonemizer, PhonemizerConfig,
    PronunciationSource, UkUaPhonemizer, DEFAULT_UK_PUNCTUATIONS, UK_UA_LANGUAGE,
    UK_UA_PHONEMIZER_NAME,
};

create_exception!(fonema, FonemaException, PyException);
create_exception!(fonema, DependencyUnavailableError, FonemaException);

fn to_py_err(err: FonemaError) -> PyErr {
    if err.is_dependency_error() {
        DependencyUnavailableError::new_err(err.to_string())
    } else {
        FonemaException::new_err(err.to_string())
    }
}

/// Ukrainian phonemizer backed by espeak-ng or a lexicon file
#[pyclass(name = "UK_UA_Phonemizer", module = "fonema", frozen)]
pub struct PyUkUaPhonemizer {
    inner: UkUaPhonemizer,
}

#[pymethods]
impl PyUkUaPhonemizer {
    #[new]
    #[pyo3(
        signature = (punctuations = DEFAULT_UK_PUNCTUATIONS.to_string(), keep_puncs = true, lexicon = None),
        text_signature = "(punctuations=\".,!?;:()[]\", keep_puncs=True, lexicon=None)"
    )]
    fn new(punctuations: String, keep_puncs: bool, lexicon: Option<PathBuf>) -> Self {
        let config = PhonemizerConfig::new(punctuations, keep_puncs);
        let source: Arc<dyn PronunciationSource> = match lexicon {
            Some(path) => Arc::new(LexiconSource::new(path)),
            None => Arc::new(EspeakSource::ukrainian()),
        };
        Self {
            inner: UkUaPhonemizer::with_config(source, config),
        }
    }

    /// Build a phonemizer from a Fonema TOML configuration file
    #[staticmethod]
    fn from_config(path: PathBuf) -> PyResult<Self> {
        let config = FonemaConfig::from_file(path).map_err(to_py_err)?;
        Ok(Self {
            inner: config.build_phonemizer(),
        })
    }

    #[classattr]
    fn language() -> &'static str {
        UK_UA_LANGUAGE
    }

    #[staticmethod]
    fn name() -> &'static str {
        UK_UA_PHONEMIZER_NAME
    }

    fn supported_languages(&self) -> BTreeMap<String, String> {
        self.inner.supported_languages()
    }

    fn version(&self) -> &str {
        self.inner.version()
    }

    fn is_available(&self, py: Python<'_>) -> bool {
        py.allow_threads(|| self.inner.is_available())
    }

    #[getter]
    fn punctuations(&self) -> &str {
        &self.inner.config().punctuations
    }

    #[getter]
    fn keep_puncs(&self) -> bool {
        self.inner.config().keep_punctuation
    }

    #[pyo3(signature = (text, separator = fonema_core::DEFAULT_SEPARATOR.to_string(), language = None))]
    fn phonemize(
        &self,
        py: Python<'_>,
        text: String,
        separator: String,
        language: Option<String>,
    ) -> PyResult<String> {
        py.allow_threads(|| self.inner.phonemize(&text, &separator, language.as_deref()))
            .map_err(to_py_err)
    }

    #[pyo3(signature = (text, separator = fonema_core::DEFAULT_SEPARATOR.to_string()))]
    fn phonemize_with_punctuation(
        &self,
        py: Python<'_>,
        text: String,
        separator: String,
    ) -> PyResult<String> {
        py.allow_threads(|| self.inner.phonemize_with_punctuation(&text, &separator))
            .map_err(to_py_err)
    }

    fn print_logs(&self) {
        self.inner.log_summary();
    }

    fn __repr__(&self) -> String {
        format!(
            "UK_UA_Phonemizer(backend={:?}, punctuations={:?}, keep_puncs={})",
            self.inner.backend_name(),
            self.inner.config().punctuations,
            self.inner.config().keep_punctuation
        )
    }
}

/// Python module for Fonema phonemizers
#[pymodule]
fn fonema(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyUkUaPhonemizer>()?;
    m.add("FonemaException", py.get_type::<FonemaException>())?;
    m.add(
        "DependencyUnavailableError",
        py.get_type::<DependencyUnavailableError>(),
    )?;

    m.add("VERSION", fonema_core::VERSION)?;
    m.add("DEFAULT_SEPARATOR", fonema_core::DEFAULT_SEPARATOR)?;

    tracing::debug!("fonema Python module initialized");
    Ok(())
}
