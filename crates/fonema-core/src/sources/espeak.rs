//! espeak-ng pronunciation source.
//!
//! Calls the `espeak-ng` system command to convert text to IPA phonemes.
//! Requires espeak-ng to be installed on the system:
//! - macOS: `brew install espeak-ng`
//! - Linux: `apt-get install espeak-ng`

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::{FonemaError, FonemaResult};

use super::{Availability, PronunciationSource};

/// Executable looked up on `PATH` by default
pub const DEFAULT_ESPEAK_BINARY: &str = "espeak-ng";

/// espeak-ng voice for Ukrainian
pub const DEFAULT_UK_VOICE: &str = "uk";

/// Symbol emitted between words
pub const WORD_BOUNDARY: &str = " ";

const PHONEME_SEPARATOR: char = '_';

/// Pronunciation source backed by the `espeak-ng` executable.
///
/// The executable is resolved once, on the first probe or pronunciation,
/// and the outcome is remembered for the lifetime of the source.
#[derive(Debug)]
pub struct EspeakSource {
    binary: String,
    voice: String,
    resolved: OnceCell<Availability>,
}

impl EspeakSource {
    /// Create a source running `binary` with the given espeak-ng voice
    pub fn new<B: Into<String>, V: Into<String>>(binary: B, voice: V) -> Self {
        Self {
            binary: binary.into(),
            voice: voice.into(),
            resolved: OnceCell::new(),
        }
    }

    /// Create a source using `espeak-ng` from `PATH` with the Ukrainian voice
    #[must_use]
    pub fn ukrainian() -> Self {
        Self::new(DEFAULT_ESPEAK_BINARY, DEFAULT_UK_VOICE)
    }

    /// The espeak-ng voice in use
    #[must_use]
    pub fn voice(&self) -> &str {
        &self.voice
    }

    fn resolve(&self) -> Availability {
        match Command::new(&self.binary).arg("--version").output() {
            Ok(output) if output.status.success() => {
                debug!(
                    "Resolved {}: {}",
                    self.binary,
                    String::from_utf8_lossy(&output.stdout).trim()
                );
                Availability::Available
            }
            Ok(output) => Availability::unavailable(format!(
                "{} --version exited with {}",
                self.binary, output.status
            )),
            Err(e) => Availability::unavailable(format!(
                "Failed to run {}. Is it installed? Error: {}",
                self.binary, e
            )),
        }
    }

    fn run(&self, text: &str) -> FonemaResult<String> {
        let separator = format!("--sep={PHONEME_SEPARATOR}");
        let mut child = Command::new(&self.binary)
            .args(["-q", "--ipa", separator.as_str(), "-v", self.voice.as_str(), "--stdin"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                FonemaError::dependency_unavailable(format!(
                    "Failed to run {}: {}",
                    self.binary, e
                ))
            })?;

        // stdin is fed from its own thread while stdout and stderr are drained,
        // otherwise a child that answers line by line fills the pipes and blocks.
        let stdin = child.stdin.take();
        let (fed, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        let output =
            output.map_err(|e| FonemaError::pronunciation(format!("espeak-ng did not finish: {e}")))?;

        if !output.status.success() {
            return Err(FonemaError::pronunciation(format!(
                "espeak-ng failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        fed.map_err(|_| FonemaError::pronunciation("espeak-ng input writer panicked"))?
            .map_err(|e| FonemaError::pronunciation(format!("Failed to feed espeak-ng: {e}")))?;

        String::from_utf8(output.stdout)
            .map_err(|e| FonemaError::pronunciation(format!("espeak-ng produced invalid UTF-8: {e}")))
    }
}

impl Default for EspeakSource {
    fn default() -> Self {
        Self::ukrainian()
    }
}

impl PronunciationSource for EspeakSource {
    fn backend_name(&self) -> &str {
        "espeak-ng"
    }

    fn probe(&self) -> Availability {
        self.resolved
            .get_or_init(|| {
                let status = self.resolve();
                if let Availability::Unavailable { reason } = &status {
                    warn!("espeak-ng source unavailable: {}", reason);
                }
                status
            })
            .clone()
    }

    fn pronounce(&self, text: &str) -> FonemaResult<Vec<String>> {
        if let Availability::Unavailable { reason } = self.probe() {
            return Err(FonemaError::dependency_unavailable(reason));
        }

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let output = self.run(text)?;
        Ok(parse_phonemes(&output))
    }
}

/// Split espeak-ng `--ipa --sep` output into phoneme symbols, with a single
/// [`WORD_BOUNDARY`] between words.
fn parse_phonemes(output: &str) -> Vec<String> {
    let mut symbols = Vec::new();

    for word in output.split_whitespace() {
        let mut phonemes = word
            .split(PHONEME_SEPARATOR)
            .filter(|p| !p.is_empty())
            .peekable();

        if phonemes.peek().is_none() {
            continue;
        }
        if !symbols.is_empty() {
            symbols.push(WORD_BOUNDARY.to_string());
        }
        symbols.extend(phonemes.map(str::to_string));
    }

    symbols
}
