//! Lexicon-file pronunciation source.
//!
//! Reads pronunciations from a word list shipped alongside the pipeline.
//! Two formats are understood:
//!
//! - TSV (any extension other than `.json`): one `word<TAB>ph1 ph2 ...` entry
//!   per line, blank lines and `#` comments ignored.
//! - JSON: an object mapping each word to a space-separated phoneme string.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

use crate::error::{FonemaError, FonemaResult};

use super::espeak::WORD_BOUNDARY;
use super::{Availability, PronunciationSource};

/// Environment variable overriding the lexicon location
pub const LEXICON_ENV_VAR: &str = "FONEMA_UK_LEXICON";

/// File name searched for in the standard data directories
pub const DEFAULT_LEXICON_FILE: &str = "uk-UA.tsv";

/// Characters joining two halves of one word, e.g. `п'ять`, `будь-який`
const WORD_JOINERS: [char; 4] = ['\'', '’', 'ʼ', '-'];

type Lexicon = HashMap<String, Vec<String>>;

/// Pronunciation source backed by a lexicon file.
///
/// The file is located and parsed on first use. A failed load is not
/// remembered, so a lexicon installed later is picked up by the next call.
#[derive(Debug)]
pub struct LexiconSource {
    path: Option<PathBuf>,
    entries: OnceCell<Lexicon>,
}

impl LexiconSource {
    /// Create a source reading the lexicon at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
            entries: OnceCell::new(),
        }
    }

    /// Create a source that searches the standard locations on first use
    #[must_use]
    pub fn from_default_location() -> Self {
        Self {
            path: None,
            entries: OnceCell::new(),
        }
    }

    /// Create a source from in-memory entries of word and phoneme symbols
    pub fn from_entries<I, W, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<P>)>,
        W: AsRef<str>,
        P: Into<String>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, phonemes)| {
                (
                    normalize_word(word.as_ref()),
                    phonemes.into_iter().map(Into::into).collect(),
                )
            })
            .collect();

        Self {
            path: None,
            entries: OnceCell::with_value(lexicon),
        }
    }

    /// Candidate lexicon paths, most specific first
    #[must_use]
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(custom) = std::env::var(LEXICON_ENV_VAR) {
            candidates.push(PathBuf::from(custom));
        }

        if let Some(proj_dirs) = ProjectDirs::from("ai", "Fonema", "fonema") {
            candidates.push(proj_dirs.data_dir().join("lexicons").join(DEFAULT_LEXICON_FILE));
        }

        candidates.push(PathBuf::from("/usr/share/fonema").join(DEFAULT_LEXICON_FILE));

        candidates
    }

    fn locate(&self) -> FonemaResult<PathBuf> {
        if let Some(path) = &self.path {
            if path.is_file() {
                return Ok(path.clone());
            }
            return Err(FonemaError::dependency_unavailable(format!(
                "Lexicon not found at {}",
                path.display()
            )));
        }

        let candidates = Self::candidate_paths();
        candidates
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .ok_or_else(|| {
                let searched: Vec<String> =
                    candidates.iter().map(|p| p.display().to_string()).collect();
                FonemaError::dependency_unavailable(format!(
                    "Ukrainian lexicon not found. Set {} or install {} (searched: {})",
                    LEXICON_ENV_VAR,
                    DEFAULT_LEXICON_FILE,
                    searched.join(", ")
                ))
            })
    }

    fn entries(&self) -> FonemaResult<&Lexicon> {
        self.entries.get_or_try_init(|| {
            let path = self.locate()?;
            let lexicon = load_lexicon(&path)?;
            info!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
            Ok(lexicon)
        })
    }
}

impl PronunciationSource for LexiconSource {
    fn backend_name(&self) -> &str {
        "lexicon"
    }

    fn probe(&self) -> Availability {
        match self.entries() {
            Ok(_) => Availability::Available,
            Err(e) => {
                debug!("Lexicon source unavailable: {}", e);
                Availability::unavailable(e.to_string())
            }
        }
    }

    fn pronounce(&self, text: &str) -> FonemaResult<Vec<String>> {
        let lexicon = self.entries()?;
        let text: String = text.trim().nfc().collect();
        let mut symbols = Vec::new();

        for token in tokenize(&text) {
            match token {
                Token::Word(word) => {
                    let phonemes = lexicon.get(&normalize_word(word)).ok_or_else(|| {
                        FonemaError::pronunciation(format!("No pronunciation for '{word}'"))
                    })?;
                    symbols.extend(phonemes.iter().cloned());
                }
                Token::Space => symbols.push(WORD_BOUNDARY.to_string()),
                Token::Other(c) => symbols.push(c.to_string()),
            }
        }

        debug!("Lexicon produced {} symbols", symbols.len());
        Ok(symbols)
    }
}

fn load_lexicon(path: &Path) -> FonemaResult<Lexicon> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| FonemaError::file(format!("Failed to read lexicon {}: {}", path.display(), e)))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&content)
    } else {
        parse_tsv(&content)
    }
}

fn parse_tsv(content: &str) -> FonemaResult<Lexicon> {
    let mut lexicon = HashMap::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let (word, pronunciation) = line.split_once('\t').ok_or_else(|| {
            FonemaError::configuration(format!(
                "Lexicon line {}: expected 'word<TAB>phonemes'",
                idx + 1
            ))
        })?;
        insert_entry(&mut lexicon, word, pronunciation)
            .map_err(|e| FonemaError::configuration(format!("Lexicon line {}: {}", idx + 1, e)))?;
    }

    Ok(lexicon)
}

fn parse_json(content: &str) -> FonemaResult<Lexicon> {
    let raw: HashMap<String, String> = serde_json::from_str(content)?;
    let mut lexicon = HashMap::with_capacity(raw.len());
    for (word, pronunciation) in &raw {
        insert_entry(&mut lexicon, word, pronunciation)
            .map_err(|e| FonemaError::configuration(format!("Lexicon entry '{word}': {e}")))?;
    }
    Ok(lexicon)
}

fn insert_entry(lexicon: &mut Lexicon, word: &str, pronunciation: &str) -> Result<(), &'static str> {
    let word = word.trim();
    if word.is_empty() {
        return Err("empty word");
    }
    let phonemes: Vec<String> = pronunciation.split_whitespace().map(str::to_string).collect();
    if phonemes.is_empty() {
        return Err("empty pronunciation");
    }
    lexicon.insert(normalize_word(word), phonemes);
    Ok(())
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase().nfc().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Space,
    Other(char),
}

/// Split text into words, whitespace runs and stray characters
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
            tokens.push(Token::Space);
        } else if c.is_alphabetic() {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                let after = idx + next.len_utf8();
                let joins = WORD_JOINERS.contains(&next)
                    && text[after..].chars().next().is_some_and(char::is_alphabetic);
                if !(next.is_alphabetic() || joins) {
                    break;
                }
                end = after;
                chars.next();
            }
            tokens.push(Token::Word(&text[start..end]));
        } else {
            tokens.push(Token::Other(c));
        }
    }

    tokens
}
