//! Punctuation handling shared by phonemizers.
//!
//! Phonemizer backends generally cannot pronounce punctuation, so text is cut
//! at punctuation runs before phonemization and the runs are glued back
//! afterwards. A run is one or more punctuation characters together with the
//! whitespace around them, so `"Привіт, світе!"` yields the segments
//! `["Привіт", "світе"]` and the marks `[", " (middle), "!" (end)]`.

use std::collections::VecDeque;

use regex::Regex;
use tracing::warn;

/// Where a punctuation run sits relative to the text it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationPosition {
    /// The run opens the text
    Begin,
    /// The run closes the text
    End,
    /// The run sits between two segments
    Middle,
    /// The run is the whole text
    Alone,
}

/// A punctuation run removed from a text, with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationMark {
    /// The exact run, including surrounding whitespace
    pub mark: String,
    /// Position of the run in the original text
    pub position: PunctuationPosition,
}

impl PunctuationMark {
    fn new(mark: &str, position: PunctuationPosition) -> Self {
        Self {
            mark: mark.to_string(),
            position,
        }
    }
}

/// Splits text at punctuation runs and restores them afterwards
#[derive(Debug, Clone)]
pub struct Punctuation {
    marks: String,
    pattern: Option<Regex>,
}

impl Punctuation {
    /// Build from a set of punctuation characters. Duplicates are dropped,
    /// keeping first-seen order. An empty set matches nothing.
    #[must_use]
    pub fn new(marks: &str) -> Self {
        let mut unique = String::with_capacity(marks.len());
        for c in marks.chars() {
            if !unique.contains(c) {
                unique.push(c);
            }
        }

        let pattern = if unique.is_empty() {
            None
        } else {
            let escaped = regex::escape(&unique);
            Regex::new(&format!(r"(\s*[{escaped}]+\s*)+"))
                .map_err(|e| warn!("Ignoring punctuation set {:?}: {}", unique, e))
                .ok()
        };

        Self {
            marks: unique,
            pattern,
        }
    }

    /// The de-duplicated punctuation characters
    #[must_use]
    pub fn marks(&self) -> &str {
        &self.marks
    }

    /// Replace every punctuation run with a single space and trim the result
    #[must_use]
    pub fn strip(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, " ").trim().to_string(),
            None => text.trim().to_string(),
        }
    }

    /// Cut `text` into the segments between punctuation runs, remembering
    /// each run and where it was so [`Punctuation::restore`] can put it back.
    #[must_use]
    pub fn strip_to_restore(&self, text: &str) -> (Vec<String>, Vec<PunctuationMark>) {
        let Some(pattern) = &self.pattern else {
            return (vec![text.to_string()], Vec::new());
        };

        let matches: Vec<_> = pattern.find_iter(text).collect();
        if matches.is_empty() {
            return (vec![text.to_string()], Vec::new());
        }

        if matches.len() == 1 && matches[0].as_str() == text {
            return (
                Vec::new(),
                vec![PunctuationMark::new(text, PunctuationPosition::Alone)],
            );
        }

        let last = matches.len() - 1;
        let marks: Vec<PunctuationMark> = matches
            .iter()
            .enumerate()
            .map(|(idx, m)| {
                let position = if idx == 0 && m.start() == 0 {
                    PunctuationPosition::Begin
                } else if idx == last && m.end() == text.len() {
                    PunctuationPosition::End
                } else {
                    PunctuationPosition::Middle
                };
                PunctuationMark::new(m.as_str(), position)
            })
            .collect();

        let mut segments = Vec::with_capacity(marks.len() + 1);
        let mut rest = text;
        for (idx, mark) in marks.iter().enumerate() {
            let (prefix, suffix) = rest.split_once(mark.mark.as_str()).unwrap_or((rest, ""));
            rest = suffix;
            if !prefix.is_empty() {
                segments.push(prefix.to_string());
            }
            if idx == last && !suffix.is_empty() {
                segments.push(suffix.to_string());
            }
        }

        (segments, marks)
    }

    /// Put punctuation runs back into (possibly phonemized) segments
    #[must_use]
    pub fn restore(segments: Vec<String>, marks: &[PunctuationMark]) -> Vec<String> {
        let mut restored = Vec::new();
        let mut pending: VecDeque<String> = segments.into();

        for (idx, mark) in marks.iter().enumerate() {
            let Some(first) = pending.pop_front() else {
                restored.push(marks[idx..].iter().map(|m| m.mark.as_str()).collect());
                return restored;
            };

            match mark.position {
                PunctuationPosition::Begin => pending.push_front(format!("{}{first}", mark.mark)),
                PunctuationPosition::End => restored.push(format!("{first}{}", mark.mark)),
                PunctuationPosition::Alone => {
                    restored.push(mark.mark.clone());
                    pending.push_front(first);
                }
                PunctuationPosition::Middle => match pending.pop_front() {
                    Some(second) => pending.push_front(format!("{first}{}{second}", mark.mark)),
                    None => pending.push_front(format!("{first}{}", mark.mark)),
                },
            }
        }

        restored.extend(pending);
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_UK_PUNCTUATIONS;

    fn punctuation() -> Punctuation {
        Punctuation::new(DEFAULT_UK_PUNCTUATIONS)
    }

    #[test]
    fn test_marks_are_deduplicated() {
        let p = Punctuation::new("..,,!.");
        assert_eq!(p.marks(), ".,!");
    }

    #[test]
    fn test_strip() {
        let p = punctuation();
        assert_eq!(p.strip("Привіт, світе!"), "Привіт світе");
        assert_eq!(p.strip("  (так)  "), "так");
        assert_eq!(p.strip("без розділових"), "без розділових");
    }

    #[test]
    fn test_strip_to_restore_without_punctuation() {
        let (segments, marks) = punctuation().strip_to_restore("добрий день");
        assert_eq!(segments, vec!["добрий день"]);
        assert!(marks.is_empty());
    }

    #[test]
    fn test_strip_to_restore_alone() {
        let (segments, marks) = punctuation().strip_to_restore("?!");
        assert!(segments.is_empty());
        assert_eq!(marks, vec![PunctuationMark::new("?!", PunctuationPosition::Alone)]);
    }

    #[test]
    fn test_strip_to_restore_positions() {
        let (segments, marks) = punctuation().strip_to_restore("(Так), звісно!");
        assert_eq!(segments, vec!["Так", "звісно"]);
        assert_eq!(
            marks,
            vec![
                PunctuationMark::new("(", PunctuationPosition::Begin),
                PunctuationMark::new("), ", PunctuationPosition::Middle),
                PunctuationMark::new("!", PunctuationPosition::End),
            ]
        );
    }

    #[test]
    fn test_strip_to_restore_trailing_segment() {
        let (segments, marks) = punctuation().strip_to_restore("так. ні");
        assert_eq!(segments, vec!["так", "ні"]);
        assert_eq!(marks, vec![PunctuationMark::new(". ", PunctuationPosition::Middle)]);
    }

    #[test]
    fn test_restore_inverts_strip() {
        let p = punctuation();
        for text in [
            "Привіт, світе!",
            "(Так), звісно!",
            "так. ні",
            "...",
            "слово",
            "(так",
            "...так",
            "(так) ні",
        ] {
            let (segments, marks) = p.strip_to_restore(text);
            let restored: String = Punctuation::restore(segments, &marks).concat();
            assert_eq!(restored, text);
        }

        let guillemets = Punctuation::new("«»");
        for text in ["«так", "«так» і ні"] {
            let (segments, marks) = guillemets.strip_to_restore(text);
            let restored: String = Punctuation::restore(segments, &marks).concat();
            assert_eq!(restored, text);
        }
    }

    #[test]
    fn test_strip_to_restore_keeps_text_after_leading_run() {
        let (segments, marks) = punctuation().strip_to_restore("(так");
        assert_eq!(segments, vec!["так"]);
        assert_eq!(marks, vec![PunctuationMark::new("(", PunctuationPosition::Begin)]);

        let (segments, marks) = punctuation().strip_to_restore("...так");
        assert_eq!(segments, vec!["так"]);
        assert_eq!(marks, vec![PunctuationMark::new("...", PunctuationPosition::Begin)]);
    }

    #[test]
    fn test_restore_without_segments_joins_marks() {
        let marks = vec![
            PunctuationMark::new("!", PunctuationPosition::End),
            PunctuationMark::new("?", PunctuationPosition::End),
        ];
        assert_eq!(Punctuation::restore(Vec::new(), &marks), vec!["!?"]);
    }

    #[test]
    fn test_empty_punctuation_set() {
        let p = Punctuation::new("");
        assert_eq!(p.strip(" a, b "), "a, b");
        let (segments, marks) = p.strip_to_restore("a, b");
        assert_eq!(segments, vec!["a, b"]);
        assert!(marks.is_empty());
    }
}
