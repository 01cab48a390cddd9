//! Transcript log shared by the application wizard and the FAQ assistant.
//!
//! The transcript is the human-readable record of an exchange. It is
//! append-only: entries are timestamped when captured and are never edited,
//! removed, or reordered. Structured data (wizard answers) lives elsewhere;
//! the two are allowed to diverge.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// Scripted assistant output.
    Bot,
    /// Text the visitor typed or an action they clicked.
    User,
}

/// A single immutable transcript entry.
///
/// # Invariants
///
/// - `seq` is 1-based and strictly increasing within one transcript
/// - `recorded_at` is set at append time and never changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    seq: u64,
    speaker: Speaker,
    text: String,
    recorded_at: Timestamp,
}

impl TranscriptEntry {
    /// Position of this entry in its transcript, starting at 1.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn recorded_at(&self) -> &Timestamp {
        &self.recorded_at
    }
}

/// Append-only ordered log of bot/user exchanges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time.
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) -> &TranscriptEntry {
        let seq = self.entries.len() as u64 + 1;
        self.entries.push(TranscriptEntry {
            seq,
            speaker,
            text: text.into(),
            recorded_at: Timestamp::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Appends a bot-authored entry.
    pub fn bot(&mut self, text: impl Into<String>) -> &TranscriptEntry {
        self.append(Speaker::Bot, text)
    }

    /// Appends a user-authored entry.
    pub fn user(&mut self, text: impl Into<String>) -> &TranscriptEntry {
        self.append(Speaker::User, text)
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// Number of entries whose text is exactly `text`.
    #[cfg(test)]
    pub(crate) fn count_text(&self, text: &str) -> usize {
        self.entries.iter().filter(|e| e.text == text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod speaker {
        use super::*;

        #[test]
        fn serializes_to_snake_case() {
            assert_eq!(serde_json::to_string(&Speaker::Bot).unwrap(), "\"bot\"");
            assert_eq!(serde_json::to_string(&Speaker::User).unwrap(), "\"user\"");
        }
    }

    mod append {
        use super::*;

        #[test]
        fn assigns_increasing_sequence_numbers() {
            let mut t = Transcript::new();
            t.bot("Hello");
            t.user("Hi");
            t.bot("What is your name?");

            let seqs: Vec<u64> = t.entries().iter().map(|e| e.seq()).collect();
            assert_eq!(seqs, vec![1, 2, 3]);
        }

        #[test]
        fn keeps_earlier_entries_untouched() {
            let mut t = Transcript::new();
            t.bot("first");
            let before = t.entries()[0].clone();
            t.user("second");
            t.bot("third");

            assert_eq!(t.entries()[0], before);
        }

        #[test]
        fn timestamps_never_go_backwards() {
            let mut t = Transcript::new();
            for i in 0..5 {
                t.bot(format!("entry {}", i));
            }
            for pair in t.entries().windows(2) {
                assert!(pair[1].recorded_at() >= pair[0].recorded_at());
            }
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn counts_entries_by_text() {
            let mut t = Transcript::new();
            t.bot("Please provide a response for this field.");
            t.bot("Please provide a response for this field.");
            t.user("Asha");

            assert_eq!(t.entries()[2].speaker(), Speaker::User);
            assert_eq!(t.count_text("Please provide a response for this field."), 2);
            assert_eq!(t.last().map(|e| e.text()), Some("Asha"));
        }
    }
}
