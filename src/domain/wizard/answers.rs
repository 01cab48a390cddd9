//! Structured answers collected by the wizard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored answer for one field.
///
/// `Skipped` is distinct from both an empty string and a missing key: it
/// records that the visitor reached the step and chose not to answer.
/// It serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Value(String),
    Skipped,
}

impl Answer {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Answer::Value(v) => Some(v),
            Answer::Skipped => None,
        }
    }
}

/// Field key to answer mapping.
///
/// Keys are written only when the visitor submits on the owning step.
/// Re-recording a key overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    values: BTreeMap<String, Answer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a (trimmed) value under `key`.
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), Answer::Value(value.into()));
    }

    /// Marks `key` as explicitly skipped.
    pub fn skip(&mut self, key: impl Into<String>) {
        self.values.insert(key.into(), Answer::Skipped);
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skipped_serializes_as_null() {
        let mut store = AnswerStore::new();
        store.record("fullName", "Asha Oraon");
        store.skip("experience");

        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value, json!({"experience": null, "fullName": "Asha Oraon"}));
    }

    #[test]
    fn skipped_differs_from_empty_and_missing() {
        let mut store = AnswerStore::new();
        store.skip("experience");
        store.record("notes", "");

        assert_eq!(store.get("experience"), Some(&Answer::Skipped));
        assert_eq!(store.get("notes"), Some(&Answer::Value(String::new())));
        assert_eq!(store.get("reason"), None);
    }

    #[test]
    fn record_overwrites_previous_value() {
        let mut store = AnswerStore::new();
        store.skip("experience");
        store.record("experience", "Trek guide");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("experience").and_then(Answer::as_str), Some("Trek guide"));
    }

    #[test]
    fn deserializes_null_back_to_skipped() {
        let store: AnswerStore = serde_json::from_str(r#"{"a":"x","b":null}"#).unwrap();
        assert_eq!(store.get("b"), Some(&Answer::Skipped));
        assert_eq!(store.get("a").and_then(Answer::as_str), Some("x"));
    }
}
