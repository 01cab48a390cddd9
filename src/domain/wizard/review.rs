//! Review rows shown while the wizard waits for confirmation.

use serde::Serialize;

use super::answers::{Answer, AnswerStore};
use super::messages;
use super::script::WizardScript;

/// One labelled answer on the review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub field_key: String,
    pub label: String,
    pub value: String,
    pub skipped: bool,
}

/// Builds review rows in script order.
///
/// Skipped and missing answers both read "No response".
pub fn review_rows(script: &WizardScript, answers: &AnswerStore) -> Vec<ReviewRow> {
    script
        .steps()
        .iter()
        .filter_map(|step| step.field_key.as_deref())
        .map(|key| {
            let (value, skipped) = match answers.get(key) {
                Some(Answer::Value(v)) if !v.is_empty() => (v.clone(), false),
                Some(Answer::Value(_)) | None => (messages::NO_RESPONSE.to_string(), false),
                Some(Answer::Skipped) => (messages::NO_RESPONSE.to_string(), true),
            };
            ReviewRow {
                field_key: key.to_string(),
                label: humanize_key(key),
                value,
                skipped,
            }
        })
        .collect()
}

/// Turns `phoneNumber` or `phone_number` into `Phone Number`.
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_camel_and_snake_case() {
        assert_eq!(humanize_key("fullName"), "Full Name");
        assert_eq!(humanize_key("phoneNumber"), "Phone Number");
        assert_eq!(humanize_key("availability"), "Availability");
        assert_eq!(humanize_key("preferred_start_date"), "Preferred Start Date");
    }

    #[test]
    fn rows_follow_script_order_and_mark_skips() {
        let script = WizardScript::application_form();
        let mut answers = AnswerStore::new();
        answers.record("fullName", "Asha Oraon");
        answers.skip("experience");

        let rows = review_rows(&script, &answers);
        let keys: Vec<&str> = rows.iter().map(|r| r.field_key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["fullName", "email", "phoneNumber", "experience", "reason", "availability"]
        );

        assert_eq!(rows[0].value, "Asha Oraon");
        assert_eq!(rows[0].label, "Full Name");
        assert_eq!(rows[1].value, "No response");
        assert!(!rows[1].skipped);
        assert_eq!(rows[3].value, "No response");
        assert!(rows[3].skipped);
    }
}
