//! Languages the assistant can be switched to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A selectable assistant language.
///
/// Only English and Hindi have full copy; the others fall back to English
/// wherever no translation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Bn,
    Or,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Hi, Language::Bn, Language::Or];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::Or => "or",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Bn => "বাংলা",
            Language::Or => "ଓଡ଼ିଆ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| {
                ValidationError::invalid_format("language", format!("unsupported language '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_case_insensitively() {
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!(" BN ".parse::<Language>().unwrap(), Language::Bn);
        assert_eq!("or".parse::<Language>().unwrap(), Language::Or);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'language' has invalid format: unsupported language 'fr'"
        );
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::En.native_name(), "English");
    }
}
