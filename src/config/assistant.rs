//! FAQ assistant configuration

use serde::Deserialize;
use std::time::Duration;

use crate::domain::assistant::Language;

use super::error::ValidationError;
use super::wizard::{default_idle_timeout, MAX_DELAY_MS};

/// Assistant configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Language used when a chat is started without one
    #[serde(default)]
    pub default_language: Language,

    /// Pause before a quick-action reply settles
    #[serde(default = "default_quick_reply_delay")]
    pub quick_reply_delay_ms: u64,

    /// Base pause before a typed reply settles
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,

    /// Random extra reply pause, 0..=jitter
    #[serde(default = "default_reply_jitter")]
    pub reply_jitter_ms: u64,

    /// Cap on concurrently open chats; unlimited if unset
    pub max_open_sessions: Option<usize>,

    /// Inactivity after which an abandoned chat is evicted
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

impl AssistantConfig {
    pub fn quick_reply_delay(&self) -> Duration {
        Duration::from_millis(self.quick_reply_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn reply_jitter(&self) -> Duration {
        Duration::from_millis(self.reply_jitter_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let delays = [
            ("assistant.quick_reply_delay_ms", self.quick_reply_delay_ms),
            ("assistant.reply_delay_ms", self.reply_delay_ms),
            ("assistant.reply_jitter_ms", self.reply_jitter_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ValidationError::InvalidDelay(name));
            }
        }
        if self.max_open_sessions == Some(0) {
            return Err(ValidationError::InvalidSessionLimit("assistant.max_open_sessions"));
        }
        if self.idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidIdleTimeout("assistant.idle_timeout_secs"));
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            quick_reply_delay_ms: default_quick_reply_delay(),
            reply_delay_ms: default_reply_delay(),
            reply_jitter_ms: default_reply_jitter(),
            max_open_sessions: None,
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

fn default_quick_reply_delay() -> u64 {
    1500
}

fn default_reply_delay() -> u64 {
    1000
}

fn default_reply_jitter() -> u64 {
    1000
}
