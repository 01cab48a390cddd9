//! Application wizard configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for any presentation delay.
pub const MAX_DELAY_MS: u64 = 30_000;

/// Wizard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// YAML script replacing the built-in application form
    pub script_path: Option<PathBuf>,

    /// Pause before the intro settles
    #[serde(default = "default_intro_delay")]
    pub intro_delay_ms: u64,

    /// Base typing pause after an accepted answer
    #[serde(default = "default_typing_delay")]
    pub typing_delay_ms: u64,

    /// Random extra typing pause, 0..=jitter
    #[serde(default = "default_typing_jitter")]
    pub typing_jitter_ms: u64,

    /// Minimum time the submitting state stays visible
    #[serde(default = "default_submitting_min_display")]
    pub submitting_min_display_ms: u64,

    /// Cap on concurrently open wizards; unlimited if unset
    pub max_open_sessions: Option<usize>,

    /// Inactivity after which an abandoned wizard is evicted
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

impl WizardConfig {
    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn typing_jitter(&self) -> Duration {
        Duration::from_millis(self.typing_jitter_ms)
    }

    pub fn submitting_min_display(&self) -> Duration {
        Duration::from_millis(self.submitting_min_display_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let delays = [
            ("wizard.intro_delay_ms", self.intro_delay_ms),
            ("wizard.typing_delay_ms", self.typing_delay_ms),
            ("wizard.typing_jitter_ms", self.typing_jitter_ms),
            ("wizard.submitting_min_display_ms", self.submitting_min_display_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ValidationError::InvalidDelay(name));
            }
        }
        if self.max_open_sessions == Some(0) {
            return Err(ValidationError::InvalidSessionLimit("wizard.max_open_sessions"));
        }
        if self.idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidIdleTimeout("wizard.idle_timeout_secs"));
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            script_path: None,
            intro_delay_ms: default_intro_delay(),
            typing_delay_ms: default_typing_delay(),
            typing_jitter_ms: default_typing_jitter(),
            submitting_min_display_ms: default_submitting_min_display(),
            max_open_sessions: None,
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

fn default_intro_delay() -> u64 {
    1000
}

fn default_typing_delay() -> u64 {
    800
}

fn default_typing_jitter() -> u64 {
    500
}

fn default_submitting_min_display() -> u64 {
    2000
}

pub(super) fn default_idle_timeout() -> u64 {
    30 * 60
}
