//! Tokio Pacer - real presentation delays with random jitter.

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::AppConfig;
use crate::ports::{Pause, ResponsePacer};

/// Base and jitter for every kind of pause.
///
/// A pause lasts `base + uniform(0..=jitter)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingSchedule {
    pub greeting: Duration,
    pub typing_base: Duration,
    pub typing_jitter: Duration,
    pub submitting: Duration,
    pub quick_reply: Duration,
    pub chat_base: Duration,
    pub chat_jitter: Duration,
}

impl Default for PacingSchedule {
    fn default() -> Self {
        Self {
            greeting: Duration::from_millis(1000),
            typing_base: Duration::from_millis(800),
            typing_jitter: Duration::from_millis(500),
            submitting: Duration::from_millis(2000),
            quick_reply: Duration::from_millis(1500),
            chat_base: Duration::from_millis(1000),
            chat_jitter: Duration::from_millis(1000),
        }
    }
}

impl From<&AppConfig> for PacingSchedule {
    fn from(config: &AppConfig) -> Self {
        Self {
            greeting: config.wizard.intro_delay(),
            typing_base: config.wizard.typing_delay(),
            typing_jitter: config.wizard.typing_jitter(),
            submitting: config.wizard.submitting_min_display(),
            quick_reply: config.assistant.quick_reply_delay(),
            chat_base: config.assistant.reply_delay(),
            chat_jitter: config.assistant.reply_jitter(),
        }
    }
}

impl PacingSchedule {
    /// Base and jitter for `pause`.
    pub fn bounds(&self, pause: Pause) -> (Duration, Duration) {
        match pause {
            Pause::Greeting => (self.greeting, Duration::ZERO),
            Pause::Typing => (self.typing_base, self.typing_jitter),
            Pause::Submitting => (self.submitting, Duration::ZERO),
            Pause::QuickReply => (self.quick_reply, Duration::ZERO),
            Pause::ChatReply => (self.chat_base, self.chat_jitter),
        }
    }

    /// Draws a concrete delay for `pause`.
    pub fn sample(&self, pause: Pause) -> Duration {
        let (base, jitter) = self.bounds(pause);
        let jitter_ms = jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return base;
        }
        base + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }
}

/// Pacer that sleeps on the tokio timer.
#[derive(Debug, Clone, Default)]
pub struct TokioPacer {
    schedule: PacingSchedule,
}

impl TokioPacer {
    pub fn new(schedule: PacingSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &PacingSchedule {
        &self.schedule
    }
}

#[async_trait]
impl ResponsePacer for TokioPacer {
    async fn pause(&self, pause: Pause) {
        let delay = self.schedule.sample(pause);
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_bounds() {
        let schedule = PacingSchedule::default();
        for _ in 0..200 {
            let typing = schedule.sample(Pause::Typing);
            assert!(typing >= Duration::from_millis(800));
            assert!(typing <= Duration::from_millis(1300));

            let chat = schedule.sample(Pause::ChatReply);
            assert!(chat >= Duration::from_millis(1000));
            assert!(chat <= Duration::from_millis(2000));
        }
    }

    #[test]
    fn fixed_pauses_have_no_jitter() {
        let schedule = PacingSchedule::default();
        assert_eq!(schedule.sample(Pause::Greeting), Duration::from_millis(1000));
        assert_eq!(schedule.sample(Pause::Submitting), Duration::from_millis(2000));
        assert_eq!(schedule.sample(Pause::QuickReply), Duration::from_millis(1500));
    }

    #[test]
    fn default_config_matches_default_schedule() {
        assert_eq!(
            PacingSchedule::from(&AppConfig::default()),
            PacingSchedule::default()
        );
    }

    #[tokio::test]
    async fn pause_sleeps_for_at_least_the_base() {
        let pacer = TokioPacer::new(PacingSchedule {
            greeting: Duration::from_millis(20),
            ..PacingSchedule::default()
        });
        let start = tokio::time::Instant::now();
        pacer.pause(Pause::Greeting).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
