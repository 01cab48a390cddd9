//! HTTP Submitter - POSTs confirmed applications to an intake endpoint.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpSubmitterConfig::new("https://intake.example.org/applications")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_secret_token(settings.bearer_token.clone());
//!
//! let submitter = HttpSubmitter::new(config)?;
//! ```
//!
//! There is no retry here. A failed call surfaces as a failed submission
//! and the visitor decides whether to confirm again.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::wizard::AnswerStore;
use crate::ports::{ApplicationSnapshot, ApplicationSubmitter, SubmissionError, SubmissionReceipt};

/// Configuration for the HTTP submitter.
#[derive(Debug, Clone)]
pub struct HttpSubmitterConfig {
    /// Endpoint receiving `POST` requests.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Optional bearer token.
    bearer_token: Option<Secret<String>>,
}

impl HttpSubmitterConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
            bearer_token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_secret_token(mut self, token: Option<Secret<String>>) -> Self {
        self.bearer_token = token;
        self
    }
}

/// Wire body sent to the intake endpoint.
#[derive(Debug, Serialize)]
struct ApplicationRequest<'a> {
    reference: String,
    attempt: u32,
    submitted_at: String,
    answers: &'a AnswerStore,
}

/// Optional body returned by the intake endpoint.
#[derive(Debug, Deserialize)]
struct ApplicationAck {
    #[serde(default)]
    reference: Option<String>,
}

/// Submitter that delivers applications over HTTP.
pub struct HttpSubmitter {
    config: HttpSubmitterConfig,
    client: Client,
}

impl HttpSubmitter {
    /// Creates a submitter with its own HTTP client.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the HTTP client cannot be built.
    pub fn new(config: HttpSubmitterConfig) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SubmissionError::Unavailable(format!("HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn to_request<'a>(&self, snapshot: &'a ApplicationSnapshot) -> ApplicationRequest<'a> {
        ApplicationRequest {
            reference: snapshot.session_id.to_string(),
            attempt: snapshot.attempt,
            submitted_at: snapshot.submitted_at.to_rfc3339(),
            answers: &snapshot.answers,
        }
    }
}

#[async_trait]
impl ApplicationSubmitter for HttpSubmitter {
    async fn submit(
        &self,
        snapshot: &ApplicationSnapshot,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&self.to_request(snapshot));
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SubmissionError::Timeout
            } else if e.is_connect() {
                SubmissionError::Unavailable(format!("Connection failed: {}", e))
            } else {
                SubmissionError::Unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let reference = response
            .json::<ApplicationAck>()
            .await
            .ok()
            .and_then(|ack| ack.reference)
            .unwrap_or_else(|| snapshot.session_id.to_string());

        Ok(SubmissionReceipt::new(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, WizardSessionId};

    #[test]
    fn request_body_carries_answers_and_reference() {
        let submitter = HttpSubmitter::new(HttpSubmitterConfig::new("http://localhost:9/intake")).unwrap();
        let mut answers = AnswerStore::new();
        answers.record("fullName", "Asha");
        answers.skip("experience");
        let snapshot = ApplicationSnapshot {
            session_id: WizardSessionId::new(),
            attempt: 2,
            answers,
            submitted_at: Timestamp::now(),
        };

        let body = serde_json::to_value(submitter.to_request(&snapshot)).unwrap();
        assert_eq!(body["reference"], snapshot.session_id.to_string());
        assert_eq!(body["attempt"], 2);
        assert_eq!(body["answers"]["fullName"], "Asha");
        assert!(body["answers"]["experience"].is_null());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        let config = HttpSubmitterConfig::new("http://127.0.0.1:9/intake")
            .with_timeout(Duration::from_secs(2));
        let submitter = HttpSubmitter::new(config).unwrap();
        let snapshot = ApplicationSnapshot {
            session_id: WizardSessionId::new(),
            attempt: 1,
            answers: AnswerStore::new(),
            submitted_at: Timestamp::now(),
        };

        let result = submitter.submit(&snapshot).await;
        assert!(matches!(
            result,
            Err(SubmissionError::Unavailable(_)) | Err(SubmissionError::Timeout)
        ));
    }
}
