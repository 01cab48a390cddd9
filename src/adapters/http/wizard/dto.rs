//! DTOs for wizard endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::wizard::{SubmitOutcome, WizardView};

/// Body of `POST /api/wizard/:id/answers`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Blank text skips an optional step.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub outcome: SubmitOutcome,
    pub wizard: WizardView,
}

/// Body of the 202 returned by confirm.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmResponse {
    pub attempt: u32,
    pub wizard: WizardView,
}
