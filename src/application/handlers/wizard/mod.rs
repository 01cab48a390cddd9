//! Wizard handlers - open, answer, confirm, view and close.

mod close_wizard;
mod confirm_submission;
mod get_wizard;
mod open_wizard;
mod submit_answer;

pub use close_wizard::{CloseWizardCommand, CloseWizardHandler};
pub use confirm_submission::{
    ConfirmSubmissionCommand, ConfirmSubmissionHandler, ConfirmSubmissionResult,
};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use open_wizard::OpenWizardHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
