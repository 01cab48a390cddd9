//! Application wizard - a fixed, linear conversational form.
//!
//! - [`WizardScript`]: the validated step sequence
//! - [`StepSequencer`]: position within the script
//! - [`AnswerStore`]: structured answers, with an explicit skip marker
//! - [`SubmissionState`]: the confirmation gate
//! - [`WizardSession`]: one open wizard, owning all of the above
//! - [`WizardView`]: read model for rendering

mod answers;
mod errors;
pub mod messages;
mod review;
mod script;
mod sequencer;
mod session;
mod step;
mod submission;
mod view;

pub use answers::{Answer, AnswerStore};
pub use errors::WizardError;
pub use review::{humanize_key, review_rows, ReviewRow};
pub use script::{ScriptError, WizardScript};
pub use sequencer::{next_index, StepSequencer};
pub use session::{SubmissionTicket, SubmitOutcome, WizardSession};
pub use step::{InputKind, StepDefinition};
pub use submission::SubmissionState;
pub use view::{InputControl, StepView, WizardView};
