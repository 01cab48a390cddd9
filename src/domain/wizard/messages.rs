//! Fixed wizard copy.

/// Bot re-prompt when a required step receives blank input.
pub const RESPONSE_REQUIRED: &str = "Please provide a response for this field.";

/// User echo for a blank answer on an optional step.
pub const SKIPPED_ECHO: &str = "(Skipped)";

/// User echo for the confirm action.
pub const CONFIRM_ECHO: &str = "Looks good, submit my application!";

/// Bot message appended once when the hand-off succeeds.
pub const SUBMISSION_SUCCEEDED: &str =
    "Your application has been successfully submitted! We will get back to you soon.";

/// Bot message appended when the hand-off fails.
pub const SUBMISSION_FAILED: &str = "We couldn't submit your application. Please try again.";

/// Review prompt used when a script ends without its own confirm step.
pub const DEFAULT_REVIEW_PROMPT: &str = "Please review your answers before submitting:";

/// Static notice that replaces the input area once completed.
pub const COMPLETED_NOTICE: &str = "Application completed.";

/// Review placeholder for a skipped or missing answer.
pub const NO_RESPONSE: &str = "No response";
