pub mod form;

pub use form::{Outcome, PromptForm, SubmissionState};
