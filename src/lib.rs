pub mod ai;
pub mod cli;
pub mod config;
pub mod session;

pub use ai::{ConnectionTarget, OllamaClient, RequestParameters, SubmitError};
pub use cli::{Cli, CommandHandler, Commands};
pub use config::Settings;
pub use session::{Outcome, PromptForm, SubmissionState};
