use log::debug;

use crate::ai::{build_request, ConnectionTarget, OllamaClient, RequestParameters, SubmitError};

/// Result of one submission cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(text) | Outcome::Failure(text) => text,
        }
    }
}

impl From<Result<String, SubmitError>> for Outcome {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(text) => Outcome::Success(text),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    InFlight,
    Succeeded,
    Failed,
}

/// Everything one form session holds: inputs, loading flag and last outcome.
///
/// Submitting takes `&mut self`, so a form never has two requests in flight.
#[derive(Debug, Clone)]
pub struct PromptForm {
    pub target: ConnectionTarget,
    pub params: RequestParameters,
    state: SubmissionState,
    outcome: Option<Outcome>,
}

impl Default for PromptForm {
    fn default() -> Self {
        Self::new(ConnectionTarget::default(), RequestParameters::default())
    }
}

impl PromptForm {
    pub fn new(target: ConnectionTarget, params: RequestParameters) -> Self {
        Self {
            target,
            params,
            state: SubmissionState::Idle,
            outcome: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::InFlight
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    /// Validating step. Clears the previous outcome and enters `InFlight`,
    /// or hands back the validation error for `finish` to record.
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        self.state = SubmissionState::Validating;

        if !self.params.is_submittable() {
            debug!("Submission rejected: model or prompt missing");
            return Err(SubmitError::Validation);
        }

        self.outcome = None;
        self.state = SubmissionState::InFlight;
        Ok(())
    }

    /// Records the result of the in-flight call. Always the last effect of a cycle.
    pub fn finish(&mut self, result: Result<String, SubmitError>) -> &Outcome {
        let outcome = Outcome::from(result);
        self.state = if outcome.is_success() {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
        self.outcome.insert(outcome)
    }

    /// Runs one full cycle: validate, send, record.
    pub async fn submit(&mut self, client: &OllamaClient) -> &Outcome {
        let result = match self.begin() {
            Ok(()) => {
                let (url, body) = build_request(&self.target, &self.params);
                client.post_generate(&url, &body).await
            }
            Err(e) => Err(e),
        };
        self.finish(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::error::VALIDATION_MESSAGE;

    fn form(model: &str, prompt: &str) -> PromptForm {
        PromptForm::new(
            ConnectionTarget::default(),
            RequestParameters::new(model, prompt),
        )
    }

    #[test]
    fn starts_idle_without_outcome() {
        let form = PromptForm::default();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.outcome().is_none());
        assert!(form.can_submit());
        assert_eq!(form.target, ConnectionTarget::new("localhost", "11434"));
    }

    #[test]
    fn missing_model_fails_validation() {
        let mut form = form("", "hello");
        let result = form.begin();
        assert_eq!(result, Err(SubmitError::Validation));
        assert_eq!(form.state(), SubmissionState::Validating);

        form.finish(result.map(|_| String::new()));
        assert_eq!(form.state(), SubmissionState::Failed);
        assert_eq!(
            form.outcome(),
            Some(&Outcome::Failure(VALIDATION_MESSAGE.to_string()))
        );
        assert!(form.can_submit());
    }

    #[test]
    fn whitespace_prompt_fails_validation() {
        let mut form = form("llama2", "   \n\t");
        assert_eq!(form.begin(), Err(SubmitError::Validation));
    }

    #[test]
    fn valid_submission_clears_previous_outcome() {
        let mut form = form("llama2", "hello");
        form.finish(Ok("old".to_string()));

        form.begin().unwrap();
        assert_eq!(form.state(), SubmissionState::InFlight);
        assert!(form.outcome().is_none());
        assert!(form.is_loading());
        assert!(!form.can_submit());
    }

    #[test]
    fn rejected_submission_replaces_previous_outcome() {
        let mut form = form("llama2", "hello");
        form.finish(Ok("old".to_string()));

        form.params.prompt.clear();
        let result = form.begin().map(|_| String::new());
        form.finish(result);
        assert_eq!(
            form.outcome(),
            Some(&Outcome::Failure(VALIDATION_MESSAGE.to_string()))
        );
    }

    #[test]
    fn finish_maps_results_to_terminal_states() {
        let mut form = form("llama2", "hello");

        form.begin().unwrap();
        let outcome = form.finish(Ok("hi".to_string())).clone();
        assert_eq!(outcome, Outcome::Success("hi".to_string()));
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(form.can_submit());

        form.begin().unwrap();
        let outcome = form.finish(Err(SubmitError::HttpStatus(500))).clone();
        assert_eq!(
            outcome,
            Outcome::Failure("HTTP error! status: 500".to_string())
        );
        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(form.can_submit());
    }
}
