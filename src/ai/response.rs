use log::{debug, warn};
use serde::Deserialize;

use super::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    // Absent field decodes as "" rather than failing the submission
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub done: bool,
}

pub struct ResponseHandler;

impl Default for ResponseHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseHandler {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the generated text from a completed `/api/generate` body.
    pub fn extract_text(&self, body: &str) -> Result<String> {
        let parsed: GenerateResponse = serde_json::from_str(body)?;

        if !parsed.done {
            warn!("Generation was not completed");
        }

        let text = match parsed.response {
            Some(text) => text,
            None => {
                warn!("Response body has no `response` field, treating as empty");
                String::new()
            }
        };

        debug!("Generated response length: {}", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::SubmitError;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn extracts_response_text() {
        let handler = ResponseHandler::new();
        let text = assert_ok!(handler.extract_text(r#"{"response":"hi","done":true}"#));
        assert_eq!(text, "hi");
    }

    #[test]
    fn ignores_unknown_fields() {
        let handler = ResponseHandler::new();
        let body = r#"{"model":"llama2","created_at":"2024-01-01T00:00:00Z","response":"ok","done":true,"eval_count":3}"#;
        assert_eq!(assert_ok!(handler.extract_text(body)), "ok");
    }

    #[test]
    fn missing_response_field_is_empty_text() {
        let handler = ResponseHandler::new();
        assert_eq!(assert_ok!(handler.extract_text(r#"{"done":true}"#)), "");
    }

    #[test]
    fn unfinished_generation_still_succeeds() {
        let handler = ResponseHandler::new();
        let text = assert_ok!(handler.extract_text(r#"{"response":"partial","done":false}"#));
        assert_eq!(text, "partial");
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let handler = ResponseHandler::new();
        let err = assert_err!(handler.extract_text("not json"));
        assert!(matches!(err, SubmitError::Parse(_)));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let handler = ResponseHandler::new();
        let err = assert_err!(handler.extract_text(r#"{"response":42}"#));
        assert!(matches!(err, SubmitError::Parse(_)));

        let err = assert_err!(handler.extract_text(r#""hi""#));
        assert!(matches!(err, SubmitError::Parse(_)));
    }
}
