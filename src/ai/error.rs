use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please select a model and enter a prompt";
pub const CONNECT_FALLBACK_MESSAGE: &str = "Failed to connect to Ollama server";

pub type Result<T> = std::result::Result<T, SubmitError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("{0}")]
    Network(String),

    #[error("Invalid response from Ollama server: {0}")]
    Parse(String),
}

impl SubmitError {
    /// Network failure with the fixed fallback when no cause text is available.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Network(CONNECT_FALLBACK_MESSAGE.to_string())
        } else {
            Self::Network(message)
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::HttpStatus(status.as_u16()),
            None => Self::network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code() {
        assert_eq!(
            SubmitError::HttpStatus(503).to_string(),
            "HTTP error! status: 503"
        );
    }

    #[test]
    fn empty_network_message_falls_back() {
        assert_eq!(
            SubmitError::network("  ").to_string(),
            CONNECT_FALLBACK_MESSAGE
        );
        assert_eq!(
            SubmitError::network("connection refused").to_string(),
            "connection refused"
        );
    }

    #[test]
    fn parse_message_keeps_parser_detail() {
        let err: SubmitError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        let message = err.to_string();
        assert!(message.starts_with("Invalid response from Ollama server: "));
        assert!(message.contains("expected"));
    }
}
