use serde::Serialize;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "11434";

/// Models offered by the form. Advisory only, any string is sent as-is.
pub const AVAILABLE_MODELS: &[&str] = &[
    "llama2",
    "llama2:13b",
    "llama2:70b",
    "codellama",
    "codellama:13b",
    "codellama:34b",
    "mistral",
    "mixtral",
    "neural-chat",
    "starcode",
    "vicuna",
    "orca-mini",
];

/// Where the Ollama server lives. Kept as raw strings, never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: String,
}

impl ConnectionTarget {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// `http://{host}:{port}/api/generate`, with no escaping of either part
    pub fn generate_url(&self) -> String {
        format!("http://{}:{}/api/generate", self.host, self.port)
    }
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pub model: String,
    pub prompt: String,
}

impl RequestParameters {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// A submission needs a model and a prompt that is not just whitespace.
    pub fn is_submittable(&self) -> bool {
        !self.model.is_empty() && !self.prompt.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl From<&RequestParameters> for GenerateRequest {
    fn from(params: &RequestParameters) -> Self {
        Self {
            model: params.model.clone(),
            prompt: params.prompt.clone(),
            stream: false,
        }
    }
}

/// Builds the endpoint and the non-streaming payload for one submission.
pub fn build_request(
    target: &ConnectionTarget,
    params: &RequestParameters,
) -> (String, GenerateRequest) {
    (target.generate_url(), GenerateRequest::from(params))
}
