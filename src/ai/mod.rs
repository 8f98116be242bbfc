pub mod error;
pub mod ollama_client;
pub mod request;
pub mod response;

pub use error::SubmitError;
pub use ollama_client::OllamaClient;
pub use request::{
    build_request, ConnectionTarget, GenerateRequest, RequestParameters, AVAILABLE_MODELS,
};
pub use response::{GenerateResponse, ResponseHandler};
