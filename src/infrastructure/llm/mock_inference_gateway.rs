use std::sync::Mutex;

use crate::application::ports::{GatewayError, InferenceGateway};

/// Answers every prompt with a canned SQL reply.
pub struct MockInferenceGateway;

#[async_trait::async_trait]
impl InferenceGateway for MockInferenceGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        Ok(format!("-- Mock answer for: {}\nSELECT 1;", prompt))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Fails every call as if the inference service were down.
pub struct FailingInferenceGateway;

#[async_trait::async_trait]
impl InferenceGateway for FailingInferenceGateway {
    async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
        Err(GatewayError::Unreachable("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

/// Records every prompt it receives and replies with a fixed text.
pub struct RecordingInferenceGateway {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingInferenceGateway {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl InferenceGateway for RecordingInferenceGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.reply.clone())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
