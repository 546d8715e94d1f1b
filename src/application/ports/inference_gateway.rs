use async_trait::async_trait;

/// Boundary through which model-generated text is obtained, whether the
/// model runs remotely or behind a local server.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Generates a reply for `prompt`. Implementations never retry.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Short provider label used in logs and readiness output.
    fn name(&self) -> &'static str;

    async fn is_ready(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("inference service unreachable: {0}")]
    Unreachable(String),
    #[error("inference request timed out: {0}")]
    Timeout(String),
    #[error("inference service returned an error: {0}")]
    Upstream(String),
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),
    #[error("inference gateway misconfigured: {0}")]
    Configuration(String),
}
