use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::application::ports::InferenceGateway;
use crate::presentation::config::{InferenceProvider, InferenceSettings};

use super::{GradioGateway, MockInferenceGateway, OpenAiGateway};

pub struct InferenceGatewayFactory;

#[derive(Debug, thiserror::Error)]
pub enum InferenceGatewayFactoryError {
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),
    #[error("http client initialization failed: {0}")]
    ClientInitialization(String),
}

impl InferenceGatewayFactory {
    pub fn create(
        settings: &InferenceSettings,
    ) -> Result<Arc<dyn InferenceGateway>, InferenceGatewayFactoryError> {
        match settings.provider {
            InferenceProvider::Gradio => {
                if settings.space.trim().is_empty() {
                    return Err(InferenceGatewayFactoryError::MissingSetting("inference.space"));
                }
                tracing::info!(
                    space = %settings.space,
                    api_name = %settings.api_name,
                    authenticated = settings.api_key.is_some(),
                    "Using Gradio Space inference gateway"
                );
                let mut gateway = GradioGateway::new(
                    Self::http_client(settings)?,
                    settings.space.clone(),
                    settings.api_name.clone(),
                    settings.api_key.clone(),
                );
                if let Some(host) = settings.base_url.clone() {
                    gateway = gateway.with_host(host);
                }
                Ok(Arc::new(gateway))
            }
            InferenceProvider::OpenAi => {
                let base_url = settings
                    .base_url
                    .clone()
                    .filter(|u| !u.trim().is_empty())
                    .ok_or(InferenceGatewayFactoryError::MissingSetting(
                        "inference.base_url",
                    ))?;
                tracing::info!(
                    base_url = %base_url,
                    model = %settings.model,
                    "Using OpenAI-compatible inference gateway"
                );
                Ok(Arc::new(OpenAiGateway::new(
                    Self::http_client(settings)?,
                    base_url,
                    settings.api_key.clone(),
                    settings.model.clone(),
                    settings.max_new_tokens,
                    settings.temperature,
                    settings.system_prompt.clone(),
                )))
            }
            InferenceProvider::Mock => {
                tracing::warn!("Using mock inference gateway; replies are canned");
                Ok(Arc::new(MockInferenceGateway))
            }
        }
    }

    fn http_client(settings: &InferenceSettings) -> Result<Client, InferenceGatewayFactoryError> {
        Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| InferenceGatewayFactoryError::ClientInitialization(e.to_string()))
    }
}
