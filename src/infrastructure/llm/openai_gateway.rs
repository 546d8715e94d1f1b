use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GatewayError, InferenceGateway};

use super::transport_error::{transport_error, upstream_error};

/// Gateway for any server speaking the OpenAI chat-completions protocol,
/// such as a local runtime hosting the fine-tuned model.
pub struct OpenAiGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: usize,
    temperature: f32,
    system_prompt: Option<String>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiGateway {
    pub fn new(
        client: Client,
        base_url: String,
        api_key: Option<String>,
        model: String,
        max_tokens: usize,
        temperature: f32,
        system_prompt: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            model,
            max_tokens,
            temperature,
            system_prompt: system_prompt.filter(|p| !p.trim().is_empty()),
        }
    }

    fn build_messages(&self, prompt: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });
        messages
    }
}

#[async_trait]
impl InferenceGateway for OpenAiGateway {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: self.build_messages(prompt),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| GatewayError::MalformedResponse("empty choices".to_string()))?;

        if text.is_empty() {
            return Err(GatewayError::MalformedResponse("empty completion".to_string()));
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    /// The server is ready when its model listing answers successfully.
    async fn is_ready(&self) -> bool {
        let mut request = self.client.get(format!("{}/models", self.base_url));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        match request.send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Model listing rejected");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model server unreachable");
                false
            }
        }
    }
}
