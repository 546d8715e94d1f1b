use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::application::ports::{GatewayError, InferenceGateway};

use super::transport_error::{transport_error, upstream_error};

pub const HUGGING_FACE_HUB_URL: &str = "https://huggingface.co";

/// Calls a named endpoint of a hosted Gradio Space.
///
/// The Space's host is looked up once, on first use, and cached for the
/// life of the gateway. Concurrent first calls race; the first resolution
/// to finish is kept.
pub struct GradioGateway {
    client: Client,
    hub_url: String,
    space: String,
    api_name: String,
    token: Option<String>,
    host: OnceCell<String>,
}

#[derive(Serialize)]
struct CallRequest<'a> {
    data: [&'a str; 1],
}

#[derive(Deserialize)]
struct CallResponse {
    event_id: String,
}

#[derive(Deserialize)]
struct SpaceHost {
    host: String,
}

impl GradioGateway {
    pub fn new(client: Client, space: String, api_name: String, token: Option<String>) -> Self {
        Self {
            client,
            hub_url: HUGGING_FACE_HUB_URL.to_string(),
            space,
            api_name: api_name.trim_start_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            host: OnceCell::new(),
        }
    }

    /// Skips host discovery and talks to `host` directly.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = OnceCell::new_with(Some(host.trim_end_matches('/').to_string()));
        self
    }

    pub fn with_hub_url(mut self, hub_url: String) -> Self {
        self.hub_url = hub_url.trim_end_matches('/').to_string();
        self
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn host(&self) -> Result<&str, GatewayError> {
        self.host
            .get_or_try_init(|| self.resolve_host())
            .await
            .map(String::as_str)
    }

    #[tracing::instrument(skip(self), fields(space = %self.space))]
    async fn resolve_host(&self) -> Result<String, GatewayError> {
        let url = format!("{}/api/spaces/{}/host", self.hub_url, self.space);
        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let resolved: SpaceHost = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        tracing::info!(host = %resolved.host, "Resolved Gradio Space host");
        Ok(resolved.host.trim_end_matches('/').to_string())
    }
}

#[async_trait]
impl InferenceGateway for GradioGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let host = self.host().await?;
        let call_url = format!("{}/gradio_api/call/{}", host, self.api_name);

        let response = self
            .authorize(self.client.post(&call_url))
            .json(&CallRequest { data: [prompt] })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let call: CallResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let response = self
            .authorize(self.client.get(format!("{}/{}", call_url, call.event_id)))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        let body = response.text().await.map_err(transport_error)?;
        parse_completion_event(&body)
    }

    fn name(&self) -> &'static str {
        "gradio"
    }

    async fn is_ready(&self) -> bool {
        self.host().await.is_ok()
    }
}

/// Extracts the reply from a Gradio call's event stream.
///
/// The `complete` event carries a JSON array whose first element is the
/// endpoint's output. An `error` event, or a stream with no `complete`
/// event, is a failure.
pub fn parse_completion_event(body: &str) -> Result<String, GatewayError> {
    let mut event = "";

    for line in body.lines() {
        if let Some(name) = line.strip_prefix("event:") {
            event = name.trim();
            continue;
        }
        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();

        match event {
            "complete" => {
                let output: Value = serde_json::from_str(data)
                    .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
                let first = output.as_array().and_then(|items| items.first()).ok_or_else(|| {
                    GatewayError::MalformedResponse("complete event without output".to_string())
                })?;
                let text = match first {
                    Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                };
                if text.is_empty() {
                    return Err(GatewayError::MalformedResponse("empty output".to_string()));
                }
                return Ok(text);
            }
            "error" => {
                return Err(GatewayError::Upstream(if data.is_empty() || data == "null" {
                    "Space reported an error".to_string()
                } else {
                    data.to_string()
                }));
            }
            _ => {}
        }
    }

    Err(GatewayError::MalformedResponse(
        "event stream ended without a result".to_string(),
    ))
}
