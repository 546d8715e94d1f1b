use crate::application::ports::GatewayError;

/// Maps a reqwest failure onto the gateway's error kinds.
pub fn transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout(error.to_string())
    } else if error.is_decode() {
        GatewayError::MalformedResponse(error.to_string())
    } else {
        GatewayError::Unreachable(error.to_string())
    }
}

pub(crate) async fn upstream_error(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    GatewayError::Upstream(format!("HTTP {}: {}", status, body))
}
