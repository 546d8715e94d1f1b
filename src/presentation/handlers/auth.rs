use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::AuthError;
use crate::application::services::{AuthSession, Registration};
use crate::domain::User;
use crate::presentation::extractors::AuthenticatedUser;
use crate::presentation::state::AppState;

use super::ApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Deserialize, Default)]
pub struct LogoutRequest {
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Serialize)]
pub struct UserView {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct TokensView {
    pub access: String,
    pub refresh: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserView,
    pub tokens: TokensView,
}

#[derive(Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: UserView::from(&session.user),
            tokens: TokensView {
                access: session.tokens.access,
                refresh: session.tokens.refresh,
            },
        }
    }
}

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .auth_service
        .register(Registration {
            username: request.username,
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::from(session))))
}

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok((StatusCode::OK, Json(AuthResponse::from(session))))
}

#[tracing::instrument(skip(state, request))]
pub async fn refresh_handler(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let access = state.auth_service.refresh(&request.refresh).await?;
    Ok((StatusCode::OK, Json(AccessTokenResponse { access })))
}

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.user_id))]
pub async fn logout_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    // The body is optional; without one there is no refresh token to revoke.
    let request: LogoutRequest = if body.iter().all(u8::is_ascii_whitespace) {
        LogoutRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?
    };

    state
        .auth_service
        .logout(request.refresh.as_deref())
        .await
        .map_err(|e| match e {
            AuthError::InvalidToken(reason) => {
                tracing::debug!(reason = %reason, "Logout rejected");
                ApiError::BadRequest("Invalid token.".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Successfully logged out.".to_string(),
        }),
    ))
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.user_id))]
pub async fn profile_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state.auth_service.profile(user.user_id).await?;
    Ok((StatusCode::OK, Json(UserView::from(&profile))))
}
