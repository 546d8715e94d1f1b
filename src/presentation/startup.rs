use crate::application::ports::RepositoryError;
use crate::infrastructure::llm::{InferenceGatewayFactory, InferenceGatewayFactoryError};
use crate::infrastructure::persistence::{RepositorySet, create_pool, run_migrations};
use crate::presentation::config::{Settings, StorageBackend};
use crate::presentation::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
    #[error("inference gateway: {0}")]
    Gateway(#[from] InferenceGatewayFactoryError),
}

/// Builds everything the router needs, in order: configuration checks,
/// storage, the inference gateway, then the services over both.
pub async fn bootstrap(settings: Settings) -> Result<AppState, StartupError> {
    if settings.auth.jwt_secret.trim().is_empty() {
        return Err(StartupError::Configuration(
            "auth.jwt_secret must not be empty".to_string(),
        ));
    }

    let repositories = match settings.database.storage {
        StorageBackend::Postgres => {
            let pool =
                create_pool(&settings.database.url, settings.database.max_connections).await?;
            if settings.database.run_migrations {
                run_migrations(&pool).await?;
            }
            RepositorySet::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            RepositorySet::in_memory()
        }
    };

    let inference_gateway = InferenceGatewayFactory::create(&settings.inference)?;
    tracing::info!(provider = inference_gateway.name(), "Inference gateway ready");

    Ok(AppState::new(&settings, repositories, inference_gateway))
}
