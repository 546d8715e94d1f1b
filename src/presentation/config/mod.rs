mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AuthSettings, DEFAULT_GRADIO_SPACE, DatabaseSettings, InferenceProvider, InferenceSettings,
    LoggingSettings, MailSettings, ServerSettings, Settings, StorageBackend,
};
