pub mod config;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod startup;
pub mod state;

pub use config::{Environment, Settings};
pub use router::create_router;
pub use startup::{StartupError, bootstrap};
pub use state::AppState;
