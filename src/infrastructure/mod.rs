pub mod auth;
pub mod llm;
pub mod mail;
pub mod observability;
pub mod persistence;
