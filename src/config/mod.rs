//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, API_KEY overlay)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc with the fetcher and the server
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never mutated afterwards
//! - All fields have defaults to allow minimal configs
//! - The API key is the only value taken from the environment, and only here

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, API_KEY_ENV_VAR};
pub use schema::{
    GatewayConfig, ObservabilityConfig, PipelineConfig, ServerConfig, UpstreamConfig,
};
