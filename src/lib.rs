//! Currency exchange-rate gateway library.

pub mod config;
pub mod http;
pub mod json;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;
pub mod rates;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use rates::{ExchangeRate, RateSource};
