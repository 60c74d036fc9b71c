//! Exchange-rate retrieval subsystem.
//!
//! # Data Flow
//! ```text
//! symbol ("EUR")
//!     → fetcher.rs (build upstream URL, GET)
//!     → json (lenient decode of the body)
//!     → decode.rs (pick the five fields)
//!     → ExchangeRate
//! ```
//!
//! # Design Decisions
//! - Transport and decode failures collapse into one `FetchError` for callers
//! - No retry and no caching: every fetch hits the upstream
//! - The API key reaches the fetcher through `UpstreamConfig`, never the env

pub mod decode;
pub mod error;
pub mod fetcher;
pub mod types;

pub use decode::{decode_exchange_rate, extract_exchange_rate};
pub use error::FetchError;
pub use fetcher::{AlphaVantageClient, RateSource};
pub use types::{render_rates, ExchangeRate};
