//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, header layers)
//!     → request.rs (correlation id, query parameters)
//!     → rates.rs (run the pipeline)
//!     → response.rs (JSON array or 500)
//!     → Send to client
//! ```

pub mod rates;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestContext, RequestId};
pub use server::{AppState, HttpServer};
