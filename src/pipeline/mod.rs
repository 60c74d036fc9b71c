//! Request pipeline.
//!
//! # States
//! ```text
//! Received → ParamsExtracted → (SingleFetch | FanOutFetch) → Aggregated → Responded
//! ```
//!
//! # Design Decisions
//! - Fan-out spawns one task per symbol and waits for all of them
//! - Output order is the symbol list order, never completion order
//! - Any failed symbol fails the whole request; there are no partial results

pub mod dispatch;
pub mod engine;

pub use dispatch::{Mode, CURRENCY_PARAM};
pub use engine::{PipelineError, RatesPipeline};
