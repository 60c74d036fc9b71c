//! Single vs. fan-out dispatch.

use crate::http::request::RequestContext;

/// Query parameter selecting a single currency.
pub const CURRENCY_PARAM: &str = "currency";

/// Retrieval mode chosen from the request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One upper-cased symbol requested explicitly.
    Single(String),
    /// Every configured symbol.
    FanOut,
}

impl Mode {
    pub fn from_context(ctx: &RequestContext) -> Self {
        match ctx.param(CURRENCY_PARAM) {
            Some(currency) => Mode::Single(currency.to_uppercase()),
            None => Mode::FanOut,
        }
    }

    /// Label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Single(_) => "single",
            Mode::FanOut => "fan_out",
        }
    }
}
