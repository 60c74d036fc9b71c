//! Retrieval and aggregation of rates for one request.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::http::request::RequestContext;
use crate::observability::metrics;
use crate::pipeline::dispatch::Mode;
use crate::rates::{ExchangeRate, FetchError, RateSource};

/// Failure of a whole request.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Fetch for {symbol} failed: {source}")]
    Fetch {
        symbol: String,
        #[source]
        source: FetchError,
    },
}

/// Runs the single or fan-out retrieval for a request.
#[derive(Clone)]
pub struct RatesPipeline {
    source: Arc<dyn RateSource>,
    symbols: Arc<[String]>,
}

impl RatesPipeline {
    /// `symbols` is the fan-out list, in response order.
    pub fn new(source: Arc<dyn RateSource>, symbols: Vec<String>) -> Self {
        Self {
            source,
            symbols: symbols.into(),
        }
    }

    /// Fetch the rates `mode` asks for.
    pub async fn run(
        &self,
        ctx: &RequestContext,
        mode: Mode,
    ) -> Result<Vec<ExchangeRate>, PipelineError> {
        tracing::debug!(request_id = %ctx.id(), mode = mode.label(), "Dispatching");

        match mode {
            Mode::Single(symbol) => self.fetch_one(symbol).await.map(|rate| vec![rate]),
            Mode::FanOut => self.fan_out(&self.symbols).await,
        }
    }

    async fn fetch_one(&self, symbol: String) -> Result<ExchangeRate, PipelineError> {
        let label = metrics::symbol_label(&symbol, &self.symbols);
        recorded_fetch(Arc::clone(&self.source), symbol.clone(), label)
            .await
            .map_err(|source| PipelineError::Fetch { symbol, source })
    }

    /// Fetch every symbol concurrently.
    ///
    /// Waits for all fetches before returning. Results land in the slot of
    /// their symbol; on failure the first failed symbol in list order is
    /// reported.
    pub async fn fan_out(&self, symbols: &[String]) -> Result<Vec<ExchangeRate>, PipelineError> {
        let handles: Vec<_> = symbols
            .iter()
            .map(|symbol| {
                let label = metrics::symbol_label(symbol, &self.symbols);
                tokio::spawn(recorded_fetch(
                    Arc::clone(&self.source),
                    symbol.clone(),
                    label,
                ))
            })
            .collect();

        let mut rates = Vec::with_capacity(symbols.len());
        let mut failure = None;

        for (symbol, handle) in symbols.iter().zip(handles) {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(FetchError::TaskFailed(e.to_string())),
            };

            match result {
                Ok(rate) => rates.push(rate),
                Err(source) => {
                    if failure.is_none() {
                        failure = Some(PipelineError::Fetch {
                            symbol: symbol.clone(),
                            source,
                        });
                    }
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(rates),
        }
    }
}

async fn recorded_fetch(
    source: Arc<dyn RateSource>,
    symbol: String,
    label: String,
) -> Result<ExchangeRate, FetchError> {
    let start = Instant::now();
    let result = source.fetch(&symbol).await;
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    metrics::record_fetch(label, outcome, start);
    result
}
