use crate::domain::model::RateRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Carrier rate-quote API. Returns the raw response body so the interpreter
/// owns all parsing decisions, including the empty-body case.
#[async_trait]
pub trait RateGateway: Send + Sync {
    async fn fetch_rates(&self, request: &RateRequest) -> Result<String>;
}

/// Currency exchange API. Returns the value of one unit of the base currency
/// expressed in `currency`.
#[async_trait]
pub trait ExchangeGateway: Send + Sync {
    async fn fetch_rate(&self, currency: &str) -> Result<f64>;
}
