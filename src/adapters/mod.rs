// Adapters layer: concrete clients for the carrier rate API and the public
// exchange-rate API. Everything HTTP lives here; the core only sees the
// gateway traits.

use crate::core::request;
use crate::domain::model::RateRequest;
use crate::domain::ports::{ExchangeGateway, RateGateway};
use crate::utils::error::{RateError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::collections::HashMap;

pub const RATE_CONTENT_TYPE: &str = "application/vnd.cpc.ship.rate-v4+xml";

pub struct CanadaPostClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_secret: String,
}

impl CanadaPostClient {
    pub fn new(endpoint: String, api_key: String, api_secret: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            api_secret,
        }
    }
}

#[async_trait]
impl RateGateway for CanadaPostClient {
    async fn fetch_rates(&self, request: &RateRequest) -> Result<String> {
        let body = request::to_xml(request)?;
        tracing::debug!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .header(CONTENT_TYPE, RATE_CONTENT_TYPE)
            .header(ACCEPT, RATE_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Rate API response status: {}", status);
        let text = response.text().await?;

        if !status.is_success() {
            return Err(RateError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

pub struct ExchangeRateClient {
    client: Client,
    endpoint: String,
}

impl ExchangeRateClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ExchangeResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl ExchangeGateway for ExchangeRateClient {
    async fn fetch_rate(&self, currency: &str) -> Result<f64> {
        tracing::debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(RateError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ExchangeResponse = response.json().await?;
        parsed
            .rates
            .get(currency)
            .copied()
            .ok_or_else(|| RateError::MissingRate {
                currency: currency.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Destination, ParcelSpec};
    use httpmock::prelude::*;

    fn sample_request() -> RateRequest {
        RateRequest {
            customer_number: "0001234567".to_string(),
            parcel: ParcelSpec::from_cli(20.0, 30.0, 10.0, 1500.0),
            origin_postal_code: "K1A0B1".to_string(),
            destination: Destination::Domestic {
                postal_code: "A1A1A1".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_fetch_rates_posts_xml_with_auth() {
        let server = MockServer::start();

        let rate_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/rs/ship/price")
                .header("content-type", RATE_CONTENT_TYPE)
                .header("accept", RATE_CONTENT_TYPE)
                .header_exists("authorization")
                .body_contains("<origin-postal-code>K1A0B1</origin-postal-code>");
            then.status(200)
                .body("<price-quotes></price-quotes>");
        });

        let client = CanadaPostClient::new(
            server.url("/rs/ship/price"),
            "key".to_string(),
            "secret".to_string(),
        );

        let body = client.fetch_rates(&sample_request()).await.unwrap();

        rate_mock.assert();
        assert_eq!(body, "<price-quotes></price-quotes>");
    }

    #[tokio::test]
    async fn test_fetch_rates_surfaces_http_failure() {
        let server = MockServer::start();

        let rate_mock = server.mock(|when, then| {
            when.method(POST).path("/rs/ship/price");
            then.status(401).body("invalid credentials");
        });

        let client = CanadaPostClient::new(
            server.url("/rs/ship/price"),
            "key".to_string(),
            "secret".to_string(),
        );

        let err = client.fetch_rates(&sample_request()).await.unwrap_err();

        rate_mock.assert();
        match err {
            RateError::Transport { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid credentials");
            }
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_exchange_rate() {
        let server = MockServer::start();

        let fx_mock = server.mock(|when, then| {
            when.method(GET).path("/v4/latest/CAD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "base": "CAD",
                    "rates": { "USD": 0.75, "EUR": 0.68 }
                }));
        });

        let client = ExchangeRateClient::new(server.url("/v4/latest/CAD"));
        let rate = client.fetch_rate("USD").await.unwrap();

        fx_mock.assert();
        assert_eq!(rate, 0.75);
    }

    #[tokio::test]
    async fn test_fetch_exchange_rate_missing_currency() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/v4/latest/CAD");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "rates": { "EUR": 0.68 } }));
        });

        let client = ExchangeRateClient::new(server.url("/v4/latest/CAD"));
        let err = client.fetch_rate("USD").await.unwrap_err();

        match err {
            RateError::MissingRate { currency } => assert_eq!(currency, "USD"),
            other => panic!("expected MissingRate, got {:?}", other),
        }
    }
}
