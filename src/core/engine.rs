use crate::core::{address, request, response};
use crate::domain::model::{Address, Country, ParcelSpec};
use crate::domain::ports::{ExchangeGateway, RateGateway};
use crate::utils::error::Result;

pub struct RateEngine<R: RateGateway, X: ExchangeGateway> {
    rates: R,
    exchange: X,
}

impl<R: RateGateway, X: ExchangeGateway> RateEngine<R, X> {
    pub fn new(rates: R, exchange: X) -> Self {
        Self { rates, exchange }
    }

    /// One quote flow, start to finish. Strictly sequential: the exchange
    /// rate is only fetched once the destination country is known, and only
    /// for non-domestic destinations.
    pub async fn quote(
        &self,
        origin: &Address,
        destination: &Address,
        parcel: ParcelSpec,
        customer_number: &str,
    ) -> Result<String> {
        let country = address::detect_country(&destination.postal_code);
        tracing::debug!(
            "Destination {} classified as {:?}",
            destination.postal_code,
            country
        );

        let request =
            request::build_rate_request(origin, destination, parcel, country, customer_number);

        tracing::info!("Requesting rates for {} -> {}", origin, destination);
        let raw = self.rates.fetch_rates(&request).await?;
        tracing::debug!("Carrier response: {} bytes", raw.len());

        let exchange_rate = match country {
            Country::Ca => 1.0,
            Country::Us => {
                let rate = self.exchange.fetch_rate(country.currency_code()).await?;
                tracing::debug!("Exchange rate CAD -> {}: {}", country.currency_code(), rate);
                rate
            }
        };

        response::interpret_and_render(&raw, exchange_rate, country)
    }
}
