use crate::core::table::{self, Align, Column};
use crate::domain::model::{Country, RateQuote};
use crate::utils::error::{RateError, Result};
use serde::Deserialize;

/// Fixed tax-equivalent surcharge applied to every base due amount.
pub const TAX_SURCHARGE: f64 = 1.13;

pub const EMPTY_RESPONSE_NOTICE: &str = "No response from the Canada Post API.";

const NOT_AVAILABLE: &str = "n/a";

const COLUMNS: [Column; 6] = [
    Column::new("Service Name", 22, Align::Left),
    Column::new("Cost CAD$", 12, Align::Right),
    Column::new("Cost USD$", 12, Align::Right),
    Column::wrapped("Days", 7, Align::Center, "    |", "|    "),
    Column::wrapped("Delivery Date", 12, Align::Left, " ", ""),
    Column::wrapped("Liability Coverage", 18, Align::Left, "  ", ""),
];

#[derive(Debug, Deserialize)]
struct PriceQuotes {
    #[serde(rename = "price-quote", default)]
    quotes: Vec<PriceQuote>,
}

#[derive(Debug, Deserialize)]
struct PriceQuote {
    #[serde(rename = "service-name")]
    service_name: String,
    #[serde(rename = "price-details")]
    price_details: PriceDetails,
    #[serde(rename = "service-standard")]
    service_standard: Option<ServiceStandard>,
}

#[derive(Debug, Deserialize)]
struct PriceDetails {
    // Kept as text so a malformed amount surfaces as a descriptive error
    // instead of a generic deserializer failure.
    due: String,
}

#[derive(Debug, Deserialize)]
struct ServiceStandard {
    #[serde(rename = "expected-transit-time")]
    expected_transit_time: Option<String>,
    #[serde(rename = "expected-delivery-date")]
    expected_delivery_date: Option<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parses the carrier XML into normalized quotes, cheapest first. The base
/// cost carries the fixed 13% surcharge; the secondary cost only exists for
/// non-domestic destinations.
pub fn interpret(raw: &str, exchange_rate: f64, destination: Country) -> Result<Vec<RateQuote>> {
    let parsed: PriceQuotes = quick_xml::de::from_str(raw)?;

    let mut quotes = Vec::with_capacity(parsed.quotes.len());
    for quote in parsed.quotes {
        let due: f64 = quote
            .price_details
            .due
            .trim()
            .parse()
            .map_err(|_| RateError::MalformedAmount {
                value: quote.price_details.due.clone(),
            })?;

        let cost_base = round2(due * TAX_SURCHARGE);
        let cost_secondary = match destination {
            Country::Ca => None,
            Country::Us => Some(round2(cost_base * exchange_rate)),
        };

        let (transit_days, delivery_date) = match quote.service_standard {
            Some(standard) => (
                standard.expected_transit_time,
                standard.expected_delivery_date,
            ),
            None => (None, None),
        };

        quotes.push(RateQuote {
            service_name: quote.service_name,
            cost_base,
            cost_secondary,
            transit_days,
            delivery_date,
        });
    }

    // Cheapest first; the sort is stable so ties keep carrier order.
    quotes.sort_by(|a, b| a.cost_base.total_cmp(&b.cost_base));
    Ok(quotes)
}

/// Renders the comparison table for already-interpreted quotes.
pub fn render_table(quotes: &[RateQuote]) -> String {
    let rows: Vec<Vec<String>> = quotes
        .iter()
        .map(|quote| {
            vec![
                quote.service_name.clone(),
                format!("{:.2}", quote.cost_base),
                quote
                    .cost_secondary
                    .map(|cost| format!("{:.2}", cost))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                quote
                    .transit_days
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                quote
                    .delivery_date
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                String::new(),
            ]
        })
        .collect();

    table::render(&COLUMNS, &rows)
}

/// Full interpretation pass for one carrier response. An empty body is a
/// valid outcome and short-circuits to a notice; everything else either
/// renders completely or fails hard.
pub fn interpret_and_render(
    raw: &str,
    exchange_rate: f64,
    destination: Country,
) -> Result<String> {
    if raw.trim().is_empty() {
        return Ok(EMPTY_RESPONSE_NOTICE.to_string());
    }

    let quotes = interpret(raw, exchange_rate, destination)?;
    Ok(render_table(&quotes))
}
