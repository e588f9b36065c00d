use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured mailing address. Built only by `core::address::parse_address`;
/// the postal code is normalized (trimmed, internal spaces removed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street, self.city, self.region, self.postal_code
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParcelSpec {
    pub width_cm: f64,
    pub length_cm: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl ParcelSpec {
    /// The CLI collects mass in grams; the carrier wants kilograms.
    pub fn from_cli(width_cm: f64, length_cm: f64, height_cm: f64, mass_grams: f64) -> Self {
        Self {
            width_cm,
            length_cm,
            height_cm,
            weight_kg: mass_grams / 1000.0,
        }
    }
}

/// Destination country, derived from the postal code shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Ca,
    Us,
}

impl Country {
    pub fn currency_code(&self) -> &'static str {
        match self {
            Country::Ca => "CAD",
            Country::Us => "USD",
        }
    }
}

/// One normalized service quote, ready for rendering. `None` fields render
/// as the literal `n/a`; `cost_secondary` is `Some` only for non-domestic
/// destinations.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub service_name: String,
    pub cost_base: f64,
    pub cost_secondary: Option<f64>,
    pub transit_days: Option<String>,
    pub delivery_date: Option<String>,
}

/// A carrier rate request. Typed end to end; XML only exists at the
/// transport boundary (`core::request::to_xml`).
#[derive(Debug, Clone, PartialEq)]
pub struct RateRequest {
    pub customer_number: String,
    pub parcel: ParcelSpec,
    pub origin_postal_code: String,
    pub destination: Destination,
}

/// The destination block shape depends on the destination country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Domestic { postal_code: String },
    UnitedStates { zip_code: String },
}
