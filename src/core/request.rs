use crate::domain::model::{Address, Country, Destination, ParcelSpec, RateRequest};
use crate::utils::error::Result;
use serde::Serialize;

const RATE_NAMESPACE: &str = "http://www.canadapost.ca/ws/ship/rate-v4";

/// Builds a typed carrier rate request. Pure: the destination block shape is
/// chosen from `country`, everything else is carried through as-is.
pub fn build_rate_request(
    origin: &Address,
    destination: &Address,
    parcel: ParcelSpec,
    country: Country,
    customer_number: &str,
) -> RateRequest {
    let destination = match country {
        Country::Ca => Destination::Domestic {
            postal_code: destination.postal_code.clone(),
        },
        Country::Us => Destination::UnitedStates {
            zip_code: destination.postal_code.clone(),
        },
    };

    RateRequest {
        customer_number: customer_number.to_string(),
        parcel,
        origin_postal_code: origin.postal_code.clone(),
        destination,
    }
}

/// Serializes a rate request to the carrier's mailing-scenario XML. Only the
/// transport adapter calls this; the rest of the crate stays on typed data.
pub fn to_xml(request: &RateRequest) -> Result<String> {
    let scenario = MailingScenario::from(request);
    let body = quick_xml::se::to_string(&scenario)?;
    Ok(format!(r#"<?xml version="1.0" encoding="UTF-8"?>{}"#, body))
}

#[derive(Debug, Serialize)]
#[serde(rename = "mailing-scenario")]
struct MailingScenario {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "customer-number")]
    customer_number: String,
    #[serde(rename = "parcel-characteristics")]
    parcel_characteristics: ParcelCharacteristics,
    #[serde(rename = "origin-postal-code")]
    origin_postal_code: String,
    destination: DestinationBlock,
}

#[derive(Debug, Serialize)]
struct ParcelCharacteristics {
    weight: String,
    dimensions: DimensionsBlock,
}

#[derive(Debug, Serialize)]
struct DimensionsBlock {
    length: String,
    width: String,
    height: String,
}

#[derive(Debug, Serialize)]
struct DestinationBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    domestic: Option<PostalCodeBlock>,
    #[serde(rename = "united-states", skip_serializing_if = "Option::is_none")]
    united_states: Option<ZipCodeBlock>,
}

#[derive(Debug, Serialize)]
struct PostalCodeBlock {
    #[serde(rename = "postal-code")]
    postal_code: String,
}

#[derive(Debug, Serialize)]
struct ZipCodeBlock {
    #[serde(rename = "zip-code")]
    zip_code: String,
}

impl From<&RateRequest> for MailingScenario {
    fn from(request: &RateRequest) -> Self {
        let destination = match &request.destination {
            Destination::Domestic { postal_code } => DestinationBlock {
                domestic: Some(PostalCodeBlock {
                    postal_code: postal_code.clone(),
                }),
                united_states: None,
            },
            Destination::UnitedStates { zip_code } => DestinationBlock {
                domestic: None,
                united_states: Some(ZipCodeBlock {
                    zip_code: zip_code.clone(),
                }),
            },
        };

        Self {
            xmlns: RATE_NAMESPACE,
            customer_number: request.customer_number.clone(),
            parcel_characteristics: ParcelCharacteristics {
                weight: format!("{:.3}", request.parcel.weight_kg),
                dimensions: DimensionsBlock {
                    length: format!("{:.1}", request.parcel.length_cm),
                    width: format!("{:.1}", request.parcel.width_cm),
                    height: format!("{:.1}", request.parcel.height_cm),
                },
            },
            origin_postal_code: request.origin_postal_code.clone(),
            destination,
        }
    }
}
