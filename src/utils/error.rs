use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("could not parse address '{input}', expected format: Street, City, Province/State, PostalCode")]
    AddressFormat { input: String },

    #[error("missing configuration key: {key}")]
    MissingConfig { key: String },

    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed with status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("could not parse carrier response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("could not serialize rate request: {0}")]
    XmlWrite(#[from] quick_xml::SeError),

    #[error("malformed amount in carrier response: '{value}'")]
    MalformedAmount { value: String },

    #[error("exchange response has no rate for {currency}")]
    MissingRate { currency: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RateError>;
