pub mod address;
pub mod engine;
pub mod request;
pub mod response;
pub mod table;

pub use crate::domain::model::{Address, Country, ParcelSpec, RateQuote};
pub use crate::utils::error::Result;
