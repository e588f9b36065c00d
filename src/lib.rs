pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CanadaPostClient, ExchangeRateClient};
pub use config::{file::AppConfig, CliArgs};
pub use crate::core::engine::RateEngine;
pub use utils::error::{RateError, Result};
