use clap::Parser;
use shiprate::core::address;
use shiprate::domain::model::ParcelSpec;
use shiprate::utils::{logger, validation::Validate};
use shiprate::{AppConfig, CanadaPostClient, CliArgs, ExchangeRateClient, RateEngine};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting shiprate CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        tracing::error!("Argument validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let config_path = args.config.clone().unwrap_or_else(AppConfig::default_path);
    let config = match AppConfig::load_or_bootstrap(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Could not load {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("❌ {} (edit {})", e, config_path.display());
        std::process::exit(1);
    }

    let destination = match address::parse_address(&args.to) {
        Ok(address) => address,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let origin_raw = args.from.clone().unwrap_or_else(|| config.origin_address());
    let origin = match address::parse_address(&origin_raw) {
        Ok(address) => address,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let parcel = ParcelSpec::from_cli(args.width, args.length, args.height, args.mass);

    let rates = CanadaPostClient::new(
        config.rate_endpoint.clone(),
        config.api_key.clone(),
        config.api_secret.clone(),
    );
    let exchange = ExchangeRateClient::new(config.exchange_endpoint.clone());
    let engine = RateEngine::new(rates, exchange);

    match engine
        .quote(&origin, &destination, parcel, &config.customer_number)
        .await
    {
        Ok(table) => {
            tracing::info!("✅ Rate lookup completed");
            println!("{}", table);
        }
        Err(e) => {
            tracing::error!("❌ Rate lookup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
