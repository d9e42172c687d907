//! # Polygon Live Data Test
//!
//! Loads the layered configuration, installs logging, and calls a handful of
//! endpoints against the real API, printing the raw JSON.
//!
//! Accepts the `PolygonConfig` flags (`--api-key`, `--config-path`, ...).
//! The ticker comes from `POLYGON_TEST_TICKER` (default AAPL).

use lib_polygon::configs::config_polygon::load_config;
use lib_polygon::loggers::logsetup::{init_logging, LogOptions};
use lib_polygon::markets::polygon::{AggregatesParams, ApiCallPolygon, Order, Timespan};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let _guard = init_logging(&LogOptions {
        app_name: "test_polygon_live".to_string(),
        log_level: config.log_level.clone().unwrap_or_else(|| "info".to_string()),
        use_tty: true,
        log_dir: config.log_dir.clone(),
    })?;
    info!("{}", config);

    let api = ApiCallPolygon::from_config(&config)?;
    let ticker = std::env::var("POLYGON_TEST_TICKER").unwrap_or_else(|_| "AAPL".to_string());

    println!("[*] Requesting live data from the Polygon API for {}...", ticker);

    let status = api.market_status().await?;
    println!("\n[market status]\n{}", serde_json::to_string_pretty(&status)?);

    match api.previous_close(&ticker, Some(true)).await {
        Ok(body) => println!("\n[previous close]\n{}", serde_json::to_string_pretty(&body)?),
        Err(e) => error!(error = %e, "previous close failed"),
    }

    let options = AggregatesParams { adjusted: Some(true), sort: Some(Order::Asc), limit: Some(10) };
    match api.aggregates(&ticker, 1, Timespan::Day, "2024-01-02", "2024-01-12", &options).await {
        Ok(body) => println!("\n[aggregates]\n{}", serde_json::to_string_pretty(&body)?),
        Err(e) => {
            eprintln!("\n[ERROR] Aggregates retrieval failed:");
            eprintln!(">>> {}", e);
            // Returning drops the log guard and flushes the file writer.
            return Err(e.into());
        }
    }

    Ok(())
}
