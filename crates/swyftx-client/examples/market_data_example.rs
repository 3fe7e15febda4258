/*
[INPUT]:  API_KEY environment variable and an asset code (e.g., "BTC")
[OUTPUT]: Market data (live rate, asset info, chart settings)
[POS]:    Examples - market data queries
[UPDATE]: When adding new market data endpoints
*/

use swyftx_client::*;
use tracing_subscriber::EnvFilter;

/// Example: Query market data
///
/// Run with `RUST_LOG=swyftx_client=debug` to see each request.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Swyftx Market Data Example ===\n");

    let api_key = match std::env::var("API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("API_KEY must be set");
            return;
        }
    };

    let client = match SwyftxClient::new(api_key, None).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created and access token obtained\n");

    match client.version().await {
        Ok(version) => println!("✓ API version: {}", version),
        Err(e) => println!("✗ Error: {}", e),
    }

    let asset = "BTC";

    println!("\nQuerying basic info for {}...", asset);
    match client.market().basic_info(asset).await {
        Ok(info) => println!("✓ Buy {} / Sell {}", info.buy, info.sell),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying live rates...");
    match client.market().live_rates_by_asset(1).await {
        Ok(rates) => println!("✓ {} rates", rates.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying chart settings...");
    match client.chart().settings().await {
        Ok(settings) => println!("✓ Chart settings: {:?}", settings),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n=== Example Complete ===");
}
