/*
[INPUT]:  API_KEY environment variable
[OUTPUT]: Account profile, balances and withdrawal limit
[POS]:    Examples - authenticated account queries
[UPDATE]: When account endpoints change
*/

use std::time::Duration;

use swyftx_client::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Swyftx Account Example ===\n");

    let api_key = std::env::var("API_KEY")
        .map_err(|_| SwyftxError::Config("API_KEY must be set".to_string()))?;

    let client = SwyftxClient::new(api_key, None).await?;
    // Every call below shares one 10s deadline
    let client = client.with_timeout(Duration::from_secs(10));

    let profile = client.account().profile().await?;
    println!("✓ Signed in as {}", profile.email);

    for balance in client.account().balances().await? {
        println!("  asset {}: {}", balance.asset_id, balance.available_balance);
    }

    let limit = client.limit().withdrawal().await?;
    println!("\n✓ Withdrawal limit {} ({} remaining)", limit.limit, limit.remaining);

    let scope = client.auth().scope().await?;
    println!("✓ Key scope: {:?}", scope);

    Ok(())
}
