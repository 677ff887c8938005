use std::sync::Arc;

use txbit_api_client::auth::EnvCredentials;
use txbit_api_client::rest::TxbitRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("TXBIT_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = TxbitRestClient::new();
    let markets = client.get_markets().await?;
    assert!(!markets.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_account_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = TxbitRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let balances = client.get_balances().await?;
    assert!(balances.iter().all(|b| b.available <= b.balance));

    Ok(())
}
