use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use txbit_api_client::auth::{Credentials, StaticCredentials, sign_url};
use txbit_api_client::error::TxbitError;
use txbit_api_client::rest::TxbitRestClient;
use txbit_api_client::rest::account::WithdrawRequest;
use txbit_api_client::rest::market::LimitOrderRequest;

const API_KEY: &str = "test_key";
const API_SECRET: &str = "test_secret";

fn build_client(server: &MockServer) -> TxbitRestClient {
    let credentials = Arc::new(StaticCredentials::new(API_KEY, API_SECRET));
    TxbitRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

fn envelope(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "message": "", "result": result })
}

/// Pull a query parameter's single value out of a received request.
fn query_value(request: &wiremock::Request, key: &str) -> String {
    let values: Vec<String> = request
        .url
        .query_pairs()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(values.len(), 1, "expected exactly one `{key}` parameter");
    values.into_iter().next().unwrap()
}

#[tokio::test]
async fn test_signed_request_carries_apikey_nonce_and_signature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getbalances"))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.get_balances().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    assert_eq!(query_value(request, "apikey"), API_KEY);

    // The nonce must be a millisecond timestamp close to now.
    let nonce: u64 = query_value(request, "nonce").parse().unwrap();
    let now = now_millis();
    assert!(nonce > now - 60_000 && nonce < now + 60_000);

    // Recomputing the signature from the URL the server actually received
    // must reproduce the apisign header exactly.
    let signature = request
        .headers
        .get("apisign")
        .expect("apisign header missing")
        .to_str()
        .unwrap();
    let credentials = Credentials::new(API_KEY, API_SECRET);
    let expected = sign_url(&credentials, request.url.as_str()).unwrap();
    assert_eq!(signature, expected);
    assert_eq!(signature.len(), 128);
}

#[tokio::test]
async fn test_signature_covers_caller_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/buylimit"))
        .and(query_param("market", "XLR/BTC"))
        .and(query_param("quantity", "100"))
        .and(query_param("rate", "0.00001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "uuid": "614c34e4-8d71-11e3-94b5-425861b86ab6"
        }))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = LimitOrderRequest::new("XLR/BTC", Decimal::new(100, 0), Decimal::new(1, 5));
    let placed = client.buy_limit(&request).await.unwrap();
    assert_eq!(placed.uuid, "614c34e4-8d71-11e3-94b5-425861b86ab6");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    // Caller params come before the auth params so the signed URL covers
    // all of them.
    let url = request.url.as_str();
    assert!(url.contains("market="));
    let credentials = Credentials::new(API_KEY, API_SECRET);
    let expected = sign_url(&credentials, url).unwrap();
    assert_eq!(
        request.headers.get("apisign").unwrap().to_str().unwrap(),
        expected
    );
}

#[tokio::test]
async fn test_concurrent_calls_draw_distinct_nonces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getbalances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([]))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let (a, b) = tokio::join!(client.get_balances(), client.get_balances());
    a.unwrap();
    b.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let nonce_a: u64 = query_value(&requests[0], "nonce").parse().unwrap();
    let nonce_b: u64 = query_value(&requests[1], "nonce").parse().unwrap();
    assert_ne!(nonce_a, nonce_b);

    // Each request must carry its own valid signature.
    let credentials = Credentials::new(API_KEY, API_SECRET);
    for request in &requests {
        let expected = sign_url(&credentials, request.url.as_str()).unwrap();
        assert_eq!(
            request.headers.get("apisign").unwrap().to_str().unwrap(),
            expected
        );
    }
}

#[tokio::test]
async fn test_missing_credentials_fails_before_any_request() {
    let server = MockServer::start().await;
    let client = TxbitRestClient::builder().base_url(server.uri()).build();

    let err = client.get_balances().await.unwrap_err();
    assert!(matches!(err, TxbitError::MissingCredentials));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_cancel_order_accepts_null_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/cancel"))
        .and(query_param("uuid", "614c34e4-8d71-11e3-94b5-425861b86ab6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "",
            "result": null
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .cancel_order("614c34e4-8d71-11e3-94b5-425861b86ab6")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_balance_parsing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getbalance"))
        .and(query_param("currency", "ETH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "Currency": "ETH",
            "Balance": 4.21549076,
            "Available": 4.21549076,
            "Pending": 0,
            "CryptoAddress": "0x0ff22a22ab6b95b1b07ba698bd8ee95660e2f4ed"
        }))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.get_balance("ETH").await.unwrap();
    assert_eq!(balance.currency, "ETH");
    assert_eq!(balance.balance, balance.available);
    assert!(balance.crypto_address.is_some());
}

#[tokio::test]
async fn test_get_open_orders_all_markets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/getopenorders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!([{
            "Uuid": null,
            "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
            "Exchange": "XLR/BTC",
            "OrderType": "LIMIT_SELL",
            "Quantity": 5.0,
            "QuantityRemaining": 5.0,
            "Limit": 0.00001,
            "CommissionPaid": 0,
            "Price": 0,
            "PricePerUnit": null,
            "Opened": "2019-10-21T14:02:52.11",
            "Closed": null,
            "CancelInitiated": false,
            "ImmediateOrCancel": false,
            "IsConditional": false,
            "Condition": null,
            "ConditionTarget": null
        }]))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.get_open_orders(None).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert!(orders[0].closed.is_none());

    // No market filter requested, so the query must only hold auth params.
    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    assert_eq!(keys, vec!["apikey", "nonce"]);
}

#[tokio::test]
async fn test_withdraw_with_payment_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/withdraw"))
        .and(query_param("currency", "XLR"))
        .and(query_param("quantity", "25.5"))
        .and(query_param("address", "SNpRboTnBJYFYfjipQdBUEMGDqnWHpxuPV"))
        .and(query_param("paymentid", "memo-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "uuid": "68b5a16c-92de-11e3-ba3b-425861b86ab6"
        }))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = WithdrawRequest::new(
        "XLR",
        Decimal::new(255, 1),
        "SNpRboTnBJYFYfjipQdBUEMGDqnWHpxuPV",
    )
    .payment_id("memo-1");
    let withdrawal = client.withdraw(&request).await.unwrap();
    assert_eq!(withdrawal.uuid, "68b5a16c-92de-11e3-ba3b-425861b86ab6");
}

#[tokio::test]
async fn test_signed_api_error_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/selllimit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "INSUFFICIENT_FUNDS",
            "result": null
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = LimitOrderRequest::new("XLR/BTC", Decimal::new(1_000_000, 0), Decimal::new(1, 2));
    let err = client.sell_limit(&request).await.unwrap_err();
    match err {
        TxbitError::Api(api) => assert!(api.is_insufficient_funds()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_order_parses_full_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getorder"))
        .and(query_param("uuid", "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(serde_json::json!({
            "AccountId": null,
            "OrderUuid": "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1",
            "Exchange": "XLR/BTC",
            "Type": "LIMIT_BUY",
            "Quantity": 100.0,
            "QuantityRemaining": 100.0,
            "Limit": 0.00001,
            "Reserved": 0.001,
            "ReserveRemaining": 0.001,
            "CommissionReserved": 0.0000025,
            "CommissionReserveRemaining": 0.0000025,
            "CommissionPaid": 0,
            "Price": 0,
            "PricePerUnit": null,
            "Opened": "2019-10-21T14:02:52.11",
            "Closed": null,
            "IsOpen": true,
            "Sentinel": "6c454604-22e2-4fb4-892e-179eede20972",
            "CancelInitiated": false,
            "ImmediateOrCancel": false,
            "IsConditional": false,
            "Condition": "NONE",
            "ConditionTarget": null
        }))))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client
        .get_order("0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1")
        .await
        .unwrap();
    assert!(order.is_open);
    assert_eq!(order.order_type, txbit_api_client::OrderType::LimitBuy);
    assert_eq!(order.opened.year(), 2019);
}
