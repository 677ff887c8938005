//! Market REST API endpoints (signed, trade permission required).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::TxbitError;
use crate::rest::TxbitRestClient;
use crate::rest::endpoints::{EndpointGroup, market};
use crate::types::common::{OpenOrder, OrderUuid};

/// Request parameters for placing a limit order.
#[derive(Debug, Clone, Serialize)]
pub struct LimitOrderRequest {
    market: String,
    quantity: Decimal,
    rate: Decimal,
}

impl LimitOrderRequest {
    /// Create a limit order request.
    ///
    /// # Arguments
    ///
    /// * `market` - Pair name, e.g. "XLR/BTC".
    /// * `quantity` - Amount of the market currency to trade.
    /// * `rate` - Limit price in the base currency.
    pub fn new(market: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            market: market.into(),
            quantity,
            rate,
        }
    }
}

impl TxbitRestClient {
    /// Place a limit buy order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use rust_decimal::Decimal;
    /// use txbit_api_client::auth::StaticCredentials;
    /// use txbit_api_client::rest::market::LimitOrderRequest;
    /// use txbit_api_client::rest::TxbitRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TxbitRestClient::builder()
    ///         .credentials(Arc::new(StaticCredentials::new("api_key", "api_secret")))
    ///         .build();
    ///     let request = LimitOrderRequest::new(
    ///         "XLR/BTC",
    ///         Decimal::new(100, 0),
    ///         Decimal::new(1, 5),
    ///     );
    ///     let placed = client.buy_limit(&request).await?;
    ///     println!("Order uuid: {}", placed.uuid);
    ///     Ok(())
    /// }
    /// ```
    pub async fn buy_limit(&self, request: &LimitOrderRequest) -> Result<OrderUuid, TxbitError> {
        self.get(EndpointGroup::Market, market::BUY_LIMIT, request)
            .await
    }

    /// Place a limit sell order.
    ///
    /// # Arguments
    ///
    /// * `request` - Market, quantity and rate of the order.
    pub async fn sell_limit(&self, request: &LimitOrderRequest) -> Result<OrderUuid, TxbitError> {
        self.get(EndpointGroup::Market, market::SELL_LIMIT, request)
            .await
    }

    /// Cancel an open order by uuid.
    ///
    /// The exchange returns no payload for a successful cancel.
    pub async fn cancel_order(&self, uuid: &str) -> Result<(), TxbitError> {
        self.get(EndpointGroup::Market, market::CANCEL, &[("uuid", uuid)])
            .await
    }

    /// List the account's open orders, optionally for one market only.
    ///
    /// # Arguments
    ///
    /// * `market` - Pair name to filter by, or `None` for all markets.
    pub async fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<OpenOrder>, TxbitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            market: Option<&'a str>,
        }
        self.get(
            EndpointGroup::Market,
            market::GET_OPEN_ORDERS,
            &Params { market },
        )
        .await
    }
}
