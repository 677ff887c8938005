//! Public REST API endpoints (no authentication required).

use serde::Serialize;

use crate::error::TxbitError;
use crate::rest::TxbitRestClient;
use crate::rest::client::NO_PARAMS;
use crate::rest::endpoints::{EndpointGroup, public};
use crate::types::common::{
    Currency, Market, MarketSummary, OrderBook, Ticker, TradeHistoryEntry,
};

/// Request parameters for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBookRequest {
    market: String,
    #[serde(rename = "type")]
    book_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<u32>,
}

impl OrderBookRequest {
    /// Request both sides of the book for `market`.
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            book_type: "both",
            depth: None,
        }
    }

    /// Limit the number of entries returned per side.
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }
}

impl TxbitRestClient {
    /// List every market pair on the exchange.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use txbit_api_client::rest::TxbitRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TxbitRestClient::new();
    ///     for market in client.get_markets().await? {
    ///         println!("{} active: {}", market.market_name, market.is_active);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_markets(&self) -> Result<Vec<Market>, TxbitError> {
        self.get(EndpointGroup::Public, public::GET_MARKETS, NO_PARAMS)
            .await
    }

    /// List every currency on the exchange with its withdrawal fee and
    /// confirmation requirement.
    pub async fn get_currencies(&self) -> Result<Vec<Currency>, TxbitError> {
        self.get(EndpointGroup::Public, public::GET_CURRENCIES, NO_PARAMS)
            .await
    }

    /// Get the current bid, ask and last price for a market.
    ///
    /// # Arguments
    ///
    /// * `market` - Pair name, e.g. "XLR/BTC".
    pub async fn get_ticker(&self, market: &str) -> Result<Ticker, TxbitError> {
        self.get(
            EndpointGroup::Public,
            public::GET_TICKER,
            &[("market", market)],
        )
        .await
    }

    /// Get 24-hour summaries for every market.
    pub async fn get_market_summaries(&self) -> Result<Vec<MarketSummary>, TxbitError> {
        self.get(
            EndpointGroup::Public,
            public::GET_MARKET_SUMMARIES,
            NO_PARAMS,
        )
        .await
    }

    /// Get the 24-hour summary for one market.
    ///
    /// # Arguments
    ///
    /// * `market` - Pair name, e.g. "ETH/BTC".
    pub async fn get_market_summary(&self, market: &str) -> Result<MarketSummary, TxbitError> {
        self.get(
            EndpointGroup::Public,
            public::GET_MARKET_SUMMARY,
            &[("market", market)],
        )
        .await
    }

    /// Get both sides of a market's order book.
    ///
    /// Single-sided books are available through the generic surface with
    /// `type=buy` or `type=sell`; the exchange returns a bare array there
    /// rather than the two-sided shape.
    ///
    /// # Arguments
    ///
    /// * `request` - Order book request parameters.
    pub async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, TxbitError> {
        self.get(EndpointGroup::Public, public::GET_ORDER_BOOK, request)
            .await
    }

    /// Get a market's most recent trades.
    ///
    /// # Arguments
    ///
    /// * `market` - Pair name, e.g. "XLR/BTC".
    pub async fn get_market_history(
        &self,
        market: &str,
    ) -> Result<Vec<TradeHistoryEntry>, TxbitError> {
        self.get(
            EndpointGroup::Public,
            public::GET_MARKET_HISTORY,
            &[("market", market)],
        )
        .await
    }

    /// Get the exchange's system status.
    ///
    /// The shape of this payload is not uniformly documented, so it is
    /// returned as raw JSON.
    pub async fn get_system_status(&self) -> Result<serde_json::Value, TxbitError> {
        self.get(EndpointGroup::Public, public::GET_SYSTEM_STATUS, NO_PARAMS)
            .await
    }
}
