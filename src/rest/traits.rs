//! Trait definition for the Txbit REST API client.
//!
//! This module provides the `TxbitClient` trait which abstracts the typed
//! REST API operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use txbit_api_client::rest::{TxbitClient, TxbitRestClient};
//!
//! async fn best_bid<C: TxbitClient>(client: &C) -> Result<(), txbit_api_client::TxbitError> {
//!     let ticker = client.get_ticker("XLR/BTC").await?;
//!     println!("Bid: {}", ticker.bid);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::TxbitError;
use crate::rest::TxbitRestClient;
use crate::rest::account::WithdrawRequest;
use crate::rest::market::LimitOrderRequest;
use crate::rest::public::OrderBookRequest;
use crate::types::common::{
    Balance, Currency, DepositAddress, DepositHistoryEntry, Market, MarketSummary, OpenOrder,
    Order, OrderBook, OrderHistoryEntry, OrderUuid, Ticker, TradeHistoryEntry,
    WithdrawalHistoryEntry,
};

/// Trait defining the typed Txbit REST API operations.
///
/// All methods are async and return `Result<T, TxbitError>`.
pub trait TxbitClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// List every market pair on the exchange.
    fn get_markets(&self) -> impl Future<Output = Result<Vec<Market>, TxbitError>> + Send;

    /// List every currency on the exchange.
    fn get_currencies(&self) -> impl Future<Output = Result<Vec<Currency>, TxbitError>> + Send;

    /// Get the current bid, ask and last price for a market.
    fn get_ticker(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Ticker, TxbitError>> + Send;

    /// Get 24-hour summaries for every market.
    fn get_market_summaries(
        &self,
    ) -> impl Future<Output = Result<Vec<MarketSummary>, TxbitError>> + Send;

    /// Get the 24-hour summary for one market.
    fn get_market_summary(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<MarketSummary, TxbitError>> + Send;

    /// Get both sides of a market's order book.
    fn get_order_book(
        &self,
        request: &OrderBookRequest,
    ) -> impl Future<Output = Result<OrderBook, TxbitError>> + Send;

    /// Get a market's most recent trades.
    fn get_market_history(
        &self,
        market: &str,
    ) -> impl Future<Output = Result<Vec<TradeHistoryEntry>, TxbitError>> + Send;

    /// Get the exchange's system status.
    fn get_system_status(
        &self,
    ) -> impl Future<Output = Result<serde_json::Value, TxbitError>> + Send;

    // ========== Market Endpoints ==========

    /// Place a limit buy order.
    fn buy_limit(
        &self,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<OrderUuid, TxbitError>> + Send;

    /// Place a limit sell order.
    fn sell_limit(
        &self,
        request: &LimitOrderRequest,
    ) -> impl Future<Output = Result<OrderUuid, TxbitError>> + Send;

    /// Cancel an open order by uuid.
    fn cancel_order(&self, uuid: &str) -> impl Future<Output = Result<(), TxbitError>> + Send;

    /// List the account's open orders.
    fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Vec<OpenOrder>, TxbitError>> + Send;

    // ========== Account Endpoints ==========

    /// Get the balance of every currency in the account.
    fn get_balances(&self) -> impl Future<Output = Result<Vec<Balance>, TxbitError>> + Send;

    /// Get the balance of one currency.
    fn get_balance(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Balance, TxbitError>> + Send;

    /// Get or generate the deposit address for a currency.
    fn get_deposit_address(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<DepositAddress, TxbitError>> + Send;

    /// Request a withdrawal.
    fn withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> impl Future<Output = Result<OrderUuid, TxbitError>> + Send;

    /// Look up a single order by uuid.
    fn get_order(&self, uuid: &str) -> impl Future<Output = Result<Order, TxbitError>> + Send;

    /// Get completed order history.
    fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> impl Future<Output = Result<Vec<OrderHistoryEntry>, TxbitError>> + Send;

    /// Get withdrawal history.
    fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> impl Future<Output = Result<Vec<WithdrawalHistoryEntry>, TxbitError>> + Send;

    /// Get deposit history.
    fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> impl Future<Output = Result<Vec<DepositHistoryEntry>, TxbitError>> + Send;
}

// TxbitClient trait implementation.

impl TxbitClient for TxbitRestClient {
    // ========== Public Endpoints ==========

    async fn get_markets(&self) -> Result<Vec<Market>, TxbitError> {
        TxbitRestClient::get_markets(self).await
    }

    async fn get_currencies(&self) -> Result<Vec<Currency>, TxbitError> {
        TxbitRestClient::get_currencies(self).await
    }

    async fn get_ticker(&self, market: &str) -> Result<Ticker, TxbitError> {
        TxbitRestClient::get_ticker(self, market).await
    }

    async fn get_market_summaries(&self) -> Result<Vec<MarketSummary>, TxbitError> {
        TxbitRestClient::get_market_summaries(self).await
    }

    async fn get_market_summary(&self, market: &str) -> Result<MarketSummary, TxbitError> {
        TxbitRestClient::get_market_summary(self, market).await
    }

    async fn get_order_book(&self, request: &OrderBookRequest) -> Result<OrderBook, TxbitError> {
        TxbitRestClient::get_order_book(self, request).await
    }

    async fn get_market_history(
        &self,
        market: &str,
    ) -> Result<Vec<TradeHistoryEntry>, TxbitError> {
        TxbitRestClient::get_market_history(self, market).await
    }

    async fn get_system_status(&self) -> Result<serde_json::Value, TxbitError> {
        TxbitRestClient::get_system_status(self).await
    }

    // ========== Market Endpoints ==========

    async fn buy_limit(&self, request: &LimitOrderRequest) -> Result<OrderUuid, TxbitError> {
        TxbitRestClient::buy_limit(self, request).await
    }

    async fn sell_limit(&self, request: &LimitOrderRequest) -> Result<OrderUuid, TxbitError> {
        TxbitRestClient::sell_limit(self, request).await
    }

    async fn cancel_order(&self, uuid: &str) -> Result<(), TxbitError> {
        TxbitRestClient::cancel_order(self, uuid).await
    }

    async fn get_open_orders(&self, market: Option<&str>) -> Result<Vec<OpenOrder>, TxbitError> {
        TxbitRestClient::get_open_orders(self, market).await
    }

    // ========== Account Endpoints ==========

    async fn get_balances(&self) -> Result<Vec<Balance>, TxbitError> {
        TxbitRestClient::get_balances(self).await
    }

    async fn get_balance(&self, currency: &str) -> Result<Balance, TxbitError> {
        TxbitRestClient::get_balance(self, currency).await
    }

    async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddress, TxbitError> {
        TxbitRestClient::get_deposit_address(self, currency).await
    }

    async fn withdraw(&self, request: &WithdrawRequest) -> Result<OrderUuid, TxbitError> {
        TxbitRestClient::withdraw(self, request).await
    }

    async fn get_order(&self, uuid: &str) -> Result<Order, TxbitError> {
        TxbitRestClient::get_order(self, uuid).await
    }

    async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, TxbitError> {
        TxbitRestClient::get_order_history(self, market).await
    }

    async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<WithdrawalHistoryEntry>, TxbitError> {
        TxbitRestClient::get_withdrawal_history(self, currency).await
    }

    async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<DepositHistoryEntry>, TxbitError> {
        TxbitRestClient::get_deposit_history(self, currency).await
    }
}
