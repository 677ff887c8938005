//! Common domain types for Txbit API payloads.
//!
//! Response fields arrive in PascalCase; monetary values are JSON numbers
//! and map to [`rust_decimal::Decimal`] to avoid float rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::types::serde_helpers::{option_txbit_datetime, txbit_datetime};

/// Buy or sell side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy trade
    Buy,
    /// Sell trade
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Type of an order on the book.
///
/// The exchange only supports limit orders, so the two values carry the
/// side as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit buy order
    LimitBuy,
    /// Limit sell order
    LimitSell,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::LimitBuy => write!(f, "LIMIT_BUY"),
            OrderType::LimitSell => write!(f, "LIMIT_SELL"),
        }
    }
}

/// How a historical trade was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillType {
    /// The order filled in one trade
    Fill,
    /// The order filled across several trades
    PartialFill,
}

/// A market pair listed on the exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    /// Traded currency code.
    pub market_currency: String,
    /// Quote currency code.
    pub base_currency: String,
    /// Traded currency full name.
    pub market_currency_long: String,
    /// Quote currency full name.
    pub base_currency_long: String,
    /// Smallest order quantity accepted.
    pub min_trade_size: Decimal,
    /// Pair name, e.g. "XLR/BTC".
    pub market_name: String,
    /// Whether the market is currently trading.
    pub is_active: bool,
    /// When the market was listed.
    #[serde(with = "txbit_datetime")]
    pub created: PrimitiveDateTime,
}

/// A currency listed on the exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    /// Currency code, e.g. "BTC".
    pub currency: String,
    /// Full name, e.g. "Bitcoin".
    pub currency_long: String,
    /// Confirmations required before a deposit credits.
    pub min_confirmation: u32,
    /// Withdrawal fee.
    pub tx_fee: Decimal,
    /// Whether deposits and withdrawals are enabled.
    pub is_active: bool,
    /// Wallet type, e.g. "BITCOIN".
    pub coin_type: String,
    /// Base address for currencies that use payment ids.
    #[serde(default)]
    pub base_address: Option<String>,
}

/// Current bid, ask and last price for a market.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    /// Highest open buy order.
    pub bid: Decimal,
    /// Lowest open sell order.
    pub ask: Decimal,
    /// Price of the most recent trade.
    pub last: Decimal,
}

/// 24-hour summary for a market.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    /// Pair name, e.g. "ETH/BTC".
    pub market_name: String,
    /// Highest trade price of the last 24 hours.
    pub high: Decimal,
    /// Lowest trade price of the last 24 hours.
    pub low: Decimal,
    /// Volume traded in the market currency.
    pub volume: Decimal,
    /// Price of the most recent trade.
    pub last: Decimal,
    /// Volume traded in the base currency.
    pub base_volume: Decimal,
    /// When this summary was computed.
    #[serde(with = "txbit_datetime")]
    pub time_stamp: PrimitiveDateTime,
    /// Highest open buy order.
    pub bid: Decimal,
    /// Lowest open sell order.
    pub ask: Decimal,
    /// Number of open buy orders.
    pub open_buy_orders: u32,
    /// Number of open sell orders.
    pub open_sell_orders: u32,
    /// Last trade price 24 hours ago.
    pub prev_day: Decimal,
    /// When the market was listed.
    #[serde(with = "txbit_datetime")]
    pub created: PrimitiveDateTime,
}

/// One price level of an order book.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookEntry {
    /// Quantity on offer at this level.
    pub quantity: Decimal,
    /// Price of this level.
    pub rate: Decimal,
}

/// Both sides of a market's order book.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Open buy orders, best first.
    #[serde(default)]
    pub buy: Vec<OrderBookEntry>,
    /// Open sell orders, best first.
    #[serde(default)]
    pub sell: Vec<OrderBookEntry>,
}

/// A trade from a market's public history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeHistoryEntry {
    /// Exchange-assigned trade id.
    pub id: u64,
    /// When the trade executed.
    #[serde(with = "txbit_datetime")]
    pub time_stamp: PrimitiveDateTime,
    /// Traded quantity.
    pub quantity: Decimal,
    /// Trade price.
    pub price: Decimal,
    /// Quantity times price in the base currency.
    pub total: Decimal,
    /// Whether the taker order filled completely.
    pub fill_type: FillType,
    /// Taker side.
    pub order_type: OrderSide,
}

/// Balance of one currency in the account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    /// Currency code.
    pub currency: String,
    /// Total balance including holds.
    pub balance: Decimal,
    /// Balance available for trading and withdrawal.
    pub available: Decimal,
    /// Balance locked in open orders or pending withdrawals.
    pub pending: Decimal,
    /// Deposit address, if one has been generated.
    #[serde(default)]
    pub crypto_address: Option<String>,
}

/// Deposit address for a currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    /// Currency code.
    pub currency: String,
    /// Address to deposit to.
    pub address: String,
}

/// Identifier returned when placing an order or requesting a withdrawal.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUuid {
    /// The new order's or withdrawal's uuid.
    pub uuid: String,
}

/// An open order as returned by the market group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    /// Conditional order uuid, unused for plain limit orders.
    #[serde(default)]
    pub uuid: Option<String>,
    /// The order's uuid.
    pub order_uuid: String,
    /// Pair name the order is on.
    pub exchange: String,
    /// Limit buy or limit sell.
    pub order_type: OrderType,
    /// Quantity originally ordered.
    pub quantity: Decimal,
    /// Quantity still on the book.
    pub quantity_remaining: Decimal,
    /// Limit price.
    pub limit: Decimal,
    /// Commission charged so far.
    pub commission_paid: Decimal,
    /// Base currency spent or received so far.
    pub price: Decimal,
    /// Average fill price, null until the first fill.
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    /// When the order was placed.
    #[serde(with = "txbit_datetime")]
    pub opened: PrimitiveDateTime,
    /// When the order left the book, null while open.
    #[serde(default, with = "option_txbit_datetime")]
    pub closed: Option<PrimitiveDateTime>,
    /// Whether a cancel has been requested.
    pub cancel_initiated: bool,
    /// Whether the order was immediate-or-cancel.
    pub immediate_or_cancel: bool,
    /// Whether the order is conditional.
    pub is_conditional: bool,
    /// Condition kind for conditional orders.
    #[serde(default)]
    pub condition: Option<String>,
    /// Condition trigger price.
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

/// A single order looked up by uuid through the account group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Account the order belongs to, when the key may act for several.
    #[serde(default)]
    pub account_id: Option<String>,
    /// The order's uuid.
    pub order_uuid: String,
    /// Pair name the order is on.
    pub exchange: String,
    /// Limit buy or limit sell.
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    /// Quantity originally ordered.
    pub quantity: Decimal,
    /// Quantity still unfilled.
    pub quantity_remaining: Decimal,
    /// Limit price.
    pub limit: Decimal,
    /// Base currency reserved for the order.
    #[serde(default)]
    pub reserved: Option<Decimal>,
    /// Reserved amount not yet consumed.
    #[serde(default)]
    pub reserve_remaining: Option<Decimal>,
    /// Commission reserved for the order.
    #[serde(default)]
    pub commission_reserved: Option<Decimal>,
    /// Reserved commission not yet consumed.
    #[serde(default)]
    pub commission_reserve_remaining: Option<Decimal>,
    /// Commission charged so far.
    pub commission_paid: Decimal,
    /// Base currency spent or received so far.
    pub price: Decimal,
    /// Average fill price, null until the first fill.
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    /// When the order was placed.
    #[serde(with = "txbit_datetime")]
    pub opened: PrimitiveDateTime,
    /// When the order left the book, null while open.
    #[serde(default, with = "option_txbit_datetime")]
    pub closed: Option<PrimitiveDateTime>,
    /// Whether the order is still on the book.
    pub is_open: bool,
    /// Internal consistency marker.
    #[serde(default)]
    pub sentinel: Option<String>,
    /// Whether a cancel has been requested.
    pub cancel_initiated: bool,
    /// Whether the order was immediate-or-cancel.
    pub immediate_or_cancel: bool,
    /// Whether the order is conditional.
    pub is_conditional: bool,
    /// Condition kind for conditional orders.
    #[serde(default)]
    pub condition: Option<String>,
    /// Condition trigger price.
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

/// A completed order from the account's history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderHistoryEntry {
    /// The order's uuid.
    pub order_uuid: String,
    /// Pair name the order was on.
    pub exchange: String,
    /// When the order was placed.
    #[serde(with = "txbit_datetime")]
    pub time_stamp: PrimitiveDateTime,
    /// Limit buy or limit sell.
    pub order_type: OrderType,
    /// Limit price.
    pub limit: Decimal,
    /// Quantity originally ordered.
    pub quantity: Decimal,
    /// Quantity left unfilled when the order closed.
    pub quantity_remaining: Decimal,
    /// Commission charged.
    pub commission: Decimal,
    /// Base currency spent or received.
    pub price: Decimal,
    /// Average fill price.
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    /// Whether the order was conditional.
    pub is_conditional: bool,
    /// Condition kind for conditional orders.
    #[serde(default)]
    pub condition: Option<String>,
    /// Condition trigger price.
    #[serde(default)]
    pub condition_target: Option<Decimal>,
    /// Whether the order was immediate-or-cancel.
    pub immediate_or_cancel: bool,
    /// When the order closed.
    #[serde(default, with = "option_txbit_datetime")]
    pub closed: Option<PrimitiveDateTime>,
}

/// A withdrawal from the account's history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawalHistoryEntry {
    /// The withdrawal's uuid.
    pub payment_uuid: String,
    /// Currency code.
    pub currency: String,
    /// Amount withdrawn.
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
    /// When the withdrawal was requested.
    #[serde(with = "txbit_datetime")]
    pub opened: PrimitiveDateTime,
    /// Whether the withdrawal has been approved.
    pub authorized: bool,
    /// Whether payment is still pending.
    pub pending_payment: bool,
    /// Network fee paid.
    pub tx_cost: Decimal,
    /// On-chain transaction id, null until broadcast.
    #[serde(default)]
    pub tx_id: Option<String>,
    /// Whether the withdrawal was canceled.
    pub canceled: bool,
    /// Whether the address failed validation.
    pub invalid_address: bool,
}

/// A deposit from the account's history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositHistoryEntry {
    /// Exchange-assigned deposit id.
    pub id: u64,
    /// Amount deposited.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Confirmations observed so far.
    pub confirmations: u32,
    /// When the deposit was last updated.
    #[serde(with = "txbit_datetime")]
    pub last_updated: PrimitiveDateTime,
    /// On-chain transaction id.
    pub tx_id: String,
    /// Address the deposit arrived on.
    pub crypto_address: String,
}
