//! Txbit REST API endpoint groups and method-name constants.

use std::str::FromStr;

use crate::error::TxbitError;

/// Base URL for the Txbit REST API.
pub const TXBIT_BASE_URL: &str = "https://api.txbit.io/api";

/// The three sections of the Txbit API.
///
/// The group picks the URL path segment and decides whether the request is
/// signed: `public` needs no key, `market` and `account` require an API key
/// with the matching permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointGroup {
    /// Market data endpoints, no authentication.
    Public,
    /// Order placement and cancellation, signed.
    Market,
    /// Balances, history and withdrawals, signed.
    Account,
}

impl EndpointGroup {
    /// URL path segment for this group.
    pub fn path_segment(self) -> &'static str {
        match self {
            EndpointGroup::Public => "public",
            EndpointGroup::Market => "market",
            EndpointGroup::Account => "account",
        }
    }

    /// Whether calls against this group carry `apikey`, `nonce` and the
    /// `apisign` header.
    pub fn requires_auth(self) -> bool {
        !matches!(self, EndpointGroup::Public)
    }
}

impl std::fmt::Display for EndpointGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl FromStr for EndpointGroup {
    type Err = TxbitError;

    /// Parse a group name. A trailing slash is tolerated since group names
    /// appear as path segments. Unknown names fail before any network I/O.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('/') {
            "public" => Ok(EndpointGroup::Public),
            "market" => Ok(EndpointGroup::Market),
            "account" => Ok(EndpointGroup::Account),
            other => Err(TxbitError::UnknownEndpointGroup(other.to_string())),
        }
    }
}

/// Public endpoints (no authentication required).
pub mod public {
    /// List all markets.
    pub const GET_MARKETS: &str = "getmarkets";
    /// List all currencies.
    pub const GET_CURRENCIES: &str = "getcurrencies";
    /// Get bid, ask and last price for a market.
    pub const GET_TICKER: &str = "getticker";
    /// Get 24-hour summaries for all markets.
    pub const GET_MARKET_SUMMARIES: &str = "getmarketsummaries";
    /// Get the 24-hour summary for one market.
    pub const GET_MARKET_SUMMARY: &str = "getmarketsummary";
    /// Get a market's order book.
    pub const GET_ORDER_BOOK: &str = "getorderbook";
    /// Get a market's recent trades.
    pub const GET_MARKET_HISTORY: &str = "getmarkethistory";
    /// Get exchange system status.
    pub const GET_SYSTEM_STATUS: &str = "getsystemstatus";
}

/// Market endpoints (authentication with trade permission required).
pub mod market {
    /// Place a limit buy order.
    pub const BUY_LIMIT: &str = "buylimit";
    /// Place a limit sell order.
    pub const SELL_LIMIT: &str = "selllimit";
    /// Cancel an open order.
    pub const CANCEL: &str = "cancel";
    /// List the account's open orders.
    pub const GET_OPEN_ORDERS: &str = "getopenorders";
}

/// Account endpoints (authentication required).
pub mod account {
    /// Get all currency balances.
    pub const GET_BALANCES: &str = "getbalances";
    /// Get the balance of one currency.
    pub const GET_BALANCE: &str = "getbalance";
    /// Get or generate a deposit address.
    pub const GET_DEPOSIT_ADDRESS: &str = "getdepositaddress";
    /// Request a withdrawal.
    pub const WITHDRAW: &str = "withdraw";
    /// Look up a single order by uuid.
    pub const GET_ORDER: &str = "getorder";
    /// Get completed order history.
    pub const GET_ORDER_HISTORY: &str = "getorderhistory";
    /// Get withdrawal history.
    pub const GET_WITHDRAWAL_HISTORY: &str = "getwithdrawalhistory";
    /// Get deposit history.
    pub const GET_DEPOSIT_HISTORY: &str = "getdeposithistory";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_path_segments() {
        assert_eq!(EndpointGroup::Public.path_segment(), "public");
        assert_eq!(EndpointGroup::Market.path_segment(), "market");
        assert_eq!(EndpointGroup::Account.path_segment(), "account");
    }

    #[test]
    fn test_only_public_is_unsigned() {
        assert!(!EndpointGroup::Public.requires_auth());
        assert!(EndpointGroup::Market.requires_auth());
        assert!(EndpointGroup::Account.requires_auth());
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!(
            "market".parse::<EndpointGroup>().unwrap(),
            EndpointGroup::Market
        );
        assert_eq!(
            "account/".parse::<EndpointGroup>().unwrap(),
            EndpointGroup::Account
        );
    }

    #[test]
    fn test_unknown_group_rejected() {
        let err = "futures".parse::<EndpointGroup>().unwrap_err();
        match err {
            TxbitError::UnknownEndpointGroup(name) => assert_eq!(name, "futures"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
