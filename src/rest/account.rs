//! Account REST API endpoints (signed).

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::TxbitError;
use crate::rest::TxbitRestClient;
use crate::rest::client::NO_PARAMS;
use crate::rest::endpoints::{EndpointGroup, account};
use crate::types::common::{
    Balance, DepositAddress, DepositHistoryEntry, Order, OrderHistoryEntry, OrderUuid,
    WithdrawalHistoryEntry,
};

/// Request parameters for a withdrawal.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    currency: String,
    quantity: Decimal,
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    paymentid: Option<String>,
}

impl WithdrawRequest {
    /// Create a withdrawal request.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency code, e.g. "BTC".
    /// * `quantity` - Amount to withdraw; the network fee is deducted from it.
    /// * `address` - Destination address.
    pub fn new(
        currency: impl Into<String>,
        quantity: Decimal,
        address: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            quantity,
            address: address.into(),
            paymentid: None,
        }
    }

    /// Attach a payment id for currencies that require one.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.paymentid = Some(payment_id.into());
        self
    }
}

impl TxbitRestClient {
    /// Get the balance of every currency in the account.
    pub async fn get_balances(&self) -> Result<Vec<Balance>, TxbitError> {
        self.get(EndpointGroup::Account, account::GET_BALANCES, NO_PARAMS)
            .await
    }

    /// Get the balance of one currency.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency code, e.g. "ETH".
    pub async fn get_balance(&self, currency: &str) -> Result<Balance, TxbitError> {
        self.get(
            EndpointGroup::Account,
            account::GET_BALANCE,
            &[("currency", currency)],
        )
        .await
    }

    /// Get or generate the deposit address for a currency.
    ///
    /// The first call for a currency may return an address that is still
    /// being generated; retrying after a moment returns the final address.
    pub async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddress, TxbitError> {
        self.get(
            EndpointGroup::Account,
            account::GET_DEPOSIT_ADDRESS,
            &[("currency", currency)],
        )
        .await
    }

    /// Request a withdrawal.
    ///
    /// # Arguments
    ///
    /// * `request` - Currency, amount and destination of the withdrawal.
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<OrderUuid, TxbitError> {
        self.get(EndpointGroup::Account, account::WITHDRAW, request)
            .await
    }

    /// Look up a single order by uuid.
    pub async fn get_order(&self, uuid: &str) -> Result<Order, TxbitError> {
        self.get(EndpointGroup::Account, account::GET_ORDER, &[("uuid", uuid)])
            .await
    }

    /// Get completed order history, optionally for one market only.
    ///
    /// # Arguments
    ///
    /// * `market` - Pair name to filter by, or `None` for all markets.
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, TxbitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            market: Option<&'a str>,
        }
        self.get(
            EndpointGroup::Account,
            account::GET_ORDER_HISTORY,
            &Params { market },
        )
        .await
    }

    /// Get withdrawal history, optionally for one currency only.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency code to filter by, or `None` for all.
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<WithdrawalHistoryEntry>, TxbitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'a str>,
        }
        self.get(
            EndpointGroup::Account,
            account::GET_WITHDRAWAL_HISTORY,
            &Params { currency },
        )
        .await
    }

    /// Get deposit history, optionally for one currency only.
    ///
    /// # Arguments
    ///
    /// * `currency` - Currency code to filter by, or `None` for all.
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<DepositHistoryEntry>, TxbitError> {
        #[derive(Serialize)]
        struct Params<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'a str>,
        }
        self.get(
            EndpointGroup::Account,
            account::GET_DEPOSIT_HISTORY,
            &Params { currency },
        )
        .await
    }
}
