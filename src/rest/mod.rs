//! Txbit REST API client.
//!
//! Provides typed access to the public, market and account endpoint groups,
//! plus a generic call surface for arbitrary method names.
//!
//! # Trait-based API
//!
//! The [`TxbitClient`] trait abstracts the typed operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a caching wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use txbit_api_client::rest::{TxbitClient, TxbitRestClient};
//!
//! async fn use_client<C: TxbitClient>(client: &C) -> Result<(), txbit_api_client::TxbitError> {
//!     let ticker = client.get_ticker("XLR/BTC").await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

pub mod account;
mod client;
pub mod endpoints;
pub mod market;
pub mod public;
mod traits;

pub use client::{GroupApi, TxbitRestClient, TxbitRestClientBuilder};
pub use endpoints::{EndpointGroup, TXBIT_BASE_URL};
pub use traits::TxbitClient;
