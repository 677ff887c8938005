//! # Txbit Client
//!
//! An async Rust client library for the Txbit exchange REST API.
//!
//! ## Features
//!
//! - Typed wrappers for the public, market and account endpoint groups
//! - HMAC-SHA512 request signing with automatic `apikey`/`nonce` handling
//! - A generic call surface for endpoints the exchange adds faster than we do
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use txbit_api_client::rest::TxbitRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TxbitRestClient::new();
//!     let ticker = client.get_ticker("XLR/BTC").await?;
//!     println!("Last price: {}", ticker.last);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::TxbitError;
pub use rest::{EndpointGroup, TxbitRestClient};
pub use types::common::{FillType, OrderSide, OrderType};

/// Result type alias using TxbitError
pub type Result<T> = std::result::Result<T, TxbitError>;
