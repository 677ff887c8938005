//! HMAC-SHA512 signature generation for Txbit API authentication.
//!
//! Signed endpoints require a signature computed as:
//! ```text
//! uppercase_hex(HMAC-SHA512(full_request_url, api_secret))
//! ```
//!
//! The full URL includes the `apikey` and `nonce` query parameters, so the
//! signature covers them. The result is sent in the `apisign` header.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::TxbitError;

type HmacSha512 = Hmac<Sha512>;

/// Sign a full request URL for Txbit's market and account endpoints.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `url` - The exact URL the request will be sent to, query string included
///
/// # Returns
///
/// Uppercase hex HMAC-SHA512 signature (128 characters).
///
/// # Example
///
/// ```rust
/// use txbit_api_client::auth::{Credentials, sign_url};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_url(
///     &credentials,
///     "https://api.txbit.io/api/account/getbalances?apikey=api_key&nonce=1616492376594",
/// )?;
/// assert_eq!(signature.len(), 128);
/// # Ok(())
/// # }
/// ```
pub fn sign_url(credentials: &Credentials, url: &str) -> Result<String, TxbitError> {
    let mut hmac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| TxbitError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(url.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(hex::encode_upper(hmac_result))
}
