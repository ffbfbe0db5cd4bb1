//! Signing through the API.
//!
//! A signer created with the `api` auth method signs by sending the list's
//! request signature key together with an HMAC-SHA256 of that key, keyed with
//! the signer's secret.

use crate::client::Client;
use crate::error::Result;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 of `request_signature_key` keyed with `secret`.
///
/// ```
/// use clicksign::sign::secret_hmac_sha256;
///
/// let tag = secret_hmac_sha256("req123", "s3cret");
/// assert_eq!(tag.len(), 64);
/// ```
pub fn secret_hmac_sha256(request_signature_key: &str, secret: &str) -> String {
    // HMAC accepts keys of any length, so this cannot fail.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(request_signature_key.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Body of a `sign` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignRequest {
    pub request_signature_key: String,
    pub secret_hmac_sha256: String,
}

impl SignRequest {
    pub fn new(request_signature_key: &str, secret: &str) -> Self {
        Self {
            request_signature_key: request_signature_key.to_string(),
            secret_hmac_sha256: secret_hmac_sha256(request_signature_key, secret),
        }
    }
}

/// Client for signing operations.
///
/// Access via `client.sign()`.
pub struct SignClient {
    client: Client,
}

impl SignClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Sign a document on behalf of an `api` signer.
    ///
    /// # Arguments
    ///
    /// * `request_signature_key` - The `request_signature_key` of the list
    ///   binding the signer to the document
    /// * `secret` - The signer's secret, provided by ClickSign
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clicksign::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-access-token");
    ///
    ///     let signed = client.sign().sign_via_api("request-signature-key", "signer-secret").await?;
    ///     assert!(signed);
    ///     Ok(())
    /// }
    /// ```
    pub async fn sign_via_api(&self, request_signature_key: &str, secret: &str) -> Result<bool> {
        let request = SignRequest::new(request_signature_key, secret);
        self.client.post_discarding("sign", &request).await?;
        Ok(true)
    }
}
