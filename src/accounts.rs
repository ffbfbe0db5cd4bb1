//! Account operations.

use crate::client::Client;
use crate::error::{ClickSignError, Result};
use crate::types::{Account, Resource};
use serde_json::Value;

/// Client for account operations.
///
/// Access via `client.accounts()`.
pub struct AccountsClient {
    client: Client,
}

impl AccountsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Check that the access token is valid, returning its account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clicksign::{Client, ClickSignError};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = Client::new("your-access-token");
    ///
    ///     match client.accounts().verify_credentials().await {
    ///         Ok(account) => println!("Token belongs to {:?}", account.name),
    ///         Err(ClickSignError::Unauthorized) => println!("Invalid token"),
    ///         Err(e) => println!("Error: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn verify_credentials(&self) -> Result<Account> {
        let payload = self.client.get("accounts").await?;
        account_from_payload(payload)
    }
}

/// Uses the `account` wrapper when present, otherwise the payload itself.
fn account_from_payload(payload: Value) -> Result<Account> {
    if payload.get(Account::WRAPPER).is_some() {
        return Account::from_payload(payload);
    }
    if !payload.is_object() {
        return Err(ClickSignError::malformed(Account::WRAPPER));
    }
    serde_json::from_value(payload).map_err(|e| ClickSignError::Decode(e.to_string()))
}
