//! List operations.
//!
//! A list binds one signer to one document with a signing role.

use crate::client::Client;
use crate::error::Result;
use crate::types::{Resource, SignAs, SignerList};
use reqwest::Method;
use serde::Serialize;

/// Client for list operations.
///
/// Access via `client.lists()`.
pub struct ListsClient {
    client: Client,
}

impl ListsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Add a signer to a document.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clicksign::{Client, SignAs};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-access-token");
    ///
    ///     let list = client
    ///         .lists()
    ///         .add_signer_to_document("document-key", "signer-key", SignAs::Witness)
    ///         .await?;
    ///     println!("List key: {}", list.key);
    ///     Ok(())
    /// }
    /// ```
    pub async fn add_signer_to_document(
        &self,
        document_key: &str,
        signer_key: &str,
        sign_as: SignAs,
    ) -> Result<SignerList> {
        #[derive(Serialize)]
        struct Request<'a> {
            list: ListFields<'a>,
        }

        #[derive(Serialize)]
        struct ListFields<'a> {
            document_key: &'a str,
            signer_key: &'a str,
            sign_as: SignAs,
        }

        let request = Request {
            list: ListFields {
                document_key,
                signer_key,
                sign_as,
            },
        };

        let payload = self.client.send(Method::POST, "lists", &request).await?;
        SignerList::from_payload(payload)
    }
}
