//! Batch operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{Batch, Resource};
use reqwest::Method;
use serde::Serialize;

/// Client for batch operations.
///
/// Access via `client.batches()`.
pub struct BatchesClient {
    client: Client,
}

impl BatchesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Group several documents so one signer signs them in a single session.
    ///
    /// With `summary` the signer sees a summary of the documents instead of
    /// each document in turn.
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
    ///     let batch = client
    ///         .batches()
    ///         .create(&["doc-1".to_string(), "doc-2".to_string()], "signer-key", true)
    ///         .await?;
    ///     println!("Batch {} with {} documents", batch.key, batch.document_keys.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(
        &self,
        document_keys: &[String],
        signer_key: &str,
        summary: bool,
    ) -> Result<Batch> {
        #[derive(Serialize)]
        struct Request<'a> {
            batch: BatchFields<'a>,
        }

        #[derive(Serialize)]
        struct BatchFields<'a> {
            signer_key: &'a str,
            document_keys: &'a [String],
            summary: bool,
        }

        let request = Request {
            batch: BatchFields {
                signer_key,
                document_keys,
                summary,
            },
        };

        let payload = self.client.send(Method::POST, "batches", &request).await?;
        Batch::from_payload(payload)
    }
}
