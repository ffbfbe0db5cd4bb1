//! Document operations.
//!
//! This module provides the DocumentsClient for listing, fetching, creating
//! (from templates), configuring, finalizing, canceling and deleting
//! documents, and the [`Document`] handle returned by those calls.

use crate::client::Client;
use crate::error::{ClickSignError, Result};
use crate::signers::Signer;
use crate::types::{DocumentConfig, DocumentInfo, Resource, SignAs, SignerList};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Extension every template-generated document gets.
pub const TEMPLATE_EXTENSION: &str = ".docx";

/// Coerce a template output path to start with `/` and end with `.docx`.
///
/// Idempotent: normalizing an already normalized path returns it unchanged.
///
/// ```
/// use clicksign::documents::normalize_template_path;
///
/// assert_eq!(normalize_template_path("foo/bar"), "/foo/bar.docx");
/// assert_eq!(normalize_template_path("/foo/bar.docx"), "/foo/bar.docx");
/// ```
pub fn normalize_template_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + TEMPLATE_EXTENSION.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    if !normalized.ends_with(TEMPLATE_EXTENSION) {
        normalized.push_str(TEMPLATE_EXTENSION);
    }
    normalized
}

/// A document, with the client that fetched it.
///
/// The convenience methods act on this document's key through that client.
#[derive(Debug, Clone)]
pub struct Document {
    /// Document fields.
    pub info: DocumentInfo,
    client: Client,
}

impl Document {
    pub(crate) fn new(client: Client, info: DocumentInfo) -> Self {
        Self { info, client }
    }

    /// Build a document from a `{"document": {...}}` payload.
    pub fn from_payload(client: &Client, payload: Value) -> Result<Self> {
        Ok(Self::new(client.clone(), DocumentInfo::from_payload(payload)?))
    }

    /// Unique document key.
    pub fn key(&self) -> &str {
        &self.info.key
    }

    /// Document status, if the service reported one.
    pub fn status(&self) -> Option<&str> {
        self.info.status.as_deref()
    }

    /// The client this document was obtained through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Apply configuration options to this document.
    pub async fn configure(&self, config: &DocumentConfig) -> Result<Document> {
        self.client.documents().configure(self.key(), config).await
    }

    /// Finalize this document.
    pub async fn finalize(&self) -> Result<Document> {
        self.client.documents().finalize(self.key()).await
    }

    /// Cancel this document.
    pub async fn cancel(&self) -> Result<Document> {
        self.client.documents().cancel(self.key()).await
    }

    /// Delete this document.
    pub async fn delete(&self) -> Result<bool> {
        self.client.documents().delete(self.key()).await
    }

    /// Add a signer to this document.
    pub async fn add_signer(&self, signer: &Signer, sign_as: SignAs) -> Result<SignerList> {
        self.add_signer_by_key(signer.key(), sign_as).await
    }

    /// Add a signer known only by key to this document.
    pub async fn add_signer_by_key(&self, signer_key: &str, sign_as: SignAs) -> Result<SignerList> {
        self.client
            .lists()
            .add_signer_to_document(self.key(), signer_key, sign_as)
            .await
    }
}

/// Client for document operations.
///
/// Access via `client.documents()`.
pub struct DocumentsClient {
    client: Client,
}

impl DocumentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn document(&self, payload: Value) -> Result<Document> {
        Document::from_payload(&self.client, payload)
    }

    /// List all documents of the account.
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
    ///     for doc in client.documents().list().await? {
    ///         println!("{} {:?}", doc.key(), doc.status());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self) -> Result<Vec<Document>> {
        let mut payload = self.client.get("documents").await?;

        let items = match payload.get_mut("documents").map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => return Err(ClickSignError::malformed("documents")),
        };

        items
            .into_iter()
            .map(|item| -> Result<Document> {
                let info = serde_json::from_value(item).map_err(|e| {
                    ClickSignError::Decode(format!("invalid `document` object: {}", e))
                })?;
                Ok(Document::new(self.client.clone(), info))
            })
            .collect()
    }

    /// Get a document by key.
    pub async fn get(&self, document_key: &str) -> Result<Document> {
        let payload = self
            .client
            .get(&format!("documents/{}", document_key))
            .await?;
        self.document(payload)
    }

    /// Create a document from a template.
    ///
    /// `path` is where the new document is stored; a leading `/` and the
    /// `.docx` extension are added when missing. `data` fills the template's
    /// variables.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clicksign::Client;
    /// use serde_json::json;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-access-token");
    ///
    ///     let doc = client
    ///         .documents()
    ///         .create_from_template("template-key", "contracts/lease", json!({"name": "Ana"}))
    ///         .await?;
    ///     println!("Created {}", doc.key());
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_from_template(
        &self,
        template_key: &str,
        path: &str,
        data: Value,
    ) -> Result<Document> {
        #[derive(Serialize)]
        struct Request {
            document: RequestDocument,
        }

        #[derive(Serialize)]
        struct RequestDocument {
            path: String,
            template: Template,
        }

        #[derive(Serialize)]
        struct Template {
            data: Value,
        }

        let request = Request {
            document: RequestDocument {
                path: normalize_template_path(path),
                template: Template { data },
            },
        };

        let payload = self
            .client
            .send(
                Method::POST,
                &format!("templates/{}/documents", template_key),
                &request,
            )
            .await?;
        self.document(payload)
    }

    /// Configure a document. Only the options set in `config` are sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clicksign::{Client, DocumentConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-access-token");
    ///
    ///     let doc = client.documents().configure("document-key", &DocumentConfig {
    ///         auto_close: Some(true),
    ///         locale: Some("en-US".to_string()),
    ///         ..Default::default()
    ///     }).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn configure(&self, document_key: &str, config: &DocumentConfig) -> Result<Document> {
        let payload = self
            .client
            .send(Method::PATCH, &format!("documents/{}", document_key), config)
            .await?;
        self.document(payload)
    }

    /// Finalize a document manually.
    pub async fn finalize(&self, document_key: &str) -> Result<Document> {
        let payload = self
            .client
            .patch_empty(&format!("documents/{}/finish", document_key))
            .await?;
        self.document(payload)
    }

    /// Cancel a document manually.
    pub async fn cancel(&self, document_key: &str) -> Result<Document> {
        let payload = self
            .client
            .patch_empty(&format!("documents/{}/cancel", document_key))
            .await?;
        self.document(payload)
    }

    /// Delete a document. Returns `true` once the service accepted the deletion.
    pub async fn delete(&self, document_key: &str) -> Result<bool> {
        self.client
            .delete(&format!("documents/{}", document_key))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_adds_separator_and_extension() {
        assert_eq!(normalize_template_path("foo/bar"), "/foo/bar.docx");
        assert_eq!(normalize_template_path("/foo/bar"), "/foo/bar.docx");
        assert_eq!(normalize_template_path("foo/bar.docx"), "/foo/bar.docx");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for path in ["foo/bar", "/foo/bar.docx", "x", "/a/b/c.pdf", ""] {
            let once = normalize_template_path(path);
            assert_eq!(normalize_template_path(&once), once);
        }
        assert_eq!(normalize_template_path("/foo/bar.docx"), "/foo/bar.docx");
    }

    #[test]
    fn test_document_keeps_client() {
        let client = Client::new("test_token");
        let doc = Document::from_payload(
            &client,
            json!({"document": {"key": "abc", "status": "pending"}}),
        )
        .unwrap();

        assert_eq!(doc.key(), "abc");
        assert_eq!(doc.status(), Some("pending"));
        assert_eq!(doc.client().base_url(), client.base_url());
    }

    #[test]
    fn test_document_from_payload_without_wrapper() {
        let client = Client::new("test_token");
        let result = Document::from_payload(&client, json!({"key": "abc"}));
        assert!(matches!(
            result,
            Err(ClickSignError::MalformedResponse { .. })
        ));
    }
}
