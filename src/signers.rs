//! Signer operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{AuthMethod, CreateSignerRequest, Resource, SignAs, SignerInfo, SignerList};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// A signer, with the client that fetched it.
#[derive(Debug, Clone)]
pub struct Signer {
    /// Signer fields.
    pub info: SignerInfo,
    client: Client,
}

impl Signer {
    /// Build a signer from a `{"signer": {...}}` payload.
    pub fn from_payload(client: &Client, payload: Value) -> Result<Self> {
        Ok(Self {
            info: SignerInfo::from_payload(payload)?,
            client: client.clone(),
        })
    }

    /// Reference an existing signer by key without fetching it.
    ///
    /// Only `key` is populated; the handle is meant for key-based operations
    /// such as adding the signer to a document.
    pub fn from_key(client: &Client, key: impl Into<String>) -> Self {
        Self {
            info: SignerInfo {
                key: key.into(),
                ..Default::default()
            },
            client: client.clone(),
        }
    }

    /// Unique signer key.
    pub fn key(&self) -> &str {
        &self.info.key
    }

    /// The client this signer was obtained through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Add this signer to a document.
    pub async fn add_to_document(&self, document_key: &str, sign_as: SignAs) -> Result<SignerList> {
        self.client
            .lists()
            .add_signer_to_document(document_key, self.key(), sign_as)
            .await
    }
}

#[derive(Serialize)]
struct SignerBody<'a> {
    signer: SignerFields<'a>,
}

#[derive(Serialize)]
struct SignerFields<'a> {
    email: Option<&'a str>,
    phone_number: Option<&'a str>,
    auths: [AuthMethod; 1],
    name: Option<&'a str>,
    documentation: Option<&'a str>,
    birthday: Option<&'a str>,
    has_documentation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery: Option<&'a str>,
}

impl<'a> From<&'a CreateSignerRequest> for SignerBody<'a> {
    fn from(request: &'a CreateSignerRequest) -> Self {
        Self {
            signer: SignerFields {
                email: request.email.as_deref(),
                phone_number: request.phone_number.as_deref(),
                auths: [request.auth],
                name: request.name.as_deref(),
                documentation: request.documentation.as_deref(),
                birthday: request.birthday.as_deref(),
                has_documentation: request.has_documentation,
                delivery: request.delivery.as_deref().filter(|d| !d.is_empty()),
            },
        }
    }
}

/// Client for signer operations.
///
/// Access via `client.signers()`.
pub struct SignersClient {
    client: Client,
}

impl SignersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a signer.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use clicksign::{AuthMethod, Client, CreateSignerRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("your-access-token");
    ///
    ///     let signer = client.signers().create(&CreateSignerRequest {
    ///         name: Some("Ana Souza".to_string()),
    ///         email: Some("ana@example.com".to_string()),
    ///         has_documentation: false,
    ///         ..CreateSignerRequest::new(AuthMethod::Email)
    ///     }).await?;
    ///     println!("Signer key: {}", signer.key());
    ///     Ok(())
    /// }
    /// ```
    pub async fn create(&self, request: &CreateSignerRequest) -> Result<Signer> {
        let payload = self
            .client
            .send(Method::POST, "signers", &SignerBody::from(request))
            .await?;
        Signer::from_payload(&self.client, payload)
    }

    /// Get a signer by key.
    pub async fn get(&self, signer_key: &str) -> Result<Signer> {
        let payload = self.client.get(&format!("signers/{}", signer_key)).await?;
        Signer::from_payload(&self.client, payload)
    }
}
