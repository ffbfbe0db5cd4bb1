//! # ClickSign Rust client
//!
//! Typed client for the [ClickSign](https://www.clicksign.com) electronic
//! signature API (v1).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clicksign::{AuthMethod, Client, CreateSignerRequest, DocumentConfig, SignAs};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Sandbox unless configured otherwise
//!     let client = Client::new("your-access-token");
//!
//!     // Create a document from a template
//!     let doc = client
//!         .documents()
//!         .create_from_template("template-key", "contracts/lease", json!({"tenant": "Ana"}))
//!         .await?;
//!
//!     doc.configure(&DocumentConfig {
//!         auto_close: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//!     // Create a signer and add them to the document
//!     let signer = client
//!         .signers()
//!         .create(&CreateSignerRequest {
//!             email: Some("ana@example.com".to_string()),
//!             has_documentation: false,
//!             ..CreateSignerRequest::new(AuthMethod::Email)
//!         })
//!         .await?;
//!     let list = doc.add_signer(&signer, SignAs::Sign).await?;
//!
//!     println!("Signer {} added to {} ({})", signer.key(), doc.key(), list.key);
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! The access token is sent as the `access_token` query parameter of every
//! request. [`Client::from_env`] reads it from `CLICKSIGN_ACCESS_TOKEN`.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ClickSignError>`. Each failure status the
//! service uses maps to its own variant:
//!
//! ```rust,no_run
//! use clicksign::{Client, ClickSignError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("your-access-token");
//!
//!     match client.documents().get("document-key").await {
//!         Ok(doc) => println!("Status: {:?}", doc.status()),
//!         Err(ClickSignError::NotFound) => println!("No such document"),
//!         Err(ClickSignError::UnprocessableEntity { errors }) => println!("Rejected: {}", errors),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Requests and failures are reported through [`tracing`] at `debug` and
//! `warn` level. The access token is never logged.

pub mod accounts;
pub mod batches;
pub mod client;
pub mod documents;
pub mod error;
pub mod lists;
pub mod response;
pub mod sign;
pub mod signers;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, Environment};
pub use documents::Document;
pub use error::{ClickSignError, Result};
pub use signers::Signer;

pub use types::{
    Account, AuthMethod, Batch, CreateSignerRequest, DocumentConfig, DocumentInfo, Resource,
    SignAs, SignerInfo, SignerList,
};
