//! Basic usage example for the ClickSign client.
//!
//! This example demonstrates:
//! - Creating a client from the environment
//! - Checking the access token
//! - Creating a document from a template and configuring it
//! - Creating a signer and adding them to the document
//!
//! Run with:
//! ```bash
//! CLICKSIGN_ACCESS_TOKEN=... TEMPLATE_KEY=... RUST_LOG=clicksign=debug cargo run --example basic
//! ```

use clicksign::{AuthMethod, Client, CreateSignerRequest, DocumentConfig, SignAs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let template_key =
        std::env::var("TEMPLATE_KEY").expect("TEMPLATE_KEY environment variable required");

    // Sandbox unless CLICKSIGN_ENV=production
    let client = Client::from_env()?;
    println!("Using {} ({})", client.environment(), client.base_url());

    let account = client.accounts().verify_credentials().await?;
    println!("Token is valid for account {:?}", account.name);

    println!("\nCreating a document from template...");
    let doc = client
        .documents()
        .create_from_template(
            &template_key,
            "examples/lease",
            serde_json::json!({"tenant": "Ana Souza", "rent": "1500"}),
        )
        .await?;
    println!("  Key:    {}", doc.key());
    println!("  Path:   {:?}", doc.info.path);

    let doc = doc
        .configure(&DocumentConfig {
            auto_close: Some(true),
            locale: Some("en-US".to_string()),
            remind_interval: Some(3),
            ..Default::default()
        })
        .await?;
    println!("  Status: {:?}", doc.status());

    println!("\nCreating a signer...");
    let signer = client
        .signers()
        .create(&CreateSignerRequest {
            name: Some("Ana Souza".to_string()),
            email: Some("ana@example.com".to_string()),
            has_documentation: false,
            ..CreateSignerRequest::new(AuthMethod::Email)
        })
        .await?;
    println!("  Key: {}", signer.key());

    let list = doc.add_signer(&signer, SignAs::Sign).await?;
    println!("Signer added, list {}", list.key);

    println!("\nCleaning up - canceling and deleting the document...");
    doc.cancel().await?;
    doc.delete().await?;

    println!("\nDone!");
    Ok(())
}
