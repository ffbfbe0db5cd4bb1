//! Integration tests for document operations.

use clicksign::{ClickSignError, Client, ClientConfig, DocumentConfig, SignAs, Signer};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> Client {
    Client::with_config(
        "test_token",
        ClientConfig {
            base_url: Some(format!("{}/api/v1/", server.uri())),
            ..Default::default()
        },
    )
}

fn create_mock_document(key: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "key": key,
        "path": "/contracts/lease.docx",
        "filename": "lease.docx",
        "status": status,
        "uploaded_at": "2024-01-10T12:00:00.000-03:00",
        "updated_at": "2024-01-10T12:00:00.000-03:00",
        "finished_at": null,
        "deadline_at": "2024-02-09T12:00:00.000-03:00",
        "auto_close": true,
        "locale": "pt-BR",
        "sequence_enabled": false,
        "remind_interval": null,
        "signers": []
    })
}

#[tokio::test]
async fn test_list_documents() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents"))
        .and(query_param("access_token", "test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documents": [
                create_mock_document("doc-1", "running"),
                create_mock_document("doc-2", "closed"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let docs = mock_client(&mock_server).documents().list().await.unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].key(), "doc-1");
    assert_eq!(docs[1].status(), Some("closed"));
    assert_eq!(docs[0].info.auto_close, Some(true));
    assert!(docs[0].info.extra.contains_key("signers"));
}

#[tokio::test]
async fn test_list_documents_without_wrapper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page_infos": {}
        })))
        .mount(&mock_server)
        .await;

    let result = mock_client(&mock_server).documents().list().await;
    assert!(matches!(
        result,
        Err(ClickSignError::MalformedResponse { .. })
    ));
}

#[tokio::test]
async fn test_get_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": {"key": "abc", "status": "pending"}
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let doc = client.documents().get("abc").await.unwrap();

    assert_eq!(doc.key(), "abc");
    assert_eq!(doc.status(), Some("pending"));
    assert_eq!(doc.client().base_url(), client.base_url());
}

#[tokio::test]
async fn test_create_from_template_normalizes_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/templates/tpl-1/documents"))
        .and(query_param("access_token", "test_token"))
        .and(body_json(serde_json::json!({
            "document": {
                "path": "/contracts/lease.docx",
                "template": {"data": {"tenant": "Ana", "rent": "1500"}}
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "document": create_mock_document("doc-1", "running")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let doc = mock_client(&mock_server)
        .documents()
        .create_from_template(
            "tpl-1",
            "contracts/lease",
            serde_json::json!({"tenant": "Ana", "rent": "1500"}),
        )
        .await
        .unwrap();

    assert_eq!(doc.key(), "doc-1");
    assert_eq!(doc.info.path.as_deref(), Some("/contracts/lease.docx"));
}

#[tokio::test]
async fn test_configure_with_no_options_sends_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/documents/doc-1"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": create_mock_document("doc-1", "running")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    mock_client(&mock_server)
        .documents()
        .configure("doc-1", &DocumentConfig::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_configure_forwards_only_set_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/documents/doc-1"))
        .and(body_json(serde_json::json!({"auto_close": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": create_mock_document("doc-1", "running")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let doc = clicksign::Document::from_payload(
        &client,
        serde_json::json!({"document": {"key": "doc-1"}}),
    )
    .unwrap();

    let configured = doc
        .configure(&DocumentConfig {
            auto_close: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(configured.info.auto_close, Some(true));
}

#[tokio::test]
async fn test_document_handle_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/documents/doc-1/finish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": create_mock_document("doc-1", "closed")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/documents/doc-1/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document": create_mock_document("doc-1", "canceled")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/documents/doc-1"))
        .and(query_param("access_token", "test_token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let doc = clicksign::Document::from_payload(
        &client,
        serde_json::json!({"document": {"key": "doc-1"}}),
    )
    .unwrap();

    let finished = doc.finalize().await.unwrap();
    assert_eq!(finished.status(), Some("closed"));

    let canceled = doc.cancel().await.unwrap();
    assert_eq!(canceled.status(), Some("canceled"));

    assert!(doc.delete().await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/documents/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = mock_client(&mock_server).documents().delete("nope").await;
    assert!(matches!(result, Err(ClickSignError::NotFound)));
}

#[tokio::test]
async fn test_finalize_with_empty_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/documents/doc-1/finish"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let err = mock_client(&mock_server)
        .documents()
        .finalize("doc-1")
        .await
        .unwrap_err();
    match err {
        ClickSignError::MalformedResponse { expected } => assert_eq!(expected, "a JSON body"),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_signer_by_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/lists"))
        .and(body_json(serde_json::json!({
            "list": {
                "document_key": "doc-1",
                "signer_key": "signer-1",
                "sign_as": "witness"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "list": {
                "key": "list-1",
                "document_key": "doc-1",
                "signer_key": "signer-1",
                "sign_as": "witness",
                "request_signature_key": "rsk-1",
                "created_at": "2024-01-10T12:00:00.000-03:00"
            }
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let doc = clicksign::Document::from_payload(
        &client,
        serde_json::json!({"document": {"key": "doc-1"}}),
    )
    .unwrap();

    let list = doc
        .add_signer_by_key("signer-1", SignAs::Witness)
        .await
        .unwrap();
    assert_eq!(list.key, "list-1");
    assert_eq!(list.request_signature_key.as_deref(), Some("rsk-1"));
    assert!(list.extra.contains_key("created_at"));

    let signer = Signer::from_key(&client, "signer-1");
    let list = doc.add_signer(&signer, SignAs::Witness).await.unwrap();
    assert_eq!(list.signer_key.as_deref(), Some("signer-1"));
}
