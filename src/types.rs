//! Type definitions for the ClickSign client.
//!
//! Response records mirror the inner object of ClickSign's wrapped payloads
//! (`{"document": {...}}`, `{"signer": {...}}`, ...). Fields the service sends
//! that have no named field here are kept in `extra`.

use crate::error::{ClickSignError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A record delivered inside a single wrapper key.
pub trait Resource: DeserializeOwned {
    /// The payload key holding the record, e.g. `"document"`.
    const WRAPPER: &'static str;

    /// Build the record from a full response payload.
    ///
    /// Fails with [`ClickSignError::MalformedResponse`] when the wrapper key is
    /// missing or does not hold an object.
    fn from_payload(mut payload: Value) -> Result<Self> {
        let inner = payload
            .get_mut(Self::WRAPPER)
            .map(Value::take)
            .filter(Value::is_object)
            .ok_or_else(|| ClickSignError::malformed(Self::WRAPPER))?;

        serde_json::from_value(inner).map_err(|e| {
            ClickSignError::Decode(format!("invalid `{}` object: {}", Self::WRAPPER, e))
        })
    }
}

/// Reads an explicit `null` as the type's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The account the access token belongs to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Account {
    /// Account key.
    #[serde(default)]
    pub key: Option<String>,
    /// Account name.
    #[serde(default)]
    pub name: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Account {
    const WRAPPER: &'static str = "account";
}

/// Fields of a document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DocumentInfo {
    /// Unique document key.
    pub key: String,
    /// Path of the document inside the account, e.g. `/contracts/lease.docx`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    /// `running`, `closed`, `canceled`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    /// Signing deadline timestamp.
    #[serde(default)]
    pub deadline_at: Option<String>,
    /// Close the document automatically after the last signature.
    #[serde(default)]
    pub auto_close: Option<bool>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Signers must sign in the order they were added.
    #[serde(default)]
    pub sequence_enabled: Option<bool>,
    /// Days between automatic reminders, as sent by the service.
    #[serde(default)]
    pub remind_interval: Option<Value>,
    /// Remaining fields (signers, downloads, template, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for DocumentInfo {
    const WRAPPER: &'static str = "document";
}

/// A group of documents signed together by one signer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Batch {
    /// Unique batch key.
    pub key: String,
    #[serde(default)]
    pub signer_key: Option<String>,
    /// Keys of the member documents.
    #[serde(default, deserialize_with = "null_as_default")]
    pub document_keys: Vec<String>,
    /// Whether the signer sees a summary instead of each document.
    #[serde(default)]
    pub summary: Option<bool>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Batch {
    const WRAPPER: &'static str = "batch";
}

/// Fields of a signer.
///
/// A signer referenced only by key has every field but `key` empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SignerInfo {
    /// Unique signer key.
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// CPF, e.g. `123.321.123-40`.
    #[serde(default)]
    pub documentation: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub has_documentation: Option<bool>,
    /// Authentication methods, as sent by the service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub auths: Vec<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for SignerInfo {
    const WRAPPER: &'static str = "signer";
}

/// The association of one signer with one document, with a signing role.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SignerList {
    /// Unique list key.
    pub key: String,
    #[serde(default)]
    pub document_key: Option<String>,
    #[serde(default)]
    pub signer_key: Option<String>,
    /// Signing role, as sent by the service.
    #[serde(default)]
    pub sign_as: Option<String>,
    /// Key used to sign through the API, see [`crate::sign::SignClient`].
    #[serde(default)]
    pub request_signature_key: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for SignerList {
    const WRAPPER: &'static str = "list";
}

/// How a signer proves their identity when signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    Api,
    Email,
    Sms,
    Whatsapp,
}

impl AuthMethod {
    pub const ALL: [AuthMethod; 4] = [
        AuthMethod::Api,
        AuthMethod::Email,
        AuthMethod::Sms,
        AuthMethod::Whatsapp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AuthMethod::Api => "api",
            AuthMethod::Email => "email",
            AuthMethod::Sms => "sms",
            AuthMethod::Whatsapp => "whatsapp",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = ClickSignError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ClickSignError::InvalidConfig(format!("unknown auth method '{s}'")))
    }
}

/// The capacity in which a signer signs a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignAs {
    Sign,
    Approve,
    Party,
    Witness,
    Intervening,
    Receipt,
    Endorser,
    Endorsee,
    Administrator,
    Guarantor,
    Transferor,
    Transferee,
    Contractee,
    Contractor,
    JointDebtor,
    Issuer,
    Manager,
    Buyer,
    Seller,
    Attorney,
    LegalRepresentative,
    CoResponsible,
    Validator,
    Ratify,
    Acknowledge,
}

impl SignAs {
    pub const ALL: [SignAs; 25] = [
        SignAs::Sign,
        SignAs::Approve,
        SignAs::Party,
        SignAs::Witness,
        SignAs::Intervening,
        SignAs::Receipt,
        SignAs::Endorser,
        SignAs::Endorsee,
        SignAs::Administrator,
        SignAs::Guarantor,
        SignAs::Transferor,
        SignAs::Transferee,
        SignAs::Contractee,
        SignAs::Contractor,
        SignAs::JointDebtor,
        SignAs::Issuer,
        SignAs::Manager,
        SignAs::Buyer,
        SignAs::Seller,
        SignAs::Attorney,
        SignAs::LegalRepresentative,
        SignAs::CoResponsible,
        SignAs::Validator,
        SignAs::Ratify,
        SignAs::Acknowledge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SignAs::Sign => "sign",
            SignAs::Approve => "approve",
            SignAs::Party => "party",
            SignAs::Witness => "witness",
            SignAs::Intervening => "intervening",
            SignAs::Receipt => "receipt",
            SignAs::Endorser => "endorser",
            SignAs::Endorsee => "endorsee",
            SignAs::Administrator => "administrator",
            SignAs::Guarantor => "guarantor",
            SignAs::Transferor => "transferor",
            SignAs::Transferee => "transferee",
            SignAs::Contractee => "contractee",
            SignAs::Contractor => "contractor",
            SignAs::JointDebtor => "joint_debtor",
            SignAs::Issuer => "issuer",
            SignAs::Manager => "manager",
            SignAs::Buyer => "buyer",
            SignAs::Seller => "seller",
            SignAs::Attorney => "attorney",
            SignAs::LegalRepresentative => "legal_representative",
            SignAs::CoResponsible => "co_responsible",
            SignAs::Validator => "validator",
            SignAs::Ratify => "ratify",
            SignAs::Acknowledge => "acknowledge",
        }
    }
}

impl fmt::Display for SignAs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignAs {
    type Err = ClickSignError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ClickSignError::InvalidConfig(format!("unknown signing role '{s}'")))
    }
}

/// Options for configuring a document.
///
/// Only the fields that are set are sent. Names this type does not know can
/// be passed through `extra`; they are forwarded untouched and the service
/// decides whether to accept them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentConfig {
    /// Signing deadline, e.g. `2024-12-31T23:59:59-03:00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
    /// `pt-BR` or `en-US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_enabled: Option<bool>,
    /// Days between automatic reminders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_interval: Option<u32>,
    /// Additional options forwarded as is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request to create a signer.
///
/// Unset personal fields are sent as `null`. `delivery` is left out of the
/// request entirely when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSignerRequest {
    /// Authentication method, sent as a one-element `auths` list.
    pub auth: AuthMethod,
    /// Full name.
    pub name: Option<String>,
    /// Required by the service for `api` and `email` auth.
    pub email: Option<String>,
    /// Eleven digits. Required for `sms` and `whatsapp` auth.
    pub phone_number: Option<String>,
    /// CPF, required when `has_documentation` is true.
    pub documentation: Option<String>,
    /// `YYYY-MM-DD`, required when `has_documentation` is true.
    pub birthday: Option<String>,
    pub has_documentation: bool,
    /// `"email"` to notify the signer when a document is added to them.
    pub delivery: Option<String>,
}

impl CreateSignerRequest {
    /// A request with only the auth method set and `has_documentation` on.
    pub fn new(auth: AuthMethod) -> Self {
        Self {
            auth,
            name: None,
            email: None,
            phone_number: None,
            documentation: None,
            birthday: None,
            has_documentation: true,
            delivery: None,
        }
    }
}
