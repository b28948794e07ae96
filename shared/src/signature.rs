use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;
use thiserror::Error;
use uuid::Uuid;

use crate::encoding::percent_encode;
use crate::protocol;

type HmacSha1 = Hmac<Sha1>;

/// A launch description as supplied by the caller: where to POST, what to
/// sign with, and the launch parameters themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRequest {
    pub url: String,
    pub secret: String,
    #[serde(default)]
    pub token_secret: String,
    #[serde(default = "default_method")]
    pub method: String,
    pub parameters: BTreeMap<String, String>,
}

fn default_method() -> String {
    protocol::DEFAULT_METHOD.to_string()
}

impl LaunchRequest {
    /// Parses a JSON launch description, keeping documents that are not
    /// JSON at all apart from documents missing a required field.
    pub fn from_json(input: &str) -> Result<Self, SignError> {
        let document: serde_json::Value =
            serde_json::from_str(input).map_err(SignError::MalformedInput)?;
        serde_json::from_value(document).map_err(SignError::MissingField)
    }
}

/// A launch whose parameter map carries a freshly computed signature under
/// [`protocol::OAUTH_SIGNATURE`].
///
/// The `BTreeMap` keeps keys in ascending codepoint order, which is both the
/// canonical ordering OAuth 1.0 signs over and the order renderers emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedLaunch {
    pub url: String,
    pub method: String,
    pub parameters: BTreeMap<String, String>,
}

/// Source of the two non-deterministic signing inputs, injected so tests can
/// pin them. Caller-supplied `oauth_nonce`/`oauth_timestamp` parameters
/// always win over this source.
pub trait Entropy {
    fn nonce(&self) -> String;
    fn unix_timestamp(&self) -> u64;
}

/// Fresh UUIDv4 nonces and wall-clock timestamps.
pub struct SystemEntropy;

impl Entropy for SystemEntropy {
    fn nonce(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn unix_timestamp(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum SignError {
    #[error("launch description is not well-formed JSON: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("launch description field is missing or has the wrong type: {0}")]
    MissingField(#[source] serde_json::Error),
    #[error("The secret key could not be used.")]
    CouldNotUseKey,
}

/// Signs `request` with system-supplied nonce and timestamp.
pub fn sign(request: LaunchRequest) -> Result<SignedLaunch, SignError> {
    sign_with(request, &SystemEntropy)
}

/// Signs `request`, filling in protocol defaults and computing the OAuth 1.0
/// HMAC-SHA1 signature over the canonical parameter set.
///
/// Deterministic whenever the request carries explicit `oauth_nonce` and
/// `oauth_timestamp` parameters.
pub fn sign_with(request: LaunchRequest, entropy: &impl Entropy) -> Result<SignedLaunch, SignError> {
    let LaunchRequest {
        url,
        secret,
        token_secret,
        method,
        parameters: mut working,
    } = request;

    working
        .entry(protocol::LTI_VERSION.to_string())
        .or_insert_with(|| protocol::LTI_VERSION_1P0.to_string());
    working
        .entry(protocol::LTI_MESSAGE_TYPE.to_string())
        .or_insert_with(|| protocol::BASIC_LAUNCH_REQUEST.to_string());

    // An inbound signature is meaningless without server-side re-derivation;
    // drop it before it can leak into the base string.
    working.remove(protocol::OAUTH_SIGNATURE);

    working.insert(
        protocol::OAUTH_VERSION.to_string(),
        protocol::OAUTH_VERSION_1_0.to_string(),
    );
    working
        .entry(protocol::OAUTH_NONCE.to_string())
        .or_insert_with(|| entropy.nonce());
    working
        .entry(protocol::OAUTH_TIMESTAMP.to_string())
        .or_insert_with(|| entropy.unix_timestamp().to_string());
    working.insert(
        protocol::OAUTH_SIGNATURE_METHOD.to_string(),
        protocol::SIGNATURE_METHOD_HMAC_SHA1.to_string(),
    );

    let base_string = signature_base_string(&method, &url, &working);
    let signature = hmac_sha1_base64(&signing_key(&secret, &token_secret), &base_string)?;

    working.insert(protocol::OAUTH_SIGNATURE.to_string(), signature);

    Ok(SignedLaunch {
        url,
        method,
        parameters: working,
    })
}

/// OAuth 1.0 signature base string: uppercase method, encoded URL, and the
/// once-more-encoded canonical parameter string, `&`-joined.
fn signature_base_string(method: &str, url: &str, parameters: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = parameters
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect();
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        // Parameter values are already encoded once above; encoding the
        // joined string again is what the OAuth 1.0 spec requires.
        percent_encode(&pairs.join("&"))
    )
}

/// Consumer secret and token secret joined raw with `&`. An empty token
/// secret still leaves the trailing separator in place.
fn signing_key(secret: &str, token_secret: &str) -> String {
    format!("{secret}&{token_secret}")
}

fn hmac_sha1_base64(key: &str, message: &str) -> Result<String, SignError> {
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| SignError::CouldNotUseKey)?;
    mac.update(message.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
