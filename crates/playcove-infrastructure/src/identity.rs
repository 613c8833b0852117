//! Identity verifier implementations.
//!
//! `HttpIdentityVerifier` talks to the provider's token-info endpoint; no
//! cryptographic verification happens locally. `StaticIdentityVerifier`
//! serves tests and local development with a fixed token table.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;

use playcove_core::error::{CoveError, Result};
use playcove_core::identity::{IdentityVerifier, VerifiedIdentity};

const IDENTITY_SERVICE: &str = "identity-provider";

/// Verifier that resolves tokens against the provider's token-info endpoint.
pub struct HttpIdentityVerifier {
    client: Client,
    token_info_url: String,
}

impl HttpIdentityVerifier {
    pub fn new(token_info_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token_info_url: token_info_url.into(),
        }
    }
}

/// Provider response shape for a token-info lookup.
#[derive(Deserialize)]
struct TokenInfoResponse {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    #[serde(default)]
    email_verified: bool,
}

#[async_trait::async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity> {
        let response = self
            .client
            .get(&self.token_info_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| {
                CoveError::external_service(
                    IDENTITY_SERVICE,
                    format!("token-info request failed: {err}"),
                )
            })?;

        let status = response.status();
        if status.is_client_error() {
            tracing::debug!(%status, "Identity provider rejected token");
            return Err(CoveError::forbidden("token rejected by identity provider"));
        }
        if !status.is_success() {
            return Err(CoveError::external_service(
                IDENTITY_SERVICE,
                format!("token-info endpoint returned {status}"),
            ));
        }

        let info: TokenInfoResponse = response.json().await.map_err(|err| {
            CoveError::external_service(
                IDENTITY_SERVICE,
                format!("malformed token-info response: {err}"),
            )
        })?;

        Ok(VerifiedIdentity {
            subject: info.sub,
            email: info.email,
            display_name: info.name,
            email_verified: info.email_verified,
        })
    }
}

/// Verifier over a fixed token -> identity table.
#[derive(Default)]
pub struct StaticIdentityVerifier {
    identities: HashMap<String, VerifiedIdentity>,
}

impl StaticIdentityVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token and the identity it should verify as.
    pub fn with_token(mut self, token: impl Into<String>, identity: VerifiedIdentity) -> Self {
        self.identities.insert(token.into(), identity);
        self
    }
}

#[async_trait::async_trait]
impl IdentityVerifier for StaticIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity> {
        self.identities
            .get(token)
            .cloned()
            .ok_or_else(|| CoveError::forbidden("unknown token"))
    }
}
