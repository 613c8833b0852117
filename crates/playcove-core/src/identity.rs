//! Identity verification seam.
//!
//! The platform never verifies credentials itself; it consumes a verified
//! identity assertion produced by an external provider. The trait lives here
//! so services and the HTTP layer depend only on the contract.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identity assertion produced by the external provider for a valid token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// Provider-scoped subject id
    pub subject: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

/// External collaborator that turns a bearer token into a verified identity.
///
/// # Errors
///
/// `Forbidden` for tokens the provider rejects; `ExternalService` when the
/// provider itself is unreachable or erroring.
#[async_trait::async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity>;
}
