//! Bearer-token extractors.
//!
//! Tokens are handed to the external identity collaborator; this layer never
//! inspects them beyond stripping the `Bearer ` prefix.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use playcove_core::identity::VerifiedIdentity;
use playcove_core::user::User;

use crate::error::ApiError;
use crate::state::AppState;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

async fn verify(parts: &Parts, state: &AppState) -> Result<VerifiedIdentity, ApiError> {
    let token =
        bearer_token(parts).ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;
    state.identity.verify(token).await.map_err(|err| {
        if err.is_forbidden() {
            ApiError::unauthorized("invalid token")
        } else {
            ApiError::from(err)
        }
    })
}

/// A verified identity that may or may not have a profile yet.
/// Used by registration, where requiring an existing user would deadlock.
pub struct Verified(pub VerifiedIdentity);

impl FromRequestParts<AppState> for Verified {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        Ok(Verified(verify(parts, state).await?))
    }
}

/// The authenticated user behind the request.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let identity = verify(parts, state).await?;
        let user = state
            .users
            .find_by_subject(&identity.subject)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| {
                ApiError::from(playcove_core::CoveError::not_found("user", identity.subject))
            })?;
        Ok(CurrentUser(user))
    }
}

/// The authenticated user, if the request carried credentials.
///
/// Requests without an `Authorization` header resolve to `None`; a header
/// with a bad token is still a 401.
pub struct MaybeUser(pub Option<User>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        if bearer_token(parts).is_none() {
            return Ok(MaybeUser(None));
        }

        let identity = verify(parts, state).await?;
        let user = state
            .users
            .find_by_subject(&identity.subject)
            .await
            .map_err(ApiError::from)?;
        Ok(MaybeUser(user))
    }
}
