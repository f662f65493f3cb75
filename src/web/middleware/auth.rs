//! JWT authentication middleware.
//!
//! Handlers that require a logged-in user take the [`RequireUser`]
//! extractor. Unauthenticated requests are redirected to the login
//! page with the original URL carried in the `next` query parameter.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::web::error::ApiError;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Username.
    pub username: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// Application state for JWT authentication.
#[derive(Clone)]
pub struct JwtState {
    /// Decoding key for JWT verification.
    pub decoding_key: DecodingKey,
    /// Validation settings.
    pub validation: Validation,
    /// Path unauthenticated requests are redirected to.
    pub login_path: String,
}

impl JwtState {
    /// Create a new JWT state from a secret key and login path.
    pub fn new(secret: &str, login_path: impl Into<String>) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
            login_path: login_path.into(),
        }
    }

    /// Build the redirect target for an unauthenticated request.
    pub fn login_redirect(&self, next: &str) -> String {
        format!("{}?next={}", self.login_path, urlencoding::encode(next))
    }
}

/// Extractor for handlers that require a logged-in user.
///
/// Requests without a valid Bearer token are answered with a redirect
/// to the login page instead of an error body.
#[derive(Debug, Clone)]
pub struct RequireUser(pub JwtClaims);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let jwt_state = parts
                .extensions
                .get::<Arc<JwtState>>()
                .cloned()
                .ok_or_else(|| {
                    ApiError::internal("JWT state not configured").into_response()
                })?;

            let next = parts
                .uri
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| "/".to_string());
            let redirect =
                || Redirect::to(&jwt_state.login_redirect(&next)).into_response();

            // Bearer token from the Authorization header
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "))
                .ok_or_else(|| redirect())?;

            let token_data =
                decode::<JwtClaims>(token, &jwt_state.decoding_key, &jwt_state.validation)
                    .map_err(|e| {
                        tracing::debug!("JWT validation failed: {}", e);
                        redirect()
                    })?;

            Ok(RequireUser(token_data.claims))
        })
    }
}

/// Middleware function to inject JWT state into request extensions.
pub async fn jwt_auth(
    jwt_state: Arc<JwtState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(jwt_state);
    next.run(request).await
}
