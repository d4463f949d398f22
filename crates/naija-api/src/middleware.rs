use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;
use uuid::Uuid;

use naija_types::api::{Claims, ClaimsData};

use crate::error::ApiError;
use crate::state::AppState;

/// Issues and verifies HS512 bearer tokens with a secret injected at
/// construction.
pub struct AuthGate {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    configured: bool,
}

impl AuthGate {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_nbf = true;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
            configured: !secret.trim().is_empty(),
        }
    }

    pub fn issue(&self, username: &str) -> anyhow::Result<String> {
        if !self.configured {
            anyhow::bail!("token secret is not configured");
        }

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            iat: now,
            nbf: now,
            exp: now + self.ttl_secs,
            jti: Some(Uuid::new_v4().to_string()),
            data: ClaimsData {
                username: username.to_string(),
            },
        };

        Ok(encode(&Header::new(Algorithm::HS512), &claims, &self.encoding)?)
    }

    /// Resolves the raw `Authorization` header value to the token's claims.
    /// Both `<jwt>` and `Bearer <jwt>` are accepted.
    pub fn verify(&self, authorization: Option<&str>) -> Result<Claims, ApiError> {
        let raw = authorization.map(str::trim).unwrap_or_default();
        let token = match raw.strip_prefix("Bearer") {
            Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim(),
            _ => raw,
        };
        if token.is_empty() {
            return Err(ApiError::MissingToken);
        }

        if !self.configured {
            debug!("Rejecting token: secret is not configured");
            return Err(ApiError::InvalidToken);
        }

        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejecting token: {}", e);
                ApiError::InvalidToken
            })
    }
}

/// Extract and validate the bearer token, then hand its claims to the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = match req.headers().get(header::AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| ApiError::InvalidToken)?),
        None => None,
    };

    let claims = state.gate.verify(authorization)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
