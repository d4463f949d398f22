use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::{debug, info};

use naija_types::api::{Claims, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

use crate::error::ApiError;
use crate::state::{AppState, with_db};
use crate::validation::{self, LOGIN_FIELDS, REGISTER_FIELDS};

/// GET /
pub async fn index() -> impl IntoResponse {
    Json(MessageResponse::new("Welcome to Naija Emoji Service"))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = validation::json_object(body)?;
    validation::check_shape(&body, REGISTER_FIELDS)?;
    validation::check_not_empty(&body, REGISTER_FIELDS)?;
    let req: RegisterRequest = validation::decode(body)?;

    let username = req.username.trim().to_string();
    let user_id = with_db(&state, move |db| {
        if db.get_user_by_username(&username)?.is_some() {
            return Err(ApiError::UsernameTaken);
        }

        let password_hash = hash_password(&req.password)?;
        Ok(db.create_user(&username, req.fullname.trim(), &password_hash)?)
    })
    .await?;

    info!("User {} registered", user_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User successfully created.")),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = validation::json_object(body)?;
    validation::check_shape(&body, LOGIN_FIELDS)?;
    validation::check_not_empty(&body, LOGIN_FIELDS)?;
    let req: LoginRequest = validation::decode(body)?;

    let username = req.username.trim().to_string();
    let user = with_db(&state, move |db| {
        let user = db
            .get_user_by_username(&username)?
            .ok_or(ApiError::InvalidCredentials)?;

        // Argon2 is CPU-heavy, keep it on the blocking pool too
        verify_password(&req.password, &user.password)?;
        Ok(user)
    })
    .await?;

    let token = state.gate.issue(&user.username)?;
    info!("User {} logged in", user.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// GET /auth/logout. Tokens are stateless, so this only confirms the token
/// is still good.
pub async fn logout(Extension(claims): Extension<Claims>) -> impl IntoResponse {
    debug!("User {} logged out", claims.username());
    Json(MessageResponse::new("Logged out successfully"))
}

/// Hash a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))
}

fn verify_password(password: &str, stored: &str) -> Result<(), ApiError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| anyhow::anyhow!("stored password hash is unreadable: {}", e))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApiError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("test").unwrap();
        let second = hash_password("test").unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(verify_password("test", &first).is_ok());
        assert!(matches!(verify_password("xxxx", &first), Err(ApiError::InvalidCredentials)));
    }

    #[test]
    fn plaintext_in_store_is_an_internal_error() {
        assert!(matches!(verify_password("test", "test"), Err(ApiError::Internal(_))));
    }
}
