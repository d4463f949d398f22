use serde::{Deserialize, Serialize};

// -- JWT Claims --

/// Claims carried by every bearer token. The caller's identity lives under
/// `data.username`; the API trusts it verbatim once the signature checks out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    pub data: ClaimsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsData {
    pub username: String,
}

impl Claims {
    pub fn username(&self) -> &str {
        &self.data.username
    }
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub fullname: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

// -- Emojis --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEmojiRequest {
    pub name: String,
    pub chars: String,
    pub category: String,
    /// Comma-separated keyword list, e.g. `"sad, happy"`.
    pub keywords: String,
}

/// Body of `PUT /emojis/{id}`: replaces every mutable column.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmojiRequest {
    pub name: String,
    pub chars: String,
    pub category: String,
}

/// Body of `PATCH /emojis/{id}`: only the name can be patched.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchEmojiRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiResponse {
    pub id: i64,
    pub name: String,
    pub chars: String,
    pub category: String,
    pub created_by: String,
    pub keywords: Vec<String>,
}

// -- Generic --

/// `{"message": ...}` body used for confirmations and every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
