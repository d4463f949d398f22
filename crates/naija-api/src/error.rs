use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use naija_types::api::MessageResponse;

/// Every way a request can fail. The `Display` text is exactly what the
/// client sees in the `{"message": ...}` body, except for `Internal`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User unauthorized due to empty token")]
    MissingToken,

    #[error("User unauthorized due to invalid token")]
    InvalidToken,

    #[error("Required fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("All fields must be provided.")]
    EmptyFields,

    #[error("Unwanted fields must be removed")]
    UnwantedFields(Vec<String>),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("The emoji already exist in the database.")]
    DuplicateEmoji,

    #[error("The id supplied must be an integer.")]
    InvalidId,

    #[error("The requested Emoji is not found.")]
    EmojiNotFound,

    #[error("Action cannot be performed because you are not the creator")]
    NotCreator,

    #[error("Oops, No Emoji to display")]
    NoEmojis,

    #[error("Username or Password field not valid.")]
    InvalidCredentials,

    #[error("Username already exists.")]
    UsernameTaken,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken
            | Self::InvalidToken
            | Self::MissingFields(_)
            | Self::EmptyFields
            | Self::InvalidId
            | Self::NotCreator => StatusCode::UNAUTHORIZED,
            Self::UnwantedFields(_)
            | Self::MalformedBody(_)
            | Self::DuplicateEmoji
            | Self::InvalidCredentials
            | Self::UsernameTaken => StatusCode::BAD_REQUEST,
            Self::EmojiNotFound | Self::NoEmojis | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(e) = &self {
            error!("Internal error: {:#}", e);
        }

        (self.status(), Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
