use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tracing::info;

use naija_db::EmojiStore;
use naija_db::models::{EmojiRow, NewEmoji};
use naija_types::api::{
    Claims, CreateEmojiRequest, EmojiResponse, MessageResponse, PatchEmojiRequest,
    UpdateEmojiRequest,
};

use crate::error::ApiError;
use crate::ownership;
use crate::state::{AppState, with_db};
use crate::validation::{self, CREATE_FIELDS, PATCH_FIELDS, UPDATE_FIELDS};

fn to_response(row: EmojiRow) -> EmojiResponse {
    EmojiResponse {
        id: row.id,
        name: row.name,
        chars: row.chars,
        category: row.category,
        created_by: row.created_by,
        keywords: row.keywords,
    }
}

/// GET /emojis
pub async fn list_emojis(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = with_db(&state, |db| Ok(db.list_emojis()?)).await?;

    if rows.is_empty() {
        return Err(ApiError::NoEmojis);
    }

    Ok(Json(rows.into_iter().map(to_response).collect::<Vec<_>>()))
}

/// GET /emojis/{id}
pub async fn get_emoji(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ownership::parse_id(&raw_id)?;
    let row = with_db(&state, move |db| db.find_emoji(id)?.ok_or(ApiError::EmojiNotFound)).await?;

    Ok(Json(to_response(row)))
}

/// POST /emojis. The caller becomes the creator.
pub async fn create_emoji(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = validation::json_object(body)?;
    validation::check_shape(&body, CREATE_FIELDS)?;
    validation::check_not_empty(&body, CREATE_FIELDS)?;
    let req: CreateEmojiRequest = validation::decode(body)?;

    let name = req.name.to_lowercase();
    let keywords = validation::split_keywords(&req.keywords);
    if keywords.is_empty() {
        return Err(ApiError::EmptyFields);
    }
    let created_by = claims.username().to_string();

    let id = with_db(&state, move |db| {
        validation::insert_unique(
            db,
            &NewEmoji {
                name: &name,
                chars: &req.chars,
                category: &req.category,
                created_by: &created_by,
                keywords: &keywords,
            },
        )
    })
    .await?;

    info!("Emoji {} created by {}", id, claims.username());

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Emoji has been created successfully")),
    ))
}

/// PUT /emojis/{id}: replaces name, chars and category.
pub async fn update_emoji(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = validation::json_object(body)?;
    validation::check_shape(&body, UPDATE_FIELDS)?;
    let req: UpdateEmojiRequest = validation::decode(body)?;

    let username = claims.username().to_string();
    let id = with_db(&state, move |db| {
        let emoji = ownership::resolve_owned(db, &raw_id, &username)?;
        db.update_emoji(emoji.id, &req.name.to_lowercase(), &req.chars, &req.category)?;
        Ok(emoji.id)
    })
    .await?;

    info!("Emoji {} updated by {}", id, claims.username());

    Ok(Json(MessageResponse::new("Emoji has been updated successfully")))
}

/// PATCH /emojis/{id}: renames only.
pub async fn patch_emoji(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = validation::json_object(body)?;
    validation::check_shape(&body, PATCH_FIELDS)?;
    let req: PatchEmojiRequest = validation::decode(body)?;

    let username = claims.username().to_string();
    let id = with_db(&state, move |db| {
        let emoji = ownership::resolve_owned(db, &raw_id, &username)?;
        db.rename_emoji(emoji.id, &req.name.to_lowercase())?;
        Ok(emoji.id)
    })
    .await?;

    info!("Emoji {} renamed by {}", id, claims.username());

    Ok(Json(MessageResponse::new("Emoji has been updated successfully")))
}

/// DELETE /emojis/{id}. Keywords go with it.
pub async fn delete_emoji(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let username = claims.username().to_string();
    let id = with_db(&state, move |db| {
        let emoji = ownership::resolve_owned(db, &raw_id, &username)?;
        db.delete_emoji(emoji.id)?;
        Ok(emoji.id)
    })
    .await?;

    info!("Emoji {} deleted by {}", id, claims.username());

    Ok(Json(MessageResponse::new("Emoji successfully deleted.")))
}
