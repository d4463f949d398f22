//! Payload checks shared by the emoji and auth handlers.
//!
//! Handlers run them in a fixed order: [`json_object`], [`check_shape`],
//! [`check_not_empty`] (create paths only), [`decode`], then
//! [`insert_unique`] once a store is at hand. The first failure wins.

use axum::{Json, extract::rejection::JsonRejection};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use naija_db::EmojiStore;
use naija_db::models::NewEmoji;

use crate::error::ApiError;

pub const CREATE_FIELDS: &[&str] = &["name", "chars", "category", "keywords"];
pub const UPDATE_FIELDS: &[&str] = &["name", "chars", "category"];
pub const PATCH_FIELDS: &[&str] = &["name"];
pub const REGISTER_FIELDS: &[&str] = &["fullname", "username", "password"];
pub const LOGIN_FIELDS: &[&str] = &["username", "password"];

pub type Body = Map<String, Value>;

/// Unwraps the JSON extractor, insisting on a top-level object.
pub fn json_object(body: Result<Json<Value>, JsonRejection>) -> Result<Body, ApiError> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(ApiError::MalformedBody("expected a JSON object".into())),
        Err(rejection) => Err(ApiError::MalformedBody(rejection.body_text())),
    }
}

/// Every allowed field must be present and nothing else may be.
pub fn check_shape(body: &Body, allowed: &[&str]) -> Result<(), ApiError> {
    let missing: Vec<String> = allowed
        .iter()
        .filter(|field| !body.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let unwanted: Vec<String> = body
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();
    if !unwanted.is_empty() {
        return Err(ApiError::UnwantedFields(unwanted));
    }

    Ok(())
}

/// Absent, `null` and whitespace-only values all count as empty.
pub fn check_not_empty(body: &Body, required: &[&str]) -> Result<(), ApiError> {
    let any_empty = required.iter().any(|field| match body.get(*field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    });

    if any_empty { Err(ApiError::EmptyFields) } else { Ok(()) }
}

pub fn decode<T: DeserializeOwned>(body: Body) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Rejects a new emoji whose name (any case) or chars already exist.
/// Inserts `emoji` unless its name (case-insensitive) or chars are taken.
/// The lookup and the insert happen under one store transaction.
pub fn insert_unique<S>(store: &S, emoji: &NewEmoji<'_>) -> Result<i64, ApiError>
where
    S: EmojiStore + ?Sized,
{
    store.insert_emoji_if_unique(emoji)?.ok_or(ApiError::DuplicateEmoji)
}

/// `"sad, happy,,"` -> `["sad", "happy"]`.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
