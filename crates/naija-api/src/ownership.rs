use naija_db::EmojiStore;
use naija_db::models::EmojiRow;

use crate::error::ApiError;

/// Path ids must be plain non-negative integers: no sign, no whitespace.
///
/// A well-formed id too large for `i64` cannot name a stored row, so it is
/// reported as not found rather than malformed.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId);
    }
    raw.parse().map_err(|_| ApiError::EmojiNotFound)
}

/// Resolves the emoji behind `raw_id` and checks that `username` created it.
///
/// Checks run in order (id format, existence, creator) and stop at the first
/// failure.
pub fn resolve_owned<S>(store: &S, raw_id: &str, username: &str) -> Result<EmojiRow, ApiError>
where
    S: EmojiStore + ?Sized,
{
    let id = parse_id(raw_id)?;
    let emoji = store.find_emoji(id)?.ok_or(ApiError::EmojiNotFound)?;

    if emoji.created_by != username {
        return Err(ApiError::NotCreator);
    }

    Ok(emoji)
}
