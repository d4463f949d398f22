use anyhow::Result;

use crate::models::{EmojiRow, NewEmoji};

/// Typed emoji persistence operations.
///
/// Handlers, validation and ownership checks only talk to this trait, so they
/// can be exercised against an in-memory fake as well as [`crate::Database`].
pub trait EmojiStore: Send + Sync {
    fn list_emojis(&self) -> Result<Vec<EmojiRow>>;

    fn find_emoji(&self, id: i64) -> Result<Option<EmojiRow>>;

    /// First emoji whose name matches case-insensitively OR whose chars match exactly.
    fn find_emoji_by_name_or_chars(&self, name: &str, chars: &str) -> Result<Option<EmojiRow>>;

    /// Inserts the emoji and its keywords atomically, returning the new id.
    fn insert_emoji(&self, emoji: &NewEmoji<'_>) -> Result<i64>;

    /// Runs the duplicate lookup and the insert in one transaction. Returns
    /// `None` without writing anything when the name or chars are taken.
    fn insert_emoji_if_unique(&self, emoji: &NewEmoji<'_>) -> Result<Option<i64>>;

    fn update_emoji(&self, id: i64, name: &str, chars: &str, category: &str) -> Result<()>;

    fn rename_emoji(&self, id: i64, name: &str) -> Result<()>;

    /// Deletes the emoji together with its keywords.
    fn delete_emoji(&self, id: i64) -> Result<()>;
}
