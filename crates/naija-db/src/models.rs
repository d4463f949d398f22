/// Database row types. These map directly to SQLite rows.
/// Distinct from naija-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub fullname: String,
    pub password: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRow {
    pub id: i64,
    pub name: String,
    pub chars: String,
    pub category: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
    /// Keyword names from the `keywords` table, in insertion order.
    pub keywords: Vec<String>,
}

/// Insert payload for a new emoji and its keywords.
#[derive(Debug, Clone)]
pub struct NewEmoji<'a> {
    pub name: &'a str,
    pub chars: &'a str,
    pub category: &'a str,
    pub created_by: &'a str,
    pub keywords: &'a [String],
}
