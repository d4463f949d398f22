use std::collections::HashMap;

use crate::models::{EmojiRow, NewEmoji, UserRow};
use crate::{Database, EmojiStore};
use anyhow::Result;
use rusqlite::{Connection, Row};

const EMOJI_COLUMNS: &str = "id, name, chars, category, created_by, created_at, updated_at";

impl Database {
    // -- Users --

    pub fn create_user(&self, username: &str, fullname: &str, password_hash: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (username, fullname, password) VALUES (?1, ?2, ?3)",
                (username, fullname, password_hash),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_username(conn, username))
    }
}

impl EmojiStore for Database {
    fn list_emojis(&self) -> Result<Vec<EmojiRow>> {
        self.with_conn(query_all_emojis)
    }

    fn find_emoji(&self, id: i64) -> Result<Option<EmojiRow>> {
        self.with_conn(|conn| query_emoji_by_id(conn, id))
    }

    fn find_emoji_by_name_or_chars(&self, name: &str, chars: &str) -> Result<Option<EmojiRow>> {
        self.with_conn(|conn| query_emoji_by_name_or_chars(conn, name, chars))
    }

    fn insert_emoji(&self, emoji: &NewEmoji<'_>) -> Result<i64> {
        self.with_conn(|conn| {
            // Emoji and keywords land together or not at all
            let tx = conn.unchecked_transaction()?;
            let id = insert_emoji_rows(&tx, emoji)?;
            tx.commit()?;
            Ok(id)
        })
    }

    fn insert_emoji_if_unique(&self, emoji: &NewEmoji<'_>) -> Result<Option<i64>> {
        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            if query_emoji_by_name_or_chars(&tx, emoji.name, emoji.chars)?.is_some() {
                return Ok(None);
            }

            let id = insert_emoji_rows(&tx, emoji)?;
            tx.commit()?;
            Ok(Some(id))
        })
    }

    fn update_emoji(&self, id: i64, name: &str, chars: &str, category: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE emojis
                 SET name = ?2, chars = ?3, category = ?4, updated_at = datetime('now')
                 WHERE id = ?1",
                rusqlite::params![id, name, chars, category],
            )?;
            Ok(())
        })
    }

    fn rename_emoji(&self, id: i64, name: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE emojis SET name = ?2, updated_at = datetime('now') WHERE id = ?1",
                rusqlite::params![id, name],
            )?;
            Ok(())
        })
    }

    fn delete_emoji(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            tx.execute("DELETE FROM keywords WHERE emoji_id = ?1", [id])?;
            tx.execute("DELETE FROM emojis WHERE id = ?1", [id])?;
            tx.commit()?;
            Ok(())
        })
    }
}

fn query_user_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, fullname, password, created_at, updated_at FROM users WHERE username = ?1",
    )?;

    let row = stmt
        .query_row([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                fullname: row.get(2)?,
                password: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_emoji_by_id(conn: &Connection, id: i64) -> Result<Option<EmojiRow>> {
    let sql = format!("SELECT {EMOJI_COLUMNS} FROM emojis WHERE id = ?1");
    let row = conn.query_row(&sql, [id], emoji_from_row).optional()?;

    match row {
        Some(mut emoji) => {
            emoji.keywords = query_keywords(conn, id)?;
            Ok(Some(emoji))
        }
        None => Ok(None),
    }
}

fn query_emoji_by_name_or_chars(conn: &Connection, name: &str, chars: &str) -> Result<Option<EmojiRow>> {
    let sql = format!(
        "SELECT {EMOJI_COLUMNS} FROM emojis
         WHERE lower(name) = lower(?1) OR chars = ?2
         ORDER BY id LIMIT 1"
    );
    let row = conn.query_row(&sql, [name, chars], emoji_from_row).optional()?;

    match row {
        Some(mut emoji) => {
            emoji.keywords = query_keywords(conn, emoji.id)?;
            Ok(Some(emoji))
        }
        None => Ok(None),
    }
}

fn insert_emoji_rows(conn: &Connection, emoji: &NewEmoji<'_>) -> Result<i64> {
    conn.execute(
        "INSERT INTO emojis (name, chars, category, created_by) VALUES (?1, ?2, ?3, ?4)",
        (emoji.name, emoji.chars, emoji.category, emoji.created_by),
    )?;
    let id = conn.last_insert_rowid();

    let mut stmt = conn.prepare("INSERT INTO keywords (emoji_id, name) VALUES (?1, ?2)")?;
    for keyword in emoji.keywords {
        stmt.execute(rusqlite::params![id, keyword])?;
    }

    Ok(id)
}

fn query_all_emojis(conn: &Connection) -> Result<Vec<EmojiRow>> {
    let sql = format!("SELECT {EMOJI_COLUMNS} FROM emojis ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let mut emojis = stmt
        .query_map([], emoji_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // One pass over keywords instead of a query per emoji
    let mut stmt = conn.prepare("SELECT emoji_id, name FROM keywords ORDER BY id")?;
    let mut by_emoji: HashMap<i64, Vec<String>> = HashMap::new();
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
    for row in rows {
        let (emoji_id, name) = row?;
        by_emoji.entry(emoji_id).or_default().push(name);
    }

    for emoji in &mut emojis {
        emoji.keywords = by_emoji.remove(&emoji.id).unwrap_or_default();
    }

    Ok(emojis)
}

fn query_keywords(conn: &Connection, emoji_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM keywords WHERE emoji_id = ?1 ORDER BY id")?;
    let names = stmt
        .query_map([emoji_id], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;
    Ok(names)
}

fn emoji_from_row(row: &Row<'_>) -> rusqlite::Result<EmojiRow> {
    Ok(EmojiRow {
        id: row.get(0)?,
        name: row.get(1)?,
        chars: row.get(2)?,
        category: row.get(3)?,
        created_by: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
        keywords: Vec::new(),
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
