//! In-memory [`EmojiStore`] for unit tests that don't need SQLite.

use std::sync::Mutex;

use anyhow::Result;

use naija_db::EmojiStore;
use naija_db::models::{EmojiRow, NewEmoji};

#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<EmojiRow>>,
}

impl MemoryStore {
    pub fn seed(&self, id: i64, name: &str, chars: &str, created_by: &str) {
        self.rows.lock().unwrap().push(EmojiRow {
            id,
            name: name.to_string(),
            chars: chars.to_string(),
            category: "category A".to_string(),
            created_by: created_by.to_string(),
            created_at: "2016-01-01 00:00:00".to_string(),
            updated_at: "2016-01-01 00:00:00".to_string(),
            keywords: Vec::new(),
        });
    }

    pub fn get(&self, id: i64) -> Option<EmojiRow> {
        self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }

    fn with_row(&self, id: i64, f: impl FnOnce(&mut EmojiRow)) {
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|r| r.id == id) {
            f(row);
        }
    }
}

fn push_row(rows: &mut Vec<EmojiRow>, emoji: &NewEmoji<'_>) -> i64 {
    let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    rows.push(EmojiRow {
        id,
        name: emoji.name.to_string(),
        chars: emoji.chars.to_string(),
        category: emoji.category.to_string(),
        created_by: emoji.created_by.to_string(),
        created_at: String::new(),
        updated_at: String::new(),
        keywords: emoji.keywords.to_vec(),
    });
    id
}

impl EmojiStore for MemoryStore {
    fn list_emojis(&self) -> Result<Vec<EmojiRow>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn find_emoji(&self, id: i64) -> Result<Option<EmojiRow>> {
        Ok(self.get(id))
    }

    fn find_emoji_by_name_or_chars(&self, name: &str, chars: &str) -> Result<Option<EmojiRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.name.to_lowercase() == name.to_lowercase() || r.chars == chars)
            .cloned())
    }

    fn insert_emoji(&self, emoji: &NewEmoji<'_>) -> Result<i64> {
        Ok(push_row(&mut self.rows.lock().unwrap(), emoji))
    }

    fn insert_emoji_if_unique(&self, emoji: &NewEmoji<'_>) -> Result<Option<i64>> {
        let mut rows = self.rows.lock().unwrap();
        let taken = rows
            .iter()
            .any(|r| r.name.to_lowercase() == emoji.name.to_lowercase() || r.chars == emoji.chars);
        if taken {
            return Ok(None);
        }
        Ok(Some(push_row(&mut rows, emoji)))
    }

    fn update_emoji(&self, id: i64, name: &str, chars: &str, category: &str) -> Result<()> {
        self.with_row(id, |row| {
            row.name = name.to_string();
            row.chars = chars.to_string();
            row.category = category.to_string();
        });
        Ok(())
    }

    fn rename_emoji(&self, id: i64, name: &str) -> Result<()> {
        self.with_row(id, |row| row.name = name.to_string());
        Ok(())
    }

    fn delete_emoji(&self, id: i64) -> Result<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}
