//! Emoji catalog.
//!
//! The catalog is the ordered, immutable list of entries the picker shows.
//! It is built once at startup, either from the built-in five entries or
//! from a `[[catalog]]` list in the config file, and never mutated after.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Stable identifier of a catalog entry
pub type EntryId = u32;

/// A single selectable emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiEntry {
    pub id: EntryId,
    pub name: String,
    pub glyph: String,
}

impl EmojiEntry {
    pub fn new(id: EntryId, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// Catalog validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one entry")]
    Empty,
    #[error("duplicate catalog id {0}")]
    DuplicateId(EntryId),
    #[error("catalog entry {0} has an empty glyph")]
    EmptyGlyph(EntryId),
}

/// Ordered, read-only list of emoji entries with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<EmojiEntry>,
}

impl Catalog {
    /// The five entries the picker ships with
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                EmojiEntry::new(1, "good", "👌"),
                EmojiEntry::new(2, "perfect", "💯"),
                EmojiEntry::new(3, "smile", "😊"),
                EmojiEntry::new(4, "love", "❤️"),
                EmojiEntry::new(5, "star", "⭐"),
            ],
        }
    }

    /// Build a catalog from user-supplied entries, keeping their order
    pub fn new(entries: Vec<EmojiEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if entry.glyph.trim().is_empty() {
                return Err(CatalogError::EmptyGlyph(entry.id));
            }
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmojiEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&EmojiEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Position of an entry in catalog order
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn entry_at(&self, index: usize) -> Option<&EmojiEntry> {
        self.entries.get(index)
    }
}
