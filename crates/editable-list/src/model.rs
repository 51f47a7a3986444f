//! In-memory item list backing the rendered rows.
//!
//! # Design
//! - The list is the source of truth; the DOM mirrors it row for row.
//! - Ids are never reused within an instance, so stale remove clicks cannot hit a
//!   newer row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a list row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Numeric value, used as the row's `data-item-id`.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single row of the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Row identifier.
    pub id: ItemId,
    /// Display text, kept verbatim.
    pub text: String,
}

/// Ordered collection of item records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemList {
    records: Vec<ItemRecord>,
    next_id: u64,
}

impl ItemList {
    /// Seed a list from initial item texts, preserving order.
    #[must_use]
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for text in texts {
            list.append(text.into());
        }
        list
    }

    /// Append a row when `text` is non-empty.
    ///
    /// Whitespace-only text counts as non-empty.
    pub fn push(&mut self, text: &str) -> Option<&ItemRecord> {
        if text.is_empty() {
            return None;
        }
        Some(self.append(text.to_string()))
    }

    fn append(&mut self, text: String) -> &ItemRecord {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.records.push(ItemRecord { id, text });
        &self.records[self.records.len() - 1]
    }

    /// Remove the row with `id`, returning it when present.
    pub fn remove(&mut self, id: ItemId) -> Option<ItemRecord> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// Row by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&ItemRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRecord> {
        self.records.iter()
    }

    /// Row texts in display order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.text.as_str()).collect()
    }
}
