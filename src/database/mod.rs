//! Durable key-value storage for the deck.
//!
//! The deck lives under a single key as a JSON array of `{front, back}`
//! objects. `SqliteStore` backs the desktop app; `MemoryStore` backs tests.

pub mod db;
pub mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Key holding the serialized deck
pub const STORAGE_KEY: &str = "flashcards";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Write rejected for key {0}")]
    WriteRejected(String),
}

/// A string key-value store that survives restarts.
pub trait DeckStore {
    /// Returns `None` when the key is absent
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
