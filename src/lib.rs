pub mod config;
pub mod database;
pub mod export;
pub mod models;

pub use config::AppConfig;
pub use database::{DeckStore, MemoryStore, STORAGE_KEY, SqliteStore};
pub use models::{Card, DeckManager, DisplayState, Intent, StatusMessage};
