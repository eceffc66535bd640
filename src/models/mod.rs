pub mod card;
pub mod deck_manager;
pub mod display;
pub mod intent;

pub use card::Card;
pub use deck_manager::DeckManager;
pub use display::{DisplayState, StatusKind, StatusMessage};
pub use intent::Intent;
