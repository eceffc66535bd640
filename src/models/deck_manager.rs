//! Deck state for a study session: the loaded cards, which one is shown,
//! and whether its back is revealed.
//!
//! Deck content (import, shuffle, clear) is written through to the store.
//! Cursor and flip state are view state and never persisted.

use super::{Card, DisplayState, Intent, StatusMessage};
use crate::database::{DeckStore, STORAGE_KEY, StoreError};
use crate::export::json::{ImportError, parse_deck};
use rand::Rng;
use tracing::{debug, info, warn};

/// Owns the deck and its durable store.
pub struct DeckManager<S: DeckStore> {
    cards: Vec<Card>,
    cursor: usize,
    flipped: bool,
    status: Option<StatusMessage>,
    store: S,
}

impl<S: DeckStore> DeckManager<S> {
    /// Creates a manager with an empty deck. Nothing is read from `store`.
    pub fn new(store: S) -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            flipped: false,
            status: None,
            store,
        }
    }

    /// Creates a manager and restores whatever deck `store` holds.
    pub fn restored(store: S) -> Self {
        let mut manager = Self::new(store);
        manager.restore();
        manager
    }

    /// Loads the persisted deck, if any.
    ///
    /// A missing key, an empty array, an unreadable store and corrupt data all
    /// end in an empty deck. Failures are logged and never returned.
    pub fn restore(&mut self) {
        self.cards = match self.load_persisted() {
            Ok(Some(cards)) => {
                info!(count = cards.len(), "restored saved deck");
                cards
            }
            Ok(None) => {
                debug!("no saved deck");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to load saved cards, starting empty");
                Vec::new()
            }
        };
        self.cursor = 0;
        self.flipped = false;
    }

    fn load_persisted(&self) -> Result<Option<Vec<Card>>, RestoreError> {
        let Some(raw) = self.store.load(STORAGE_KEY)? else {
            return Ok(None);
        };
        let cards: Vec<Card> = serde_json::from_str(&raw).map_err(StoreError::from)?;
        if let Some(i) = cards.iter().position(|c| !c.is_valid()) {
            return Err(RestoreError::InvalidCard { index: i + 1 });
        }
        Ok(Some(cards))
    }

    /// Validates `raw` and, only if every rule passes, replaces the deck.
    ///
    /// Returns the number of imported cards. On error the deck, cursor and
    /// store are left exactly as they were.
    pub fn import_deck(&mut self, raw: &str) -> Result<usize, ImportError> {
        match parse_deck(raw) {
            Ok(cards) => {
                let count = cards.len();
                self.cards = cards;
                self.cursor = 0;
                self.flipped = false;
                self.persist();
                info!(count, "imported deck");
                self.status = Some(StatusMessage::success(format!("✓ Imported {count} cards!")));
                Ok(count)
            }
            Err(e) => {
                debug!(error = %e, "rejected import");
                self.status = Some(StatusMessage::error(format!("Error: {e}")));
                Err(e)
            }
        }
    }

    /// Whether clearing would discard cards and so needs the user's consent
    pub fn needs_clear_confirmation(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Empties the deck and removes the persisted entry.
    ///
    /// An unconfirmed clear of a non-empty deck does nothing and returns
    /// `false`. An empty deck is cleared without confirmation.
    pub fn clear_deck(&mut self, confirmed: bool) -> bool {
        if self.needs_clear_confirmation() && !confirmed {
            debug!("clear declined");
            return false;
        }

        self.cards.clear();
        self.cursor = 0;
        self.flipped = false;
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to remove saved deck");
        }
        info!("deck cleared");
        self.status = Some(StatusMessage::success("Deck cleared."));
        true
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Moves to the next card, wrapping to the first
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
        self.flipped = false;
    }

    /// Moves to the previous card, wrapping to the last
    pub fn previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let len = self.cards.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.flipped = false;
    }

    /// Shuffles with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Fisher-Yates shuffle: every ordering is equally likely.
    /// Decks with fewer than two cards are left alone.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        if self.cards.len() < 2 {
            return;
        }

        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }

        self.cursor = 0;
        self.flipped = false;
        self.persist();
        debug!(count = self.cards.len(), "shuffled deck");
    }

    /// Runs the operation behind a user intent.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Import(raw) => {
                let _ = self.import_deck(&raw);
            }
            Intent::Clear { confirmed } => {
                self.clear_deck(confirmed);
            }
            Intent::Flip => self.flip(),
            Intent::Next => self.next(),
            Intent::Previous => self.previous(),
            Intent::Shuffle => self.shuffle(),
        }
    }

    /// Writes the deck to the store. Failures only cost durability.
    fn persist(&mut self) {
        let result = serde_json::to_string(&self.cards)
            .map_err(StoreError::from)
            .and_then(|json| self.store.save(STORAGE_KEY, &json));
        if let Err(e) = result {
            warn!(error = %e, "failed to save deck");
        }
    }

    pub fn display(&self) -> DisplayState {
        match self.cards.get(self.cursor) {
            Some(card) => DisplayState {
                has_cards: true,
                position: Some((self.cursor + 1, self.cards.len())),
                front_text: card.front.clone(),
                back_text: card.back.clone(),
                flipped: self.flipped,
            },
            None => DisplayState::default(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[derive(Debug, thiserror::Error)]
enum RestoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("saved card {index} has an empty side")]
    InvalidCard { index: usize },
}
