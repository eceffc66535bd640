use flashcard_deck::{Card, DeckManager, DeckStore, STORAGE_KEY, SqliteStore};

const TWO_CARDS: &str = r#"[{"front":"A","back":"1"},{"front":"B","back":"2"}]"#;

#[test]
fn test_study_session_walkthrough() {
    let mut deck = DeckManager::new(SqliteStore::open_in_memory().unwrap());

    deck.import_deck(TWO_CARDS).unwrap();
    assert_eq!(deck.cards().len(), 2);
    assert_eq!(deck.cursor(), 0);

    deck.next();
    assert_eq!(deck.cursor(), 1);
    assert!(!deck.is_flipped());

    deck.flip();
    assert!(deck.is_flipped());

    deck.previous();
    assert_eq!(deck.cursor(), 0);
    assert!(!deck.is_flipped());

    assert!(deck.clear_deck(true));
    assert!(deck.is_empty());
    assert_eq!(deck.store().load(STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_deck_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.sqlite3");

    let shuffled: Vec<Card> = {
        let mut deck = DeckManager::restored(SqliteStore::open(&path).unwrap());
        assert!(deck.is_empty());
        deck.import_deck(TWO_CARDS).unwrap();
        deck.shuffle();
        deck.next();
        deck.cards().to_vec()
    };

    let deck = DeckManager::restored(SqliteStore::open(&path).unwrap());
    assert_eq!(deck.cards(), shuffled.as_slice());
    assert_eq!(deck.cursor(), 0);
    assert!(!deck.is_flipped());
}

#[test]
fn test_cleared_deck_stays_cleared_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.sqlite3");

    {
        let mut deck = DeckManager::new(SqliteStore::open(&path).unwrap());
        deck.import_deck(TWO_CARDS).unwrap();
        assert!(deck.clear_deck(true));
    }

    let deck = DeckManager::restored(SqliteStore::open(&path).unwrap());
    assert!(deck.is_empty());
    assert!(!deck.display().has_cards);
}

#[test]
fn test_corrupt_saved_deck_does_not_block_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.sqlite3");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.save(STORAGE_KEY, "[{\"front\":").unwrap();
    }

    let mut deck = DeckManager::restored(SqliteStore::open(&path).unwrap());
    assert!(deck.is_empty());

    deck.import_deck(TWO_CARDS).unwrap();
    assert_eq!(deck.cards().len(), 2);
}
