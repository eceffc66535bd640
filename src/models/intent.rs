//! Discrete user intents the presentation layer forwards to the deck.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Import(String),
    Clear { confirmed: bool },
    Flip,
    Next,
    Previous,
    Shuffle,
}
