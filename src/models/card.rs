//! Card is a pair <front, back>. Only text is used on either side
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Both sides must carry text
    pub fn is_valid(&self) -> bool {
        !self.front.is_empty() && !self.back.is_empty()
    }
}
