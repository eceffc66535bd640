//! Read-only views handed to the presentation layer

/// What the card area should show right now
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub has_cards: bool,
    /// 1-based position and deck size; `None` for an empty deck
    pub position: Option<(usize, usize)>,
    pub front_text: String,
    pub back_text: String,
    pub flipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Latest outcome message; each new one replaces the previous
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}
