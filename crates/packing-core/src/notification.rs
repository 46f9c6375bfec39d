//! Clear-list guard and user notices
//!
//! Clearing an empty list only warns; clearing a populated list must be
//! confirmed by the user first.

use tracing::debug;

use crate::domain::Item;
use crate::store::ListStore;

/// How long a transient notice stays on screen
pub const NOTICE_AUTO_CLOSE_MS: u32 = 4000;

/// Question asked before a populated list is cleared
pub const CONFIRM_CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

/// Outcome of asking to clear the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearDecision {
    /// List already empty, show a warning and change nothing
    Warn,
    /// Ask the user, clear only on yes
    ConfirmThenClear,
}

/// What actually happened once a decision was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Warned,
    Cleared { removed: usize },
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A transient message for the toast area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn list_already_empty() -> Self {
        Self::warning("The list is already empty!")
    }

    /// CSS modifier for the toast
    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "toast info",
            NoticeLevel::Warning => "toast warning",
        }
    }
}

pub fn request_clear(items: &[Item]) -> ClearDecision {
    if items.is_empty() {
        ClearDecision::Warn
    } else {
        ClearDecision::ConfirmThenClear
    }
}

impl ListStore {
    pub fn request_clear(&self) -> ClearDecision {
        request_clear(self.items())
    }
}

/// Carry out `decision`. `confirmed` is the user's answer to
/// [`CONFIRM_CLEAR_PROMPT`] and is ignored for [`ClearDecision::Warn`].
pub fn resolve_clear(store: &mut ListStore, decision: ClearDecision, confirmed: bool) -> ClearOutcome {
    let outcome = match decision {
        ClearDecision::Warn => ClearOutcome::Warned,
        ClearDecision::ConfirmThenClear if confirmed => ClearOutcome::Cleared {
            removed: store.clear(),
        },
        ClearDecision::ConfirmThenClear => ClearOutcome::Declined,
    };
    debug!(?decision, ?outcome, "clear request resolved");
    outcome
}
