use std::fmt;

use crate::clues::ClueIndex;
use crate::config::{CategorySelection, ConfigDraft};
use crate::error::{ServiceError, ValidationError};
use crate::memo::RequestMemo;
use crate::model::{Category, GeneratedGame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Setup,
    GameView,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    CharacterReveal(String),
    HostReveal,
}

/// The one-line status shown under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Generating,
    Generated,
    Restored,
    SavedGameDiscarded,
    ShareLoaded,
    ShareInvalid,
    ShareCopied,
    DraftShareCopied,
    SurpriseSelected,
    CategoriesFailed(ServiceError),
    Validation(ValidationError),
    Service(ServiceError),
    Failure(String),
}

impl StatusMessage {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ShareInvalid
                | Self::CategoriesFailed(_)
                | Self::Validation(_)
                | Self::Service(_)
                | Self::Failure(_)
        )
    }

    /// Translation key for the fixed messages. Error variants carrying their
    /// own text return `None`.
    #[must_use]
    pub const fn key(&self) -> Option<&'static str> {
        match self {
            Self::Generating => Some("status.generating"),
            Self::Generated => Some("status.generated"),
            Self::Restored => Some("status.restored"),
            Self::SavedGameDiscarded => Some("status.discarded"),
            Self::ShareLoaded => Some("status.share_loaded"),
            Self::ShareInvalid => Some("status.share_invalid"),
            Self::ShareCopied => Some("status.share_copied"),
            Self::DraftShareCopied => Some("status.draft_share_copied"),
            Self::SurpriseSelected => Some("status.surprise"),
            Self::CategoriesFailed(_) => Some("status.categories_failed"),
            Self::Validation(_) | Self::Service(_) | Self::Failure(_) => None,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generating => f.write_str("Generating game..."),
            Self::Generated => f.write_str("Game generated successfully."),
            Self::Restored => f.write_str("Loaded last generated game from storage."),
            Self::SavedGameDiscarded => {
                f.write_str("A saved game could not be read and was cleared.")
            }
            Self::ShareLoaded => f.write_str("Share code loaded. Click Generate to recreate."),
            Self::ShareInvalid => f.write_str("Invalid share code."),
            Self::ShareCopied => f.write_str("Share code copied to clipboard."),
            Self::DraftShareCopied => f.write_str("Setup share code copied to clipboard."),
            Self::SurpriseSelected => f.write_str("Surprise Me selected."),
            Self::CategoriesFailed(_) => f.write_str("Failed to load categories."),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Failure(text) => f.write_str(text),
        }
    }
}

/// The single application state value.
///
/// Fields are private: every change goes through
/// [`update`](crate::machine::update), which keeps the clue index and the
/// host confirmation tied to the current game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(super) mode: Mode,
    pub(super) categories: Vec<Category>,
    pub(super) selection: Option<CategorySelection>,
    pub(super) draft: ConfigDraft,
    pub(super) share_input: String,
    pub(super) draft_share_code: Option<String>,
    pub(super) memo: RequestMemo,
    pub(super) current_game: Option<GeneratedGame>,
    pub(super) clue_index: ClueIndex,
    pub(super) modal: Modal,
    pub(super) host_checkbox: bool,
    pub(super) host_reveal_confirmed: bool,
    pub(super) in_flight: bool,
    pub(super) status: Option<StatusMessage>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&CategorySelection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn selected_category_id(&self) -> Option<&str> {
        self.selection.as_ref().map(CategorySelection::as_id)
    }

    #[must_use]
    pub const fn draft(&self) -> &ConfigDraft {
        &self.draft
    }

    #[must_use]
    pub fn share_input(&self) -> &str {
        &self.share_input
    }

    #[must_use]
    pub fn draft_share_code(&self) -> Option<&str> {
        self.draft_share_code.as_deref()
    }

    #[must_use]
    pub const fn memo(&self) -> &RequestMemo {
        &self.memo
    }

    #[must_use]
    pub const fn current_game(&self) -> Option<&GeneratedGame> {
        self.current_game.as_ref()
    }

    #[must_use]
    pub const fn clue_index(&self) -> &ClueIndex {
        &self.clue_index
    }

    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    #[must_use]
    pub const fn host_checkbox(&self) -> bool {
        self.host_checkbox
    }

    #[must_use]
    pub const fn host_reveal_confirmed(&self) -> bool {
        self.host_reveal_confirmed
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    #[must_use]
    pub const fn can_regenerate(&self) -> bool {
        !self.in_flight && !self.memo.is_empty()
    }

    /// Replace the current game and everything derived from it.
    pub(super) fn install_game(&mut self, game: GeneratedGame) {
        self.clue_index = ClueIndex::build(&game.clues);
        self.current_game = Some(game);
        self.host_reveal_confirmed = false;
        self.host_checkbox = false;
        self.modal = Modal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classification() {
        assert!(StatusMessage::ShareInvalid.is_error());
        assert!(!StatusMessage::Generated.is_error());
        assert!(StatusMessage::Validation(ValidationError::DurationZero).is_error());
    }

    #[test]
    fn messages_carrying_text_have_no_key() {
        assert_eq!(StatusMessage::Failure(String::from("x")).key(), None);
        assert_eq!(StatusMessage::Generating.key(), Some("status.generating"));
        assert_eq!(StatusMessage::Failure(String::from("boom")).to_string(), "boom");
    }

    #[test]
    fn fresh_state_is_setup_with_nothing_loaded() {
        let state = AppState::new();
        assert_eq!(state.mode(), Mode::Setup);
        assert!(state.current_game().is_none());
        assert!(state.clue_index().is_empty());
        assert_eq!(state.modal(), &Modal::Closed);
        assert!(!state.can_regenerate());
    }
}
