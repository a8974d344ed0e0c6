//! Application state machine.
//!
//! [`update`] is a pure function from the current [`AppState`] and an
//! [`Action`] to the next state plus the [`Effect`]s a platform runner must
//! execute. Runners feed results back in as further actions, so every
//! transition here runs to completion without I/O.

mod action;
mod state;

pub use action::{Action, Effect};
pub use state::{AppState, Modal, Mode, StatusMessage};

use crate::config::{CategorySelection, Configuration};
use crate::export::export_document;
use crate::share::{self, SharePrefill};
use crate::storage::Hydration;

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Apply `action` to `state`.
#[must_use]
pub fn update(mut state: AppState, action: Action) -> Transition {
    let effects = state.apply(action);
    Transition { state, effects }
}

impl AppState {
    /// In-place form of [`update`], for runners that own the state.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        log::debug!("applying {action:?}");
        match action {
            Action::Boot => vec![Effect::FetchCategories, Effect::LoadSavedGame],
            Action::CategoriesLoaded(result) => {
                match result {
                    Ok(categories) => self.categories = categories,
                    Err(err) => {
                        log::error!("category catalog failed: {err}");
                        self.status = Some(StatusMessage::CategoriesFailed(err));
                    }
                }
                Vec::new()
            }
            Action::Hydrated(hydration) => {
                self.hydrate(hydration);
                Vec::new()
            }
            Action::SelectCategory(id) => {
                self.selection = Some(CategorySelection::from_id(&id));
                Vec::new()
            }
            Action::SurpriseMe => {
                self.selection = Some(CategorySelection::Random);
                self.status = Some(StatusMessage::SurpriseSelected);
                Vec::new()
            }
            Action::ClearCategory => {
                self.selection = None;
                Vec::new()
            }
            Action::EditDraft(field) => {
                self.draft.edit(field);
                self.draft_share_code = None;
                Vec::new()
            }
            Action::EditShareInput(text) => {
                self.share_input = text;
                Vec::new()
            }
            Action::LoadShareCode => {
                self.load_share_code();
                Vec::new()
            }
            Action::ShareDraft => self.share_draft(),
            Action::Submit => self.submit(),
            Action::Regenerate => self.regenerate(),
            Action::GenerationFinished { request, outcome } => {
                self.in_flight = false;
                match outcome {
                    Ok(game) => {
                        self.install_game((*game).clone());
                        self.memo.remember(request);
                        self.mode = Mode::GameView;
                        self.status = Some(StatusMessage::Generated);
                        vec![Effect::PersistGame(game)]
                    }
                    Err(err) => {
                        log::error!("generation failed: {err}");
                        self.status = Some(StatusMessage::Service(err));
                        Vec::new()
                    }
                }
            }
            Action::BackToSetup => {
                self.mode = Mode::Setup;
                self.modal = Modal::Closed;
                Vec::new()
            }
            Action::ShowGame => {
                if self.current_game.is_some() {
                    self.mode = Mode::GameView;
                }
                Vec::new()
            }
            Action::OpenCharacter(id) => {
                let known = self
                    .current_game
                    .as_ref()
                    .is_some_and(|game| game.character(&id).is_some());
                if known {
                    self.modal = Modal::CharacterReveal(id);
                }
                Vec::new()
            }
            Action::OpenHost => {
                if self.current_game.is_some() {
                    self.modal = Modal::HostReveal;
                    self.host_checkbox = false;
                }
                Vec::new()
            }
            Action::SetHostCheckbox(checked) => {
                if self.modal == Modal::HostReveal && !self.host_reveal_confirmed {
                    self.host_checkbox = checked;
                }
                Vec::new()
            }
            Action::ConfirmHostReveal => {
                if self.modal == Modal::HostReveal && self.host_checkbox {
                    self.host_reveal_confirmed = true;
                }
                Vec::new()
            }
            Action::CloseModal => {
                self.modal = Modal::Closed;
                Vec::new()
            }
            Action::Export => self.export(),
            Action::CopyShareCode => match &self.current_game {
                Some(game) => {
                    self.status = Some(StatusMessage::ShareCopied);
                    vec![Effect::CopyToClipboard(game.share_code().to_string())]
                }
                None => Vec::new(),
            },
            Action::EffectFailed(reason) => {
                self.status = Some(StatusMessage::Failure(reason));
                Vec::new()
            }
        }
    }

    fn hydrate(&mut self, hydration: Hydration) {
        match hydration {
            Hydration::Empty => {}
            Hydration::Restored(game) => {
                // A game generated before hydration finished takes precedence.
                if self.current_game.is_none() && self.mode == Mode::Setup {
                    self.install_game(*game);
                    self.mode = Mode::GameView;
                    self.status = Some(StatusMessage::Restored);
                }
            }
            Hydration::Discarded => {
                self.status = Some(StatusMessage::SavedGameDiscarded);
            }
        }
    }

    fn load_share_code(&mut self) {
        let code = self.share_input.trim();
        if code.is_empty() {
            return;
        }
        match SharePrefill::from_code(code) {
            Ok(prefill) => {
                self.draft.apply_prefill(&prefill);
                if let Some(selection) = prefill.category() {
                    self.selection = Some(selection);
                }
                self.draft_share_code = None;
                self.status = Some(StatusMessage::ShareLoaded);
            }
            Err(err) => {
                log::debug!("rejected share code: {err}");
                self.status = Some(StatusMessage::ShareInvalid);
            }
        }
    }

    fn share_draft(&mut self) -> Vec<Effect> {
        let config = match Configuration::from_draft(&self.draft, self.selection.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                self.status = Some(StatusMessage::Validation(err));
                return Vec::new();
            }
        };
        match share::encode(&config) {
            Ok(code) => {
                self.draft_share_code = Some(code.clone());
                self.status = Some(StatusMessage::DraftShareCopied);
                vec![Effect::CopyToClipboard(code)]
            }
            Err(err) => {
                self.status = Some(StatusMessage::Failure(err.to_string()));
                Vec::new()
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.in_flight {
            log::debug!("ignoring submit while a generation is in flight");
            return Vec::new();
        }
        match Configuration::from_draft(&self.draft, self.selection.as_ref()) {
            Ok(config) => self.start_generation(config),
            Err(err) => {
                self.status = Some(StatusMessage::Validation(err));
                Vec::new()
            }
        }
    }

    fn regenerate(&mut self) -> Vec<Effect> {
        if self.in_flight {
            return Vec::new();
        }
        self.memo
            .regenerate_request()
            .map(|request| self.start_generation(request))
            .unwrap_or_default()
    }

    fn start_generation(&mut self, request: Configuration) -> Vec<Effect> {
        self.in_flight = true;
        self.status = Some(StatusMessage::Generating);
        vec![Effect::Generate(request)]
    }

    fn export(&mut self) -> Vec<Effect> {
        let Some(game) = &self.current_game else {
            return Vec::new();
        };
        match export_document(game) {
            Ok(body) => vec![Effect::DownloadExport(body)],
            Err(err) => {
                self.status = Some(StatusMessage::Failure(err.to_string()));
                Vec::new()
            }
        }
    }
}
