//! Headless effect runner: one client session against a backend.

use crate::backend::GenerationBackend;
use std::collections::VecDeque;
use whodunit_game::{
    Action, AppState, Configuration, Effect, GameVault, MemoryStore, StatusMessage,
};

/// Drives [`AppState`] the way the browser shell does, recording the
/// observable side effects instead of performing them.
pub struct Session<'a> {
    state: AppState,
    backend: &'a dyn GenerationBackend,
    vault: GameVault<MemoryStore>,
    pub requests: Vec<Configuration>,
    pub clipboard: Vec<String>,
    pub downloads: Vec<String>,
}

impl<'a> Session<'a> {
    /// A session whose saved game lives in `store`. Pass a clone of another
    /// session's store to simulate reloading the page.
    pub fn new(backend: &'a dyn GenerationBackend, store: MemoryStore) -> Self {
        Self {
            state: AppState::new(),
            backend,
            vault: GameVault::new(store),
            requests: Vec::new(),
            clipboard: Vec::new(),
            downloads: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.state.status()
    }

    /// Apply `action` and every action its effects report back, in order.
    pub async fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            log::debug!("dispatch {action:?}");
            for effect in self.state.apply(action) {
                if let Some(next) = self.run(effect).await {
                    queue.push_back(next);
                }
            }
        }
    }

    /// Dispatch each action in turn.
    pub async fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action).await;
        }
    }

    async fn run(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::FetchCategories => Some(Action::CategoriesLoaded(self.backend.categories().await)),
            Effect::LoadSavedGame => Some(Action::Hydrated(self.vault.hydrate())),
            Effect::Generate(request) => {
                self.requests.push(request.clone());
                let outcome = self.backend.generate(&request).await.map(Box::new);
                Some(Action::GenerationFinished { request, outcome })
            }
            Effect::PersistGame(game) => {
                if let Err(err) = self.vault.persist(&game) {
                    log::warn!("could not save game: {err}");
                }
                None
            }
            Effect::DownloadExport(body) => {
                self.downloads.push(body);
                None
            }
            Effect::CopyToClipboard(text) => {
                self.clipboard.push(text);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FakeGenerationService;
    use whodunit_game::{DraftField, KeyValueStore, Mode, DEFAULT_STORAGE_KEY};

    #[tokio::test]
    async fn boot_then_submit_reaches_game_view() {
        let backend = FakeGenerationService::new(11);
        let store = MemoryStore::new();
        let mut session = Session::new(&backend, store.clone());
        session
            .dispatch_all([
                Action::Boot,
                Action::EditDraft(DraftField::Seed(String::from("8"))),
                Action::Submit,
            ])
            .await;
        assert_eq!(session.state().mode(), Mode::GameView);
        assert_eq!(session.requests.len(), 1);
        assert!(!session.state().categories().is_empty());
        assert!(store.contains(DEFAULT_STORAGE_KEY));
    }

    #[tokio::test]
    async fn unavailable_storage_only_loses_persistence() {
        let backend = FakeGenerationService::new(11);
        let store = MemoryStore::unavailable();
        let mut session = Session::new(&backend, store.clone());
        session.dispatch_all([Action::Boot, Action::Submit]).await;
        assert_eq!(session.state().mode(), Mode::GameView);
        assert!(store.get_item(DEFAULT_STORAGE_KEY).is_err());
    }

    #[tokio::test]
    async fn copy_and_export_are_recorded() {
        let backend = FakeGenerationService::new(11);
        let mut session = Session::new(&backend, MemoryStore::new());
        session
            .dispatch_all([Action::Submit, Action::CopyShareCode, Action::Export])
            .await;
        let share = session.state().current_game().map(|g| g.meta.share_code.clone());
        assert_eq!(session.clipboard.first().cloned(), share);
        assert_eq!(session.downloads.len(), 1);
    }
}
