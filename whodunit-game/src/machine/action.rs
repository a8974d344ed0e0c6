use crate::config::{Configuration, DraftField};
use crate::error::ServiceError;
use crate::model::{Category, GeneratedGame};
use crate::storage::Hydration;

/// Everything that can happen to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Page load: fetch the catalog and look for a saved game.
    Boot,
    CategoriesLoaded(Result<Vec<Category>, ServiceError>),
    Hydrated(Hydration),

    SelectCategory(String),
    SurpriseMe,
    ClearCategory,
    EditDraft(DraftField),

    EditShareInput(String),
    /// Decode the share-code input into the setup form.
    LoadShareCode,
    /// Encode the current form as a share code and copy it.
    ShareDraft,

    Submit,
    Regenerate,
    GenerationFinished {
        request: Configuration,
        outcome: Result<Box<GeneratedGame>, ServiceError>,
    },

    BackToSetup,
    ShowGame,

    OpenCharacter(String),
    OpenHost,
    SetHostCheckbox(bool),
    ConfirmHostReveal,
    CloseModal,

    Export,
    CopyShareCode,
    /// A runner could not complete a fire-and-forget effect.
    EffectFailed(String),
}

/// Side effects requested by a transition, executed by the platform runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCategories,
    LoadSavedGame,
    Generate(Configuration),
    PersistGame(Box<GeneratedGame>),
    DownloadExport(String),
    CopyToClipboard(String),
}
