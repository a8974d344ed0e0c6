//! Whodunit Game Core
//!
//! Platform-agnostic client logic for the murder-mystery party game
//! generator: the share-code codec, the configuration rules, and the
//! application state machine. Shells (the Yew web app, the tester CLI)
//! execute the effects it returns and feed results back as actions.

pub mod clues;
pub mod config;
pub mod error;
pub mod export;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod machine;
pub mod memo;
pub mod model;
pub mod service;
pub mod settings;
pub mod share;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use clues::{ClueEntry, ClueIndex};
pub use config::{
    CategorySelection, ConfigDraft, Configuration, DURATION_CHOICES, DraftField, MAX_PLAYERS,
    MIN_PLAYERS, RANDOM_CATEGORY, Tone,
};
pub use error::{ServiceError, StorageError, ValidationError};
pub use export::{EXPORT_FILE_NAME, export_document};
pub use machine::{Action, AppState, Effect, Modal, Mode, StatusMessage, Transition, update};
pub use memo::RequestMemo;
pub use model::{
    Category, CharacterPacket, Clue, GameMeta, GameSchemaError, GeneratedGame, Solution,
};
pub use service::{parse_categories, parse_generation};
pub use settings::ClientSettings;
pub use share::{SharePrefill, ShareCodeError};
pub use storage::{DEFAULT_STORAGE_KEY, GameVault, Hydration, KeyValueStore, MemoryStore};
pub use view::{CharacterView, GameSummary, HostView, SolutionView, character_view, host_view};
