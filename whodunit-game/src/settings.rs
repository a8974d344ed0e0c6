use crate::export::EXPORT_FILE_NAME;
use crate::service::{CATEGORIES_PATH, GENERATE_PATH};
use crate::storage::DEFAULT_STORAGE_KEY;

/// Deployment knobs shared by every shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Origin (and optional prefix) of the API, without a trailing slash.
    /// Empty means same-origin.
    pub api_base: String,
    pub storage_key: String,
    pub export_file_name: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl ClientSettings {
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_export_file_name(mut self, name: impl Into<String>) -> Self {
        self.export_file_name = name.into();
        self
    }

    #[must_use]
    pub fn categories_url(&self) -> String {
        format!("{}{CATEGORIES_PATH}", self.api_base)
    }

    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}{GENERATE_PATH}", self.api_base)
    }
}
