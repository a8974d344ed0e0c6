use crate::model::GeneratedGame;

pub const EXPORT_FILE_NAME: &str = "murder_mystery_game.json";
pub const EXPORT_MIME: &str = "application/json";

/// Pretty-printed JSON of the whole game, as offered for download.
///
/// # Errors
///
/// Returns an error only if serialization fails, which does not happen for
/// documents that were themselves parsed from JSON.
pub fn export_document(game: &GeneratedGame) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(game)
}
