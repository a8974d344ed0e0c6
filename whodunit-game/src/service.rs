//! Request and response contract of the catalog and generation endpoints.
//!
//! Transport lives in the platform shells; this module only turns a status
//! code and a body into typed results.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ServiceError;
use crate::model::{Category, GeneratedGame};

pub const CATEGORIES_PATH: &str = "/api/categories";
pub const GENERATE_PATH: &str = "/api/generate";

pub const GENERATION_FAILED: &str = "Generation failed.";
pub const CATEGORIES_FAILED: &str = "Failed to load categories.";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Human-readable `detail` from an error body, if there is one.
///
/// Plain strings are returned verbatim. Validation error lists
/// (`[{"msg": ...}, ...]`) are joined with `"; "`.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn rejected(status: u16, body: &str, fallback: &str) -> ServiceError {
    ServiceError::Rejected {
        status,
        detail: error_detail(body).unwrap_or_else(|| fallback.to_string()),
    }
}

/// Interpret a generation response.
///
/// # Errors
///
/// Any non-success status is [`ServiceError::Rejected`] regardless of body
/// shape. A success body that does not parse is [`ServiceError::Malformed`];
/// one that parses but breaks game invariants is [`ServiceError::Invalid`].
pub fn parse_generation(status: u16, body: &str) -> Result<GeneratedGame, ServiceError> {
    if !is_success(status) {
        return Err(rejected(status, body, GENERATION_FAILED));
    }
    let game =
        GeneratedGame::from_json(body).map_err(|err| ServiceError::Malformed(err.to_string()))?;
    game.validate()?;
    Ok(game)
}

/// Interpret a catalog response.
///
/// # Errors
///
/// Same classification as [`parse_generation`], without schema checks.
pub fn parse_categories(status: u16, body: &str) -> Result<Vec<Category>, ServiceError> {
    if !is_success(status) {
        return Err(rejected(status, body, CATEGORIES_FAILED));
    }
    serde_json::from_str(body).map_err(|err| ServiceError::Malformed(err.to_string()))
}
