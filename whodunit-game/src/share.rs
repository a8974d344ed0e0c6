//! Reversible share codes.
//!
//! A share code is compact JSON, taken as UTF-8 bytes, written in the
//! URL-safe base64 alphabet with the trailing `=` padding removed. The codec
//! knows nothing about games; in practice it carries a [`Configuration`]
//! (client-made codes) or the smaller seed record the generation service
//! stamps into `meta.share_code`.
//!
//! [`Configuration`]: crate::config::Configuration

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CategorySelection, Configuration, Tone};

#[derive(Debug, Error)]
pub enum ShareCodeError {
    #[error("value could not be serialized for sharing: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("share code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share code is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("share code does not contain the expected JSON: {0}")]
    Json(#[source] serde_json::Error),
}

/// Encode any serializable value as a share code.
///
/// # Errors
///
/// Returns [`ShareCodeError::Encode`] if the value cannot be serialized to JSON
/// (for example a map with non-string keys).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ShareCodeError> {
    let json = serde_json::to_vec(value).map_err(ShareCodeError::Encode)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a share code back into a typed value.
///
/// Surrounding whitespace is ignored so pasted codes work as-is.
///
/// # Errors
///
/// Returns a [`ShareCodeError`] when the text is not base64, the bytes are
/// not UTF-8, or the text is not JSON of the requested shape.
pub fn decode<T: DeserializeOwned>(code: &str) -> Result<T, ShareCodeError> {
    let text = decode_text(code)?;
    serde_json::from_str(&text).map_err(ShareCodeError::Json)
}

/// Decode a share code into an untyped JSON value.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_value(code: &str) -> Result<serde_json::Value, ShareCodeError> {
    decode(code)
}

/// Accepts codes with or without padding and ignores stray trailing bits.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

fn decode_text(code: &str) -> Result<String, ShareCodeError> {
    // Standard-alphabet codes decode the same once mapped onto URL-safe.
    let normalized: String = code
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = LENIENT.decode(normalized.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// True when every character belongs to the URL-safe base64 alphabet.
#[must_use]
pub fn is_share_alphabet(code: &str) -> bool {
    code.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Form values recovered from a share code.
///
/// Accepts both a full [`Configuration`] and the service's seed record
/// (`seed`, `player_count`, `category_id`, `tone`, `duration`, `v`). Every
/// field is optional so older or partial codes still prefill what they can.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SharePrefill {
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub player_count: Option<i64>,
    #[serde(default)]
    pub player_names: Option<Vec<String>>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub duration: Option<u16>,
}

impl SharePrefill {
    /// Decode a pasted share code into a prefill.
    ///
    /// # Errors
    ///
    /// See [`decode`]. A JSON value that is not an object is a
    /// [`ShareCodeError::Json`] error.
    pub fn from_code(code: &str) -> Result<Self, ShareCodeError> {
        decode(code)
    }

    #[must_use]
    pub fn category(&self) -> Option<CategorySelection> {
        self.category_id.as_deref().map(CategorySelection::from_id)
    }
}

impl From<&Configuration> for SharePrefill {
    fn from(config: &Configuration) -> Self {
        Self {
            seed: config.seed,
            player_count: Some(i64::from(config.player_count)),
            player_names: config.player_names.clone(),
            category_id: Some(config.category_id.clone()),
            tone: Some(config.tone.clone()),
            duration: Some(config.duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE;
    use serde_json::json;

    fn sample_config() -> Configuration {
        Configuration {
            player_count: 5,
            player_names: Some(vec![String::from("Zoë"), String::from("Łukasz"), String::from("山田 🎭")]),
            category_id: String::from("random"),
            tone: Tone::Other(String::from("comic")),
            duration: 60,
            seed: None,
        }
    }

    #[test]
    fn configuration_round_trips_with_non_ascii_names() {
        let config = sample_config();
        let code = encode(&config).unwrap();
        assert!(is_share_alphabet(&code));
        assert!(!code.ends_with('='));
        let back: Configuration = decode(&code).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn unpadded_code_is_never_longer_than_padded() {
        let config = sample_config();
        let code = encode(&config).unwrap();
        let padded = URL_SAFE.encode(serde_json::to_vec(&config).unwrap());
        assert!(code.len() <= padded.len());
    }

    #[test]
    fn decode_rejects_garbage_without_panicking() {
        assert!(matches!(
            decode_value("not-valid-base64!!"),
            Err(ShareCodeError::Base64(_))
        ));
        assert!(matches!(decode_value(""), Err(ShareCodeError::Json(_))));
        assert!(matches!(decode_value("A"), Err(ShareCodeError::Base64(_))));
    }

    #[test]
    fn decode_accepts_the_standard_alphabet() {
        // Same bytes, written with `/` and `+` instead of `_` and `-`.
        let standard = decode_value("eyJuIjoiPz4/Pn5+fiJ9").unwrap();
        let url_safe = decode_value("eyJuIjoiPz4_Pn5-fiJ9").unwrap();
        assert_eq!(standard, json!({ "n": "?>?>~~~" }));
        assert_eq!(standard, url_safe);
    }

    #[test]
    fn decode_ignores_non_canonical_trailing_bits() {
        assert_eq!(decode_value("e31").unwrap(), json!({}));
        assert_eq!(decode_value("e30").unwrap(), json!({}));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let code = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        assert!(matches!(decode_value(&code), Err(ShareCodeError::Utf8(_))));
    }

    #[test]
    fn decode_rejects_non_json_text() {
        let code = URL_SAFE_NO_PAD.encode("hello there");
        assert!(matches!(decode_value(&code), Err(ShareCodeError::Json(_))));
    }

    #[test]
    fn decode_tolerates_whitespace_and_existing_padding() {
        let code = URL_SAFE.encode(br#"{"a":1}"#);
        assert!(code.ends_with('='));
        let value = decode_value(&format!("  {code}\n")).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn prefill_reads_service_seed_record() {
        // Matches the record the generation service stamps into meta.share_code.
        let record = json!({
            "category_id": "jazz_club",
            "duration": 90,
            "player_count": 8,
            "seed": 123_456,
            "tone": "suspense",
            "v": 1
        });
        let code = encode(&record).unwrap();
        let prefill = SharePrefill::from_code(&code).unwrap();
        assert_eq!(prefill.seed, Some(123_456));
        assert_eq!(prefill.player_count, Some(8));
        assert_eq!(prefill.tone, Some(Tone::Suspense));
        assert_eq!(prefill.duration, Some(90));
        assert_eq!(
            prefill.category(),
            Some(CategorySelection::Id(String::from("jazz_club")))
        );
        assert_eq!(prefill.player_names, None);
    }

    #[test]
    fn prefill_rejects_non_object_json() {
        let code = encode(&json!([1, 2, 3])).unwrap();
        assert!(SharePrefill::from_code(&code).is_err());
    }

    #[test]
    fn prefill_from_configuration_keeps_every_field() {
        let config = sample_config();
        let code = encode(&config).unwrap();
        let prefill = SharePrefill::from_code(&code).unwrap();
        assert_eq!(prefill, SharePrefill::from(&config));
        assert_eq!(prefill.category(), Some(CategorySelection::Random));
    }
}
