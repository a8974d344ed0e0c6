use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::share::SharePrefill;

pub const MIN_PLAYERS: u8 = 4;
pub const MAX_PLAYERS: u8 = 20;
/// Sentinel category id asking the service to pick a theme.
pub const RANDOM_CATEGORY: &str = "random";
/// Durations offered by the setup form, in minutes.
pub const DURATION_CHOICES: [u16; 3] = [45, 60, 90];

/// Requested mood for the generated game.
///
/// Unknown tones are carried verbatim so decoding a share code never drops
/// what the sender chose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    #[default]
    Comedy,
    Serious,
    Suspense,
    Other(String),
}

impl Tone {
    pub const CHOICES: [Self; 3] = [Self::Comedy, Self::Serious, Self::Suspense];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Comedy => "comedy",
            Self::Serious => "serious",
            Self::Suspense => "suspense",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        match value.as_str() {
            "comedy" => Self::Comedy,
            "serious" => Self::Serious,
            "suspense" => Self::Suspense,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Which catalog theme the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    Id(String),
    /// "Surprise me": let the service choose.
    Random,
}

impl CategorySelection {
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        if id == RANDOM_CATEGORY {
            Self::Random
        } else {
            Self::Id(id.to_string())
        }
    }

    #[must_use]
    pub fn as_id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Random => RANDOM_CATEGORY,
        }
    }
}

/// Parameters for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub player_count: u8,
    pub player_names: Option<Vec<String>>,
    pub category_id: String,
    pub tone: Tone,
    pub duration: u16,
    pub seed: Option<i64>,
}

impl Configuration {
    /// Build a configuration from raw form values.
    ///
    /// Names are split on commas, trimmed, and empty entries dropped; an
    /// empty result means "no names". A missing selection means
    /// [`RANDOM_CATEGORY`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the player count or seed do not
    /// parse, or the result breaks an invariant checked by [`Self::validate`].
    pub fn from_draft(
        draft: &ConfigDraft,
        selection: Option<&CategorySelection>,
    ) -> Result<Self, ValidationError> {
        let raw_count = draft.player_count.trim();
        let count: i64 = raw_count
            .parse()
            .map_err(|_| ValidationError::PlayerCountNotNumber(raw_count.to_string()))?;
        let player_count = u8::try_from(count)
            .ok()
            .filter(|c| (MIN_PLAYERS..=MAX_PLAYERS).contains(c))
            .ok_or(ValidationError::PlayerCountOutOfRange(count))?;

        let names: Vec<String> = draft
            .player_names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let raw_seed = draft.seed.trim();
        let seed = if raw_seed.is_empty() {
            None
        } else {
            Some(
                raw_seed
                    .parse::<i64>()
                    .map_err(|_| ValidationError::SeedNotNumber(raw_seed.to_string()))?,
            )
        };

        let config = Self {
            player_count,
            player_names: (!names.is_empty()).then_some(names),
            category_id: selection
                .map_or(RANDOM_CATEGORY, CategorySelection::as_id)
                .to_string(),
            tone: draft.tone.clone(),
            duration: draft.duration,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ValidationError::PlayerCountOutOfRange(i64::from(
                self.player_count,
            )));
        }
        if let Some(names) = &self.player_names {
            if names.is_empty() {
                return Err(ValidationError::PlayerNamesEmpty);
            }
            if let Some(index) = names.iter().position(|n| n.trim().is_empty()) {
                return Err(ValidationError::BlankPlayerName { index });
            }
        }
        if self.duration == 0 {
            return Err(ValidationError::DurationZero);
        }
        Ok(())
    }
}

/// Raw setup-form values, kept as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDraft {
    pub player_count: String,
    pub player_names: String,
    pub seed: String,
    pub tone: Tone,
    pub duration: u16,
}

impl Default for ConfigDraft {
    fn default() -> Self {
        Self {
            player_count: String::from("6"),
            player_names: String::new(),
            seed: String::new(),
            tone: Tone::Comedy,
            duration: 60,
        }
    }
}

/// A single edited form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    PlayerCount(String),
    PlayerNames(String),
    Seed(String),
    Tone(Tone),
    Duration(u16),
}

impl ConfigDraft {
    pub fn edit(&mut self, field: DraftField) {
        match field {
            DraftField::PlayerCount(v) => self.player_count = v,
            DraftField::PlayerNames(v) => self.player_names = v,
            DraftField::Seed(v) => self.seed = v,
            DraftField::Tone(v) => self.tone = v,
            DraftField::Duration(v) => self.duration = v,
        }
    }

    /// Overwrite the fields a share code carries.
    ///
    /// A missing seed clears the seed box. Names are only replaced when the
    /// code carries them; codes minted by the service never do.
    pub fn apply_prefill(&mut self, prefill: &SharePrefill) {
        self.seed = prefill.seed.map(|s| s.to_string()).unwrap_or_default();
        if let Some(count) = prefill.player_count {
            self.player_count = count.to_string();
        }
        if let Some(names) = &prefill.player_names {
            self.player_names = names.join(", ");
        }
        if let Some(tone) = &prefill.tone {
            self.tone = tone.clone();
        }
        if let Some(duration) = prefill.duration {
            self.duration = duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(count: &str, names: &str, seed: &str) -> ConfigDraft {
        ConfigDraft {
            player_count: count.to_string(),
            player_names: names.to_string(),
            seed: seed.to_string(),
            ..ConfigDraft::default()
        }
    }

    #[test]
    fn from_draft_trims_names_and_defaults_to_random() {
        let config = Configuration::from_draft(&draft("5", " Ann , ,Bo ,", "42"), None).unwrap();
        assert_eq!(config.player_count, 5);
        assert_eq!(
            config.player_names,
            Some(vec![String::from("Ann"), String::from("Bo")])
        );
        assert_eq!(config.category_id, RANDOM_CATEGORY);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn from_draft_treats_blank_names_as_absent() {
        let config = Configuration::from_draft(&draft("4", " , ", ""), None).unwrap();
        assert_eq!(config.player_names, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn from_draft_uses_selected_category() {
        let selection = CategorySelection::Id(String::from("jazz_club"));
        let config = Configuration::from_draft(&draft("6", "", ""), Some(&selection)).unwrap();
        assert_eq!(config.category_id, "jazz_club");
    }

    #[test]
    fn from_draft_rejects_out_of_range_and_garbage() {
        for bad in ["3", "21", "-1", "300"] {
            assert!(matches!(
                Configuration::from_draft(&draft(bad, "", ""), None),
                Err(ValidationError::PlayerCountOutOfRange(_))
            ));
        }
        assert!(matches!(
            Configuration::from_draft(&draft("six", "", ""), None),
            Err(ValidationError::PlayerCountNotNumber(_))
        ));
        assert!(matches!(
            Configuration::from_draft(&draft("6", "", "abc"), None),
            Err(ValidationError::SeedNotNumber(_))
        ));
        assert!(Configuration::from_draft(&draft("4", "", ""), None).is_ok());
        assert!(Configuration::from_draft(&draft("20", "", ""), None).is_ok());
    }

    #[test]
    fn validate_rejects_blank_and_empty_names() {
        let mut config = Configuration::from_draft(&draft("5", "", ""), None).unwrap();
        config.player_names = Some(Vec::new());
        assert_eq!(config.validate(), Err(ValidationError::PlayerNamesEmpty));
        config.player_names = Some(vec![String::from("Ann"), String::from("  ")]);
        assert_eq!(
            config.validate(),
            Err(ValidationError::BlankPlayerName { index: 1 })
        );
    }

    #[test]
    fn configuration_serializes_absent_fields_as_null() {
        let config = Configuration::from_draft(&draft("5", "", ""), None).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert!(value["player_names"].is_null());
        assert!(value["seed"].is_null());
        assert_eq!(value["tone"], "comedy");
    }

    #[test]
    fn tone_keeps_unknown_values() {
        let tone: Tone = serde_json::from_str("\"comic\"").unwrap();
        assert_eq!(tone, Tone::Other(String::from("comic")));
        assert_eq!(serde_json::to_string(&tone).unwrap(), "\"comic\"");
        assert_eq!(Tone::from("serious"), Tone::Serious);
    }

    #[test]
    fn prefill_overwrites_only_carried_fields() {
        let mut form = draft("6", "Ann, Bo", "7");
        form.apply_prefill(&SharePrefill {
            seed: None,
            player_count: Some(9),
            tone: Some(Tone::Suspense),
            ..SharePrefill::default()
        });
        assert_eq!(form.player_count, "9");
        assert_eq!(form.player_names, "Ann, Bo");
        assert_eq!(form.seed, "");
        assert_eq!(form.tone, Tone::Suspense);
        assert_eq!(form.duration, 60);
    }

    #[test]
    fn category_selection_maps_sentinel() {
        assert_eq!(CategorySelection::from_id("random"), CategorySelection::Random);
        assert_eq!(CategorySelection::Random.as_id(), "random");
        assert_eq!(CategorySelection::from_id("x").as_id(), "x");
    }
}
