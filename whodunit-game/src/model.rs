use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A selectable theme from the category catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tone_tags: Vec<String>,
    #[serde(default)]
    pub suggested_props: Vec<String>,
    #[serde(default)]
    pub suggested_archetypes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameMeta {
    pub share_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_count: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub time: String,
    pub description: String,
}

/// One phase of play in the "how to play" schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_id: Option<String>,
    pub title: String,
    pub minutes: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub character_id: String,
    pub relationship: String,
}

/// One player's private dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPacket {
    pub character_id: String,
    pub name: String,
    pub role_title: String,
    pub backstory: String,
    #[serde(default)]
    pub traits: Vec<String>,
    pub public_goal: String,
    pub secret_goal: String,
    #[serde(default)]
    pub secrets: Vec<String>,
    pub alibi: String,
    pub connection_to_victim: String,
    #[serde(default)]
    pub clue_ids: Vec<String>,
    #[serde(default)]
    pub intro_monologue: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub clue_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_misleading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub murderer_id: String,
    pub motive: String,
    pub method: String,
    pub opportunity: String,
    pub reveal_explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victim {
    pub name: String,
    pub role: String,
    pub why_they_mattered: String,
}

/// The complete document returned by the generation service.
///
/// Treated as immutable once received: the state machine only ever replaces
/// it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedGame {
    pub title: String,
    pub theme_summary: String,
    pub meta: GameMeta,
    #[serde(default)]
    pub storyline_overview: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub how_to_play: Vec<Round>,
    #[serde(default)]
    pub props_list: Vec<String>,
    pub character_packets: Vec<CharacterPacket>,
    #[serde(default)]
    pub clues: Vec<Clue>,
    pub solution: Solution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victim: Option<Victim>,
}

/// Structural problems that make a game document unusable for rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameSchemaError {
    #[error("game title is empty")]
    EmptyTitle,
    #[error("game has no character packets")]
    NoCharacters,
    #[error("duplicate character id `{0}`")]
    DuplicateCharacter(String),
    #[error("duplicate clue id `{0}`")]
    DuplicateClue(String),
    #[error("solution references unknown character `{0}`")]
    UnknownMurderer(String),
}

impl GeneratedGame {
    /// Parse a game document from JSON without schema checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON game document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the invariants rendering relies on.
    ///
    /// Dangling `clue_ids` references are deliberately not rejected here; the
    /// view renders a placeholder for them instead.
    ///
    /// # Errors
    ///
    /// Returns the first [`GameSchemaError`] found.
    pub fn validate(&self) -> Result<(), GameSchemaError> {
        if self.title.trim().is_empty() {
            return Err(GameSchemaError::EmptyTitle);
        }
        if self.character_packets.is_empty() {
            return Err(GameSchemaError::NoCharacters);
        }
        let mut characters = HashSet::new();
        for packet in &self.character_packets {
            if !characters.insert(packet.character_id.as_str()) {
                return Err(GameSchemaError::DuplicateCharacter(
                    packet.character_id.clone(),
                ));
            }
        }
        let mut clues = HashSet::new();
        for clue in &self.clues {
            if !clues.insert(clue.clue_id.as_str()) {
                return Err(GameSchemaError::DuplicateClue(clue.clue_id.clone()));
            }
        }
        if !characters.contains(self.solution.murderer_id.as_str()) {
            return Err(GameSchemaError::UnknownMurderer(
                self.solution.murderer_id.clone(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn character(&self, character_id: &str) -> Option<&CharacterPacket> {
        self.character_packets
            .iter()
            .find(|packet| packet.character_id == character_id)
    }

    #[must_use]
    pub fn share_code(&self) -> &str {
        &self.meta.share_code
    }
}
