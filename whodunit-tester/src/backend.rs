//! Generation services the scenarios can run against.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use whodunit_game::fixtures::sample_categories;
use whodunit_game::model::{Relationship, Round, TimelineEvent, Victim};
use whodunit_game::share;
use whodunit_game::{
    Category, CharacterPacket, ClientSettings, Clue, Configuration, GameMeta, GeneratedGame,
    MAX_PLAYERS, MIN_PLAYERS, RANDOM_CATEGORY, ServiceError, Solution, parse_categories, parse_generation,
};

/// The catalog and generation endpoints, as seen by the client.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    fn label(&self) -> &'static str;

    async fn categories(&self) -> Result<Vec<Category>, ServiceError>;

    async fn generate(&self, request: &Configuration) -> Result<GeneratedGame, ServiceError>;
}

const FIRST_NAMES: &[&str] = &[
    "Avery", "Blake", "Cameron", "Dakota", "Elliot", "Finley", "Harper", "Jordan", "Kai", "Logan",
    "Morgan", "Parker", "Quinn", "Reese", "Rowan", "Sawyer", "Skyler", "Taylor", "Zion", "Emerson",
];
const LAST_NAMES: &[&str] = &[
    "Hale", "Rowe", "Sterling", "Brooks", "Winslow", "Voss", "Kincaid", "Langford", "Maddox",
    "Sinclair", "Nolan", "Everett", "Pryce", "Monroe", "Blair", "Bennett", "Calloway", "Sutter",
    "Quincy", "Alden",
];

const NAMES_MISMATCH: &str = "player_names length must match player_count.";

/// In-process stand-in for the generation service.
///
/// Games are a deterministic function of the request: an explicit seed always
/// yields the same document, and unseeded requests draw their seed from
/// `fallback_seed`.
#[derive(Debug, Clone)]
pub struct FakeGenerationService {
    catalog: Vec<Category>,
    fallback_seed: i64,
    rejection: Option<(u16, String)>,
}

impl FakeGenerationService {
    #[must_use]
    pub fn new(fallback_seed: u64) -> Self {
        Self {
            catalog: sample_categories(),
            fallback_seed: i64::try_from(fallback_seed % 1_000_000_000).unwrap_or(1),
            rejection: None,
        }
    }

    /// A service that answers every generation request with `status` and
    /// `detail`.
    #[must_use]
    pub fn rejecting(mut self, status: u16, detail: impl Into<String>) -> Self {
        self.rejection = Some((status, detail.into()));
        self
    }

    fn pick_category(&self, category_id: &str, rng: &mut ChaCha20Rng) -> Option<&Category> {
        if category_id == RANDOM_CATEGORY {
            return self.catalog.choose(rng);
        }
        self.catalog
            .iter()
            .find(|c| c.id == category_id)
            .or_else(|| self.catalog.first())
    }

    /// Build the game for `request`.
    ///
    /// # Errors
    /// Mirrors the service's request checks: a name list whose length differs
    /// from the player count is rejected with status 400.
    pub fn build(&self, request: &Configuration) -> Result<GeneratedGame, ServiceError> {
        if let Some((status, detail)) = &self.rejection {
            return Err(ServiceError::Rejected {
                status: *status,
                detail: detail.clone(),
            });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&request.player_count) {
            return Err(ServiceError::Rejected {
                status: 500,
                detail: String::from("player_count out of range."),
            });
        }
        let player_count = usize::from(request.player_count);
        if request
            .player_names
            .as_ref()
            .is_some_and(|names| names.len() != player_count)
        {
            return Err(ServiceError::Rejected {
                status: 400,
                detail: NAMES_MISMATCH.to_string(),
            });
        }

        let seed = request.seed.unwrap_or(self.fallback_seed);
        let mut rng = ChaCha20Rng::seed_from_u64(seed.cast_unsigned());
        let category = self
            .pick_category(&request.category_id, &mut rng)
            .cloned()
            .ok_or_else(|| ServiceError::Rejected {
                status: 500,
                detail: String::from("No categories available."),
            })?;

        let character_ids: Vec<String> =
            (1..=player_count).map(|i| format!("char_{i:02}")).collect();
        let clues = fake_clues(player_count, &mut rng);
        let assignments = assign_clues(&character_ids, &clues, &mut rng);
        let names = request
            .player_names
            .clone()
            .unwrap_or_else(|| fake_names(player_count, &mut rng));
        let murderer_id = character_ids
            .choose(&mut rng)
            .cloned()
            .unwrap_or_default();

        let character_packets = character_ids
            .iter()
            .zip(assignments)
            .enumerate()
            .map(|(i, (id, clue_ids))| CharacterPacket {
                character_id: id.clone(),
                name: names.get(i).cloned().unwrap_or_else(|| format!("Guest {}", i + 1)),
                role_title: String::from("Guest with secrets"),
                backstory: String::from("A brief history tied to the gathering."),
                traits: vec![String::from("calm"), String::from("observant")],
                public_goal: String::from("Keep the event running smoothly."),
                secret_goal: String::from("Recover a missing document."),
                secrets: vec![String::from("Once threatened the victim.")],
                alibi: String::from("Was speaking with staff during the incident."),
                connection_to_victim: String::from("Owed the victim a favor."),
                clue_ids,
                intro_monologue: vec![String::from("I didn't expect this night to turn dark.")],
                relationships: vec![Relationship {
                    character_id: character_ids[(i + 1) % player_count].clone(),
                    relationship: String::from("old friend"),
                }],
                prop_suggestion: Some(String::from("A distinctive accessory")),
            })
            .collect();

        let tone = request.tone.as_str().to_string();
        let share_code = share::encode(&json!({
            "seed": seed,
            "player_count": request.player_count,
            "category_id": category.id,
            "tone": tone,
            "duration": request.duration,
            "v": 1,
        }))
        .map_err(|err| ServiceError::Malformed(err.to_string()))?;

        Ok(GeneratedGame {
            title: format!("{}: A Night of Secrets", category.name),
            theme_summary: format!("A {tone} mystery. {}", category.description),
            meta: GameMeta {
                share_code,
                seed: Some(seed),
                player_count: Some(request.player_count),
                category_id: Some(category.id.clone()),
                tone: Some(tone),
                duration: Some(request.duration),
                model: Some(String::from("fake")),
            },
            storyline_overview: vec![
                String::from("Guests arrive to a gathering that promises celebration."),
                String::from("A sudden discovery exposes hidden conflicts."),
            ],
            timeline: (1..=4)
                .map(|i| TimelineEvent {
                    event_id: Some(format!("event_{i:02}")),
                    time: format!("{}:00", 19 + i),
                    description: String::from("A notable event shifts the night."),
                })
                .collect(),
            how_to_play: (1..=4)
                .map(|i| Round {
                    round_id: Some(format!("round_{i:02}")),
                    title: String::from("Investigation Round"),
                    minutes: u32::from(request.duration) / 4,
                    description: String::from("Players share clues and challenge alibis."),
                })
                .collect(),
            props_list: vec![String::from("Name cards"), String::from("Clue envelopes")],
            character_packets,
            clues,
            solution: Solution {
                murderer_id,
                motive: String::from("A long-simmering betrayal over inheritance."),
                method: String::from("Poisoned toast at a private moment."),
                opportunity: String::from("Had access to the victim's drink."),
                reveal_explanation: String::from("Clue patterns and alibis converge."),
            },
            victim: Some(Victim {
                name: fake_names(1, &mut rng).remove(0),
                role: String::from("Beloved organizer"),
                why_they_mattered: String::from("Controlled access to a key legacy."),
            }),
        })
    }
}

fn fake_names(count: usize, rng: &mut ChaCha20Rng) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(count);
    let mut attempts = 0;
    while names.len() < count && attempts < 200 {
        let name = format!(
            "{} {}",
            FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
            LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
        );
        if !names.contains(&name) {
            names.push(name);
        }
        attempts += 1;
    }
    while names.len() < count {
        names.push(format!("Guest {}", names.len() + 1));
    }
    names
}

fn fake_clues(player_count: usize, rng: &mut ChaCha20Rng) -> Vec<Clue> {
    let clue_count = (player_count * 2).max(12);
    (1..=clue_count)
        .map(|i| Clue {
            clue_id: format!("clue_{i:02}"),
            title: format!("Suspicious detail #{i}"),
            description: String::from("A detail that hints at motive or method."),
            kind: Some(String::from(if rng.gen_bool(0.25) { "hard" } else { "soft" })),
            is_misleading: rng.gen_bool(0.3),
        })
        .collect()
}

/// Deal clues round-robin, then top up or trim so everyone holds two or three.
fn assign_clues(character_ids: &[String], clues: &[Clue], rng: &mut ChaCha20Rng) -> Vec<Vec<String>> {
    let mut ids: Vec<String> = clues.iter().map(|c| c.clue_id.clone()).collect();
    ids.shuffle(rng);
    let mut hands = vec![Vec::new(); character_ids.len()];
    for (i, id) in ids.iter().enumerate() {
        hands[i % character_ids.len()].push(id.clone());
    }
    for hand in &mut hands {
        let short = 2_usize.saturating_sub(hand.len());
        hand.extend(ids.choose_multiple(rng, short).cloned());
        hand.truncate(3);
    }
    hands
}

#[async_trait]
impl GenerationBackend for FakeGenerationService {
    fn label(&self) -> &'static str {
        "fake"
    }

    async fn categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.catalog.clone())
    }

    async fn generate(&self, request: &Configuration) -> Result<GeneratedGame, ServiceError> {
        self.build(request)
    }
}

/// A running generation service reached over HTTP.
#[derive(Debug, Clone)]
pub struct LiveService {
    client: Client,
    settings: ClientSettings,
}

impl LiveService {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        // Generation goes through an LLM and can take a while.
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            settings: ClientSettings::default().with_api_base(base_url),
        }
    }

    async fn read(response: reqwest::Response) -> Result<(u16, String), ServiceError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok((status, body))
    }
}

fn transport(err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(err.to_string())
}

#[async_trait]
impl GenerationBackend for LiveService {
    fn label(&self) -> &'static str {
        "live"
    }

    async fn categories(&self) -> Result<Vec<Category>, ServiceError> {
        let response = self
            .client
            .get(self.settings.categories_url())
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = Self::read(response).await?;
        parse_categories(status, &body)
    }

    async fn generate(&self, request: &Configuration) -> Result<GeneratedGame, ServiceError> {
        let response = self
            .client
            .post(self.settings.generate_url())
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = Self::read(response).await?;
        parse_generation(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whodunit_game::{SharePrefill, Tone};

    fn request(seed: Option<i64>) -> Configuration {
        Configuration {
            player_count: 6,
            player_names: None,
            category_id: String::from(RANDOM_CATEGORY),
            tone: Tone::Suspense,
            duration: 60,
            seed,
        }
    }

    #[test]
    fn seeded_requests_are_reproducible() {
        let service = FakeGenerationService::new(1);
        let first = service.build(&request(Some(42))).unwrap();
        let again = FakeGenerationService::new(99).build(&request(Some(42))).unwrap();
        assert_eq!(first, again);
        first.validate().unwrap();
    }

    #[test]
    fn every_character_holds_two_or_three_clues() {
        let game = FakeGenerationService::new(7).build(&request(None)).unwrap();
        assert_eq!(game.character_packets.len(), 6);
        assert_eq!(game.clues.len(), 12);
        for packet in &game.character_packets {
            assert!((2..=3).contains(&packet.clue_ids.len()), "{packet:?}");
        }
    }

    #[test]
    fn random_category_resolves_to_catalog_entry() {
        let game = FakeGenerationService::new(3).build(&request(Some(5))).unwrap();
        let chosen = game.meta.category_id.unwrap();
        assert!(sample_categories().iter().any(|c| c.id == chosen));
    }

    #[test]
    fn share_code_carries_seed_record() {
        let game = FakeGenerationService::new(3).build(&request(Some(5))).unwrap();
        let prefill = SharePrefill::from_code(&game.meta.share_code).unwrap();
        assert_eq!(prefill.seed, Some(5));
        assert_eq!(prefill.player_count, Some(6));
        assert_eq!(prefill.tone, Some(Tone::Suspense));
        assert_eq!(prefill.player_names, None);
    }

    #[test]
    fn mismatched_names_are_rejected() {
        let mut req = request(None);
        req.player_names = Some(vec![String::from("Ann"), String::from("Bo")]);
        let err = FakeGenerationService::new(1).build(&req).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), NAMES_MISMATCH);
    }

    #[test]
    fn rejecting_service_fails_every_request() {
        let service = FakeGenerationService::new(1).rejecting(503, "Upstream model unavailable.");
        let err = service.build(&request(Some(1))).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
