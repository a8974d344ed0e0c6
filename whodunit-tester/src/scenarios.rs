//! Scripted client journeys.
//!
//! Each scenario starts from a fresh session, drives it with the same actions
//! the UI would emit, and checks the state after every step that matters.

use anyhow::{Context, Result, bail, ensure};
use whodunit_game::view::open_character;
use whodunit_game::{
    Action, Configuration, DEFAULT_STORAGE_KEY, DraftField, HostView,
    KeyValueStore, MemoryStore, Mode, SharePrefill, StatusMessage, host_view,
};

use crate::backend::GenerationBackend;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Smoke,
    Regenerate,
    Share,
    Storage,
    Failures,
}

impl Scenario {
    pub const ALL: [Self; 5] = [
        Self::Smoke,
        Self::Regenerate,
        Self::Share,
        Self::Storage,
        Self::Failures,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::Regenerate => "regenerate",
            Self::Share => "share",
            Self::Storage => "storage",
            Self::Failures => "failures",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "Boot, generate, open a packet, reveal the solution, export",
            Self::Regenerate => "Regenerate resends the remembered request and hides the solution",
            Self::Share => "A game's share code prefills a fresh form that recreates it",
            Self::Storage => "The last game survives a reload; corrupt saves are discarded",
            Self::Failures => "Validation, bad codes and service rejections keep prior state",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Run the scenario once with `seed` as the form's seed.
    ///
    /// # Errors
    /// Returns the first failed check.
    pub async fn run(self, backend: &dyn GenerationBackend, seed: u64) -> Result<()> {
        let seed = seed.to_string();
        match self {
            Self::Smoke => smoke(backend, &seed).await,
            Self::Regenerate => regenerate(backend, &seed).await,
            Self::Share => share(backend, &seed).await,
            Self::Storage => storage(backend, &seed).await,
            Self::Failures => failures(backend, &seed).await,
        }
    }
}

fn seeded(seed: &str) -> Action {
    Action::EditDraft(DraftField::Seed(seed.to_string()))
}

async fn generated_session<'a>(
    backend: &'a dyn GenerationBackend,
    store: MemoryStore,
    seed: &str,
) -> Result<Session<'a>> {
    let mut session = Session::new(backend, store);
    session.dispatch_all([Action::Boot, seeded(seed), Action::Submit]).await;
    ensure!(
        session.status() == Some(&StatusMessage::Generated),
        "generation did not succeed: {:?}",
        session.status()
    );
    Ok(session)
}

async fn smoke(backend: &dyn GenerationBackend, seed: &str) -> Result<()> {
    let mut session = Session::new(backend, MemoryStore::new());
    session.dispatch(Action::Boot).await;
    let first_category = session
        .state()
        .categories()
        .first()
        .map(|c| c.id.clone())
        .context("catalog is empty")?;
    ensure!(session.state().mode() == Mode::Setup, "boot left setup");

    session
        .dispatch_all([
            Action::SelectCategory(first_category.clone()),
            Action::EditDraft(DraftField::PlayerCount(String::from("6"))),
            seeded(seed),
            Action::Submit,
        ])
        .await;
    ensure!(!session.state().in_flight(), "request still in flight");
    let game = session
        .state()
        .current_game()
        .cloned()
        .with_context(|| format!("no game after submit: {:?}", session.status()))?;
    ensure!(session.state().mode() == Mode::GameView, "not showing the game");
    ensure!(game.character_packets.len() == 6, "expected six packets");
    ensure!(
        session.requests.first().map(|r| r.category_id.as_str()) == Some(first_category.as_str()),
        "selected category was not sent"
    );
    let index = session.state().clue_index();
    ensure!(
        game.clues.iter().all(|c| index.contains(&c.clue_id)),
        "clue index is missing entries"
    );

    let first_character = game
        .character_packets
        .first()
        .map(|p| p.character_id.clone())
        .context("game has no characters")?;
    session.dispatch(Action::OpenCharacter(first_character)).await;
    let packet = open_character(session.state()).context("character dialog did not open")?;
    ensure!(!packet.clues.is_empty() || packet.empty_clues_note.is_some(), "packet has no clue section");

    session.dispatch(Action::OpenHost).await;
    session.dispatch(Action::ConfirmHostReveal).await;
    ensure!(
        matches!(host_view(session.state()), Some(HostView::Prompt { .. })),
        "solution shown without the checkbox"
    );
    session
        .dispatch_all([Action::SetHostCheckbox(true), Action::ConfirmHostReveal])
        .await;
    let Some(HostView::Solution(solution)) = host_view(session.state()) else {
        bail!("solution hidden after confirmation");
    };
    ensure!(!solution.murderer.is_empty(), "murderer is blank");

    session.dispatch(Action::Export).await;
    let exported = session.downloads.last().context("nothing exported")?;
    let parsed: whodunit_game::GeneratedGame =
        serde_json::from_str(exported).context("export is not a game document")?;
    ensure!(parsed == game, "export differs from the game");
    Ok(())
}

async fn regenerate(backend: &dyn GenerationBackend, seed: &str) -> Result<()> {
    let mut session = generated_session(backend, MemoryStore::new(), seed).await?;
    let first = session.state().current_game().cloned().context("no game")?;

    session
        .dispatch_all([
            Action::OpenHost,
            Action::SetHostCheckbox(true),
            Action::ConfirmHostReveal,
            Action::BackToSetup,
            Action::EditDraft(DraftField::PlayerCount(String::from("9"))),
            Action::Regenerate,
        ])
        .await;
    ensure!(session.requests.len() == 2, "regenerate sent no request");
    ensure!(
        session.requests[0] == session.requests[1],
        "regenerate re-read the form: {:?}",
        session.requests[1]
    );
    ensure!(
        !session.state().host_reveal_confirmed(),
        "host confirmation survived regenerate"
    );
    let second = session.state().current_game().context("no game after regenerate")?;
    ensure!(
        session.state().memo().expects_reproducible(),
        "seeded request not remembered as reproducible"
    );
    ensure!(
        second.meta.share_code == first.meta.share_code,
        "seeded regenerate changed the share code"
    );
    Ok(())
}

async fn share(backend: &dyn GenerationBackend, seed: &str) -> Result<()> {
    let original = generated_session(backend, MemoryStore::new(), seed).await?;
    let code = original
        .state()
        .current_game()
        .map(|g| g.meta.share_code.clone())
        .context("no game")?;
    let sent = original.requests.first().cloned().context("no request")?;

    let mut friend = Session::new(backend, MemoryStore::new());
    friend
        .dispatch_all([
            Action::Boot,
            Action::EditShareInput(code.clone()),
            Action::LoadShareCode,
        ])
        .await;
    ensure!(
        friend.status() == Some(&StatusMessage::ShareLoaded),
        "share code rejected: {:?}",
        friend.status()
    );
    ensure!(friend.requests.is_empty(), "loading a code generated a game");
    ensure!(friend.state().draft().seed == seed, "seed not prefilled");

    friend.dispatch(Action::Submit).await;
    let recreated = friend.state().current_game().context("recreate failed")?;
    ensure!(recreated.meta.share_code == code, "share code did not recreate the game");

    friend.dispatch(Action::ShareDraft).await;
    let copied = friend.clipboard.last().context("setup code not copied")?;
    let prefill = SharePrefill::from_code(copied).context("setup code does not decode")?;
    let draft_config = Configuration::from_draft(friend.state().draft(), friend.state().selection())
        .context("prefilled draft is invalid")?;
    ensure!(prefill == SharePrefill::from(&draft_config), "setup code lost fields");
    ensure!(
        friend.requests.first().map(|r| r.player_count) == Some(sent.player_count),
        "prefilled count differs from the original request"
    );
    Ok(())
}

async fn storage(backend: &dyn GenerationBackend, seed: &str) -> Result<()> {
    let store = MemoryStore::new();
    let first = generated_session(backend, store.clone(), seed).await?;
    let saved = first.state().current_game().cloned().context("no game")?;

    let mut reloaded = Session::new(backend, store.clone());
    reloaded.dispatch(Action::Boot).await;
    ensure!(
        reloaded.state().current_game() == Some(&saved),
        "saved game was not restored"
    );
    ensure!(reloaded.state().mode() == Mode::GameView, "restored game not shown");
    reloaded.dispatch(Action::Regenerate).await;
    ensure!(reloaded.requests.is_empty(), "regenerate without a memo sent a request");

    store
        .set_item(DEFAULT_STORAGE_KEY, "{\"title\": 7")
        .context("could not corrupt the store")?;
    let mut corrupted = Session::new(backend, store.clone());
    corrupted.dispatch(Action::Boot).await;
    ensure!(corrupted.state().current_game().is_none(), "corrupt save was loaded");
    ensure!(corrupted.state().mode() == Mode::Setup, "corrupt save left setup");
    ensure!(!store.contains(DEFAULT_STORAGE_KEY), "corrupt save was kept");
    Ok(())
}

async fn failures(backend: &dyn GenerationBackend, seed: &str) -> Result<()> {
    let mut session = Session::new(backend, MemoryStore::new());
    session
        .dispatch_all([
            Action::Boot,
            Action::EditDraft(DraftField::PlayerCount(String::from("3"))),
            Action::Submit,
        ])
        .await;
    ensure!(
        matches!(session.status(), Some(StatusMessage::Validation(_))),
        "out-of-range count was not caught locally"
    );
    ensure!(session.requests.is_empty(), "invalid form reached the service");

    session
        .dispatch_all([
            Action::EditShareInput(String::from("not-valid-base64!!")),
            Action::LoadShareCode,
        ])
        .await;
    ensure!(
        session.status() == Some(&StatusMessage::ShareInvalid),
        "bad share code accepted"
    );

    session
        .dispatch_all([
            Action::EditDraft(DraftField::PlayerCount(String::from("4"))),
            seeded(seed),
            Action::Submit,
        ])
        .await;
    let kept = session.state().current_game().cloned().context("baseline generation failed")?;
    let memo = session.state().memo().clone();

    session
        .dispatch_all([
            Action::EditDraft(DraftField::PlayerNames(String::from("Ann, Bo"))),
            Action::Submit,
        ])
        .await;
    let Some(StatusMessage::Service(err)) = session.status() else {
        bail!("name mismatch was not rejected: {:?}", session.status());
    };
    ensure!(err.status().is_some_and(|s| s >= 400), "rejection carried no status");
    ensure!(session.state().current_game() == Some(&kept), "failure replaced the game");
    ensure!(session.state().memo() == &memo, "failure overwrote the memo");
    ensure!(!session.state().in_flight(), "failure left a request in flight");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FakeGenerationService;

    #[test]
    fn keys_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_key(scenario.key()), Some(scenario));
        }
        assert_eq!(Scenario::from_key("weather"), None);
    }

    #[tokio::test]
    async fn every_scenario_passes_against_the_fake() {
        let backend = FakeGenerationService::new(1337);
        for scenario in Scenario::ALL {
            for seed in [1, 42, 1337] {
                scenario
                    .run(&backend, seed)
                    .await
                    .unwrap_or_else(|err| panic!("{} seed {seed}: {err:#}", scenario.key()));
            }
        }
    }

    #[tokio::test]
    async fn rejecting_service_fails_smoke() {
        let backend = FakeGenerationService::new(1).rejecting(503, "Upstream model unavailable.");
        let err = Scenario::Smoke.run(&backend, 1).await.unwrap_err();
        assert!(format!("{err:#}").contains("no game after submit"));
    }
}
