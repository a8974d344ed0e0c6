//! Read-only projections of [`AppState`] for rendering.
//!
//! Shells render these instead of reaching into the game document, so the
//! host gating and the missing-clue fallbacks live in one place.

use crate::clues::{ClueEntry, ClueIndex};
use crate::machine::{AppState, Modal};
use crate::model::{CharacterPacket, GeneratedGame, Relationship, Round, TimelineEvent};

pub const MISSING_CLUE: &str = "Missing clue details.";
pub const NO_CLUES: &str = "No clues assigned.";
pub const NO_MONOLOGUE: &str = "No intro monologue provided.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueLine {
    pub clue_id: String,
    pub title: String,
    pub description: String,
    /// The packet referenced an id the game does not define.
    pub missing: bool,
}

/// Everything shown in a character reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterView {
    pub character_id: String,
    pub name: String,
    pub role_title: String,
    pub backstory: String,
    pub traits: Vec<String>,
    pub public_goal: String,
    pub secret_goal: String,
    pub secrets: Vec<String>,
    pub alibi: String,
    pub connection_to_victim: String,
    pub relationships: Vec<Relationship>,
    pub prop_suggestion: Option<String>,
    pub clues: Vec<ClueLine>,
    pub intro_monologue: Vec<String>,
    pub empty_clues_note: Option<&'static str>,
    pub empty_monologue_note: Option<&'static str>,
}

#[must_use]
pub fn character_view(packet: &CharacterPacket, index: &ClueIndex) -> CharacterView {
    let clues: Vec<ClueLine> = packet
        .clue_ids
        .iter()
        .map(|id| match index.resolve(id) {
            ClueEntry::Known(clue) => ClueLine {
                clue_id: clue.clue_id.clone(),
                title: clue.title.clone(),
                description: clue.description.clone(),
                missing: false,
            },
            ClueEntry::Missing(id) => ClueLine {
                clue_id: id.to_string(),
                title: id.to_string(),
                description: MISSING_CLUE.to_string(),
                missing: true,
            },
        })
        .collect();

    CharacterView {
        character_id: packet.character_id.clone(),
        name: packet.name.clone(),
        role_title: packet.role_title.clone(),
        backstory: packet.backstory.clone(),
        traits: packet.traits.clone(),
        public_goal: packet.public_goal.clone(),
        secret_goal: packet.secret_goal.clone(),
        secrets: packet.secrets.clone(),
        alibi: packet.alibi.clone(),
        connection_to_victim: packet.connection_to_victim.clone(),
        relationships: packet.relationships.clone(),
        prop_suggestion: packet.prop_suggestion.clone(),
        empty_clues_note: clues.is_empty().then_some(NO_CLUES),
        empty_monologue_note: packet.intro_monologue.is_empty().then_some(NO_MONOLOGUE),
        clues,
        intro_monologue: packet.intro_monologue.clone(),
    }
}

/// The character reveal currently open, if any.
#[must_use]
pub fn open_character(state: &AppState) -> Option<CharacterView> {
    let Modal::CharacterReveal(id) = state.modal() else {
        return None;
    };
    let packet = state.current_game()?.character(id)?;
    Some(character_view(packet, state.clue_index()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionView {
    pub murderer: String,
    pub motive: String,
    pub method: String,
    pub opportunity: String,
    pub reveal_explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostView {
    /// Spoiler warning with the confirmation checkbox.
    Prompt { can_reveal: bool },
    Solution(SolutionView),
}

/// Host modal contents. `None` unless the host modal is open.
///
/// The solution is only ever built after the host confirmed the spoiler
/// warning for the current game.
#[must_use]
pub fn host_view(state: &AppState) -> Option<HostView> {
    if state.modal() != &Modal::HostReveal {
        return None;
    }
    let game = state.current_game()?;
    if !state.host_reveal_confirmed() {
        return Some(HostView::Prompt {
            can_reveal: state.host_checkbox(),
        });
    }
    let solution = &game.solution;
    let murderer = game
        .character(&solution.murderer_id)
        .map_or_else(|| solution.murderer_id.clone(), |c| c.name.clone());
    Some(HostView::Solution(SolutionView {
        murderer,
        motive: solution.motive.clone(),
        method: solution.method.clone(),
        opportunity: solution.opportunity.clone(),
        reveal_explanation: solution.reveal_explanation.clone(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    pub character_id: String,
    pub name: String,
    pub role_title: String,
}

/// The game board outside any modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub title: String,
    pub theme_summary: String,
    pub share_code: String,
    pub victim: Option<String>,
    pub storyline: Vec<String>,
    pub timeline: Vec<TimelineEvent>,
    pub rounds: Vec<Round>,
    /// Empty hides the props panel.
    pub props: Vec<String>,
    pub characters: Vec<CharacterCard>,
}

impl GameSummary {
    #[must_use]
    pub fn of(game: &GeneratedGame) -> Self {
        Self {
            title: game.title.clone(),
            theme_summary: game.theme_summary.clone(),
            share_code: game.meta.share_code.clone(),
            victim: game
                .victim
                .as_ref()
                .map(|v| format!("{}, {}", v.name, v.role)),
            storyline: game.storyline_overview.clone(),
            timeline: game.timeline.clone(),
            rounds: game.how_to_play.clone(),
            props: game.props_list.clone(),
            characters: game
                .character_packets
                .iter()
                .map(|p| CharacterCard {
                    character_id: p.character_id.clone(),
                    name: p.name.clone(),
                    role_title: p.role_title.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn shows_props(&self) -> bool {
        !self.props.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_game;
    use crate::machine::{Action, update};

    fn with_game() -> AppState {
        let request = crate::config::Configuration::from_draft(
            &crate::config::ConfigDraft::default(),
            None,
        )
        .unwrap();
        update(
            AppState::new(),
            Action::GenerationFinished {
                request,
                outcome: Ok(Box::new(sample_game())),
            },
        )
        .state
    }

    fn apply(state: AppState, action: Action) -> AppState {
        update(state, action).state
    }

    #[test]
    fn dangling_clue_renders_placeholder() {
        let game = sample_game();
        let index = ClueIndex::build(&game.clues);
        let mut packet = game.character_packets[0].clone();
        packet.clue_ids.push(String::from("c404"));
        let view = character_view(&packet, &index);
        let last = view.clues.last().unwrap();
        assert!(last.missing);
        assert_eq!(last.description, MISSING_CLUE);
        assert_eq!(view.clues.len(), packet.clue_ids.len());
    }

    #[test]
    fn empty_lists_get_fallback_notes() {
        let game = sample_game();
        let index = ClueIndex::build(&game.clues);
        let mut packet = game.character_packets[0].clone();
        packet.clue_ids.clear();
        packet.intro_monologue.clear();
        let view = character_view(&packet, &index);
        assert_eq!(view.empty_clues_note, Some(NO_CLUES));
        assert_eq!(view.empty_monologue_note, Some(NO_MONOLOGUE));
    }

    #[test]
    fn host_view_hides_solution_until_confirmed() {
        let state = apply(with_game(), Action::OpenHost);
        assert_eq!(
            host_view(&state),
            Some(HostView::Prompt { can_reveal: false })
        );
        let state = apply(state, Action::SetHostCheckbox(true));
        assert_eq!(host_view(&state), Some(HostView::Prompt { can_reveal: true }));
        let state = apply(state, Action::ConfirmHostReveal);
        match host_view(&state) {
            Some(HostView::Solution(solution)) => {
                assert_eq!(solution.murderer, "Bo Vance");
            }
            other => panic!("expected solution, got {other:?}"),
        }
    }

    #[test]
    fn murderer_name_falls_back_to_id() {
        let mut game = sample_game();
        game.solution.murderer_id = String::from("char_x");
        let request = crate::config::Configuration::from_draft(
            &crate::config::ConfigDraft::default(),
            None,
        )
        .unwrap();
        let state = [
            Action::GenerationFinished {
                request,
                outcome: Ok(Box::new(game)),
            },
            Action::OpenHost,
            Action::SetHostCheckbox(true),
            Action::ConfirmHostReveal,
        ]
        .into_iter()
        .fold(AppState::new(), apply);
        let Some(HostView::Solution(solution)) = host_view(&state) else {
            panic!("host view should show the solution");
        };
        assert_eq!(solution.murderer, "char_x");
    }

    #[test]
    fn host_view_closed_is_none() {
        assert_eq!(host_view(&with_game()), None);
        assert_eq!(host_view(&AppState::new()), None);
    }

    #[test]
    fn open_character_follows_modal() {
        let state = apply(with_game(), Action::OpenCharacter(String::from("char_1")));
        let view = open_character(&state).unwrap();
        assert_eq!(view.name, "Ann Marsh");
        assert!(view.clues.iter().all(|line| !line.missing));
    }

    #[test]
    fn summary_lists_characters_in_order() {
        let summary = GameSummary::of(&sample_game());
        let ids: Vec<&str> = summary
            .characters
            .iter()
            .map(|c| c.character_id.as_str())
            .collect();
        assert_eq!(ids, ["char_1", "char_2", "char_3", "char_4"]);
        assert!(summary.shows_props());
    }
}
