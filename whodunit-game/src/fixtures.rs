//! Canned game documents for tests and the tester CLI.

use crate::model::{
    CharacterPacket, Clue, GameMeta, GeneratedGame, Relationship, Round, Solution, TimelineEvent,
    Victim,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn packet(id: &str, name: &str, role: &str, clue_ids: &[&str]) -> CharacterPacket {
    CharacterPacket {
        character_id: id.to_string(),
        name: name.to_string(),
        role_title: role.to_string(),
        backstory: format!("{name} has history with the house."),
        traits: strings(&["observant", "guarded"]),
        public_goal: String::from("Find out who did it."),
        secret_goal: format!("Keep {name}'s debts quiet."),
        secrets: strings(&["Was seen near the study at nine."]),
        alibi: String::from("Claims to have been on the terrace."),
        connection_to_victim: String::from("Old acquaintance."),
        clue_ids: strings(clue_ids),
        intro_monologue: vec![format!("Good evening. I am {name}.")],
        relationships: vec![Relationship {
            character_id: String::from("char_1"),
            relationship: String::from("rival"),
        }],
        prop_suggestion: Some(String::from("A pocket watch")),
    }
}

fn clue(id: &str, title: &str, kind: &str, is_misleading: bool) -> Clue {
    Clue {
        clue_id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} found in the study."),
        kind: Some(kind.to_string()),
        is_misleading,
    }
}

/// A small, valid four-player game. The murderer is `char_2` ("Bo Vance").
#[must_use]
pub fn sample_game() -> GeneratedGame {
    GeneratedGame {
        title: String::from("Murder at the Gilded Gala"),
        theme_summary: String::from("A charity ball ends with a body in the study."),
        meta: GameMeta {
            share_code: String::from("eyJzZWVkIjo0Mn0"),
            seed: Some(42),
            player_count: Some(4),
            category_id: Some(String::from("gilded_gala")),
            tone: Some(String::from("comedy")),
            duration: Some(60),
            model: None,
        },
        storyline_overview: strings(&[
            "The host is found dead before dessert.",
            "Everyone had a reason to want him gone.",
        ]),
        timeline: vec![
            TimelineEvent {
                event_id: Some(String::from("t1")),
                time: String::from("8:00 PM"),
                description: String::from("Guests arrive."),
            },
            TimelineEvent {
                event_id: Some(String::from("t2")),
                time: String::from("9:15 PM"),
                description: String::from("The lights go out."),
            },
        ],
        how_to_play: vec![
            Round {
                round_id: Some(String::from("r1")),
                title: String::from("Introductions"),
                minutes: 15,
                description: String::from("Read your monologue aloud."),
            },
            Round {
                round_id: Some(String::from("r2")),
                title: String::from("Accusations"),
                minutes: 20,
                description: String::from("Name your suspect."),
            },
        ],
        props_list: strings(&["Candelabra", "Guest list"]),
        character_packets: vec![
            packet("char_1", "Ann Marsh", "Heiress", &["c1", "c2"]),
            packet("char_2", "Bo Vance", "Butler", &["c3"]),
            packet("char_3", "Cy Okafor", "Chef", &["c1"]),
            packet("char_4", "Di Laurent", "Detective", &[]),
        ],
        clues: vec![
            clue("c1", "Torn glove", "physical", false),
            clue("c2", "Smudged ledger", "document", true),
            clue("c3", "Muddy boots", "physical", false),
        ],
        solution: Solution {
            murderer_id: String::from("char_2"),
            motive: String::from("Revenge for a lost inheritance."),
            method: String::from("Poisoned the champagne."),
            opportunity: String::from("Served the final toast."),
            reveal_explanation: String::from("The boots match the garden path."),
        },
        victim: Some(Victim {
            name: String::from("Lord Ashby"),
            role: String::from("Host"),
            why_they_mattered: String::from("He controlled the family fortune."),
        }),
    }
}

/// A minimal category list matching the service's built-in catalog ids.
#[must_use]
pub fn sample_categories() -> Vec<crate::model::Category> {
    [
        ("gilded_gala", "Gilded Gala"),
        ("jazz_club", "Jazz Club"),
        ("space_outpost", "Space Outpost"),
    ]
    .into_iter()
    .map(|(id, name)| crate::model::Category {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("A murder at the {name}."),
        tone_tags: strings(&["comedy", "suspense"]),
        suggested_props: Vec::new(),
        suggested_archetypes: Vec::new(),
    })
    .collect()
}
