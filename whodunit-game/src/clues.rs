use std::collections::HashMap;

use crate::model::Clue;

/// Lookup from `clue_id` to the full clue record of one game.
///
/// Always rebuilt from scratch when the game changes; there is no way to
/// insert into an existing index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueIndex {
    by_id: HashMap<String, Clue>,
}

/// Result of resolving a clue reference for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueEntry<'a> {
    Known(&'a Clue),
    Missing(&'a str),
}

impl ClueIndex {
    /// Index a game's clues. On duplicate ids the first record wins.
    #[must_use]
    pub fn build(clues: &[Clue]) -> Self {
        let mut by_id = HashMap::with_capacity(clues.len());
        for clue in clues {
            by_id
                .entry(clue.clue_id.clone())
                .or_insert_with(|| clue.clone());
        }
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, clue_id: &str) -> Option<&Clue> {
        self.by_id.get(clue_id)
    }

    #[must_use]
    pub fn contains(&self, clue_id: &str) -> bool {
        self.by_id.contains_key(clue_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.by_id.keys().map(String::as_str)
    }

    /// Resolve a reference, logging a data-integrity warning when it dangles.
    #[must_use]
    pub fn resolve<'a>(&'a self, clue_id: &'a str) -> ClueEntry<'a> {
        if let Some(clue) = self.by_id.get(clue_id) {
            ClueEntry::Known(clue)
        } else {
            log::warn!("character packet references unknown clue `{clue_id}`");
            ClueEntry::Missing(clue_id)
        }
    }
}
