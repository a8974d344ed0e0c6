use whodunit_game::Mode;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Setup,
    #[at("/game")]
    Game,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_mode(mode: Mode) -> Self {
        match mode {
            Mode::Setup => Self::Setup,
            Mode::GameView => Self::Game,
        }
    }

    #[must_use]
    pub const fn to_mode(&self) -> Option<Mode> {
        match self {
            Self::Setup => Some(Mode::Setup),
            Self::Game => Some(Mode::GameView),
            Self::NotFound => None, // Keep the current mode on unknown paths.
        }
    }
}
