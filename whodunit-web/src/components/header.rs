use crate::i18n::t;
use whodunit_game::Mode;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: Mode,
    pub has_game: bool,
    pub on_setup: Callback<()>,
    pub on_game: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_setup = {
        let cb = p.on_setup.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_game = {
        let cb = p.on_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let current = |mode: Mode| (p.mode == mode).then(|| AttrValue::from("page"));
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-left">
                    <h1>{ t("app.title") }</h1>
                    <p class="tagline">{ t("app.tagline") }</p>
                </div>
                <nav class="header-right" aria-label={t("nav.label")}>
                    <button
                        id="nav-setup"
                        aria-current={current(Mode::Setup)}
                        onclick={on_setup}
                    >
                        { t("nav.setup") }
                    </button>
                    <button
                        id="nav-game"
                        aria-current={current(Mode::GameView)}
                        disabled={!p.has_game}
                        onclick={on_game}
                    >
                        { t("nav.game") }
                    </button>
                </nav>
            </div>
        </header>
    }
}
