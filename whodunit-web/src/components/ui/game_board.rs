use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use whodunit_game::view::{CharacterCard, GameSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: GameSummary,
    pub can_regenerate: bool,
    pub in_flight: bool,
    pub on_open_character: Callback<String>,
    pub on_open_host: Callback<()>,
    pub on_export: Callback<()>,
    pub on_copy_share: Callback<()>,
    pub on_regenerate: Callback<()>,
}

fn emit_unit(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

fn character_card(card: &CharacterCard, on_open: &Callback<String>) -> Html {
    let onclick = {
        let cb = on_open.clone();
        let id = card.character_id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    html! {
        <li key={card.character_id.clone()} class="character-card">
            <span class="character-card__name">{ card.name.clone() }</span>
            <span class="character-card__role">{ card.role_title.clone() }</span>
            <button id={format!("open-{}", card.character_id)} type="button" {onclick}>
                { t("game.open_packet") }
            </button>
        </li>
    }
}

#[function_component(GameBoard)]
pub fn game_board(p: &Props) -> Html {
    let s = &p.summary;
    let count = s.characters.len().to_string();
    let characters_heading = {
        let mut args = BTreeMap::new();
        args.insert("count", count.as_str());
        tr("game.characters", Some(&args))
    };
    html! {
        <section class="game-board" aria-labelledby="game-title">
            <header class="panel game-board__header">
                <h2 id="game-title">{ s.title.clone() }</h2>
                <p>{ s.theme_summary.clone() }</p>
                if let Some(victim) = s.victim.clone() {
                    <p class="victim"><strong>{ t("game.victim") }{ ": " }</strong>{ victim }</p>
                }
                <p class="share-code">
                    <span class="muted">{ t("game.share_code") }{ ": " }</span>
                    <code id="game-share-code">{ s.share_code.clone() }</code>
                </p>
                <div class="controls">
                    <button id="copy-share-btn" type="button" onclick={emit_unit(&p.on_copy_share)}>
                        { t("game.copy_share") }
                    </button>
                    <button id="export-btn" type="button" onclick={emit_unit(&p.on_export)}>
                        { t("game.export") }
                    </button>
                    <button
                        id="board-regenerate-btn"
                        type="button"
                        disabled={!p.can_regenerate}
                        onclick={emit_unit(&p.on_regenerate)}
                    >
                        { if p.in_flight { t("setup.generating") } else { t("setup.regenerate") } }
                    </button>
                    <button id="host-btn" type="button" class="host-btn" onclick={emit_unit(&p.on_open_host)}>
                        { t("game.host") }
                    </button>
                </div>
            </header>

            if !s.storyline.is_empty() {
                <section class="panel">
                    <h3>{ t("game.storyline") }</h3>
                    { for s.storyline.iter().map(|para| html! { <p>{ para.clone() }</p> }) }
                </section>
            }

            if !s.timeline.is_empty() {
                <section class="panel">
                    <h3>{ t("game.timeline") }</h3>
                    <ol class="timeline">
                        { for s.timeline.iter().map(|event| html! {
                            <li><strong>{ event.time.clone() }</strong>{ " " }{ event.description.clone() }</li>
                        }) }
                    </ol>
                </section>
            }

            if !s.rounds.is_empty() {
                <section class="panel">
                    <h3>{ t("game.how_to_play") }</h3>
                    <ol class="rounds">
                        { for s.rounds.iter().map(|round| {
                            let minutes = round.minutes.to_string();
                            let mut args = BTreeMap::new();
                            args.insert("count", minutes.as_str());
                            html! {
                                <li>
                                    <strong>{ round.title.clone() }</strong>
                                    { " (" }{ tr("setup.minutes", Some(&args)) }{ ") " }
                                    { round.description.clone() }
                                </li>
                            }
                        }) }
                    </ol>
                </section>
            }

            if s.shows_props() {
                <section class="panel props-panel">
                    <h3>{ t("game.props") }</h3>
                    <ul>{ for s.props.iter().map(|prop| html! { <li>{ prop.clone() }</li> }) }</ul>
                </section>
            }

            <section class="panel">
                <h3>{ characters_heading }</h3>
                <ul class="character-grid">
                    { for s.characters.iter().map(|card| character_card(card, &p.on_open_character)) }
                </ul>
            </section>
        </section>
    }
}
