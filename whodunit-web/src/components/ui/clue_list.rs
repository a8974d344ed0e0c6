use crate::i18n::t;
use whodunit_game::view::ClueLine;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub clues: Vec<ClueLine>,
}

#[function_component(ClueList)]
pub fn clue_list(p: &Props) -> Html {
    if p.clues.is_empty() {
        return html! { <p class="muted">{ t("character.no_clues") }</p> };
    }
    html! {
        <ul class="clue-list">
            { for p.clues.iter().enumerate().map(|(index, line)| {
                let class = classes!("clue", line.missing.then_some("clue--missing"));
                let description = if line.missing {
                    t("character.missing")
                } else {
                    line.description.clone()
                };
                html! {
                    <li key={format!("{index}-{}", line.clue_id)} {class} data-clue={line.clue_id.clone()}>
                        <strong>{ line.title.clone() }</strong>
                        <span>{ description }</span>
                    </li>
                }
            }) }
        </ul>
    }
}
