use crate::components::modal::Modal;
use crate::components::ui::clue_list::ClueList;
use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use whodunit_game::view::CharacterView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// The open packet, `None` when the dialog is closed.
    #[prop_or_default]
    pub view: Option<CharacterView>,
    pub on_close: Callback<()>,
}

fn section(title_key: &str, body: Html) -> Html {
    html! {
        <section class="packet-section">
            <h3>{ t(title_key) }</h3>
            { body }
        </section>
    }
}

fn bullet_list(items: &[String]) -> Html {
    html! {
        <ul>{ for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }</ul>
    }
}

fn packet_body(view: &CharacterView) -> Html {
    html! {
        <div class="packet" data-character={view.character_id.clone()}>
            <p class="packet__role"><em>{ view.role_title.clone() }</em></p>
            { section("character.backstory", html! { <p>{ view.backstory.clone() }</p> }) }
            if !view.traits.is_empty() {
                { section("character.traits", bullet_list(&view.traits)) }
            }
            { section("character.public_goal", html! { <p>{ view.public_goal.clone() }</p> }) }
            { section("character.secret_goal", html! { <p>{ view.secret_goal.clone() }</p> }) }
            if !view.secrets.is_empty() {
                { section("character.secrets", bullet_list(&view.secrets)) }
            }
            { section("character.alibi", html! { <p>{ view.alibi.clone() }</p> }) }
            { section("character.connection", html! { <p>{ view.connection_to_victim.clone() }</p> }) }
            if !view.relationships.is_empty() {
                { section("character.relationships", html! {
                    <ul>
                        { for view.relationships.iter().map(|r| html! {
                            <li>{ format!("{}: {}", r.character_id, r.relationship) }</li>
                        }) }
                    </ul>
                }) }
            }
            if let Some(prop) = view.prop_suggestion.clone() {
                { section("character.prop", html! { <p>{ prop }</p> }) }
            }
            { section("character.clues", html! { <ClueList clues={view.clues.clone()} /> }) }
            { section("character.monologue", if view.intro_monologue.is_empty() {
                html! { <p class="muted">{ t("character.no_monologue") }</p> }
            } else {
                html! { <>{ for view.intro_monologue.iter().map(|line| html! { <p>{ line.clone() }</p> }) }</> }
            }) }
        </div>
    }
}

#[function_component(CharacterModal)]
pub fn character_modal(p: &Props) -> Html {
    let title = p.view.as_ref().map_or_else(String::new, |view| {
        let mut args = BTreeMap::new();
        args.insert("name", view.name.as_str());
        tr("character.dialog_title", Some(&args))
    });
    let return_focus = p
        .view
        .as_ref()
        .map(|view| AttrValue::from(format!("open-{}", view.character_id)));
    html! {
        <Modal
            open={p.view.is_some()}
            title={AttrValue::from(title)}
            on_close={p.on_close.clone()}
            return_focus_id={return_focus}
        >
            { p.view.as_ref().map(packet_body).unwrap_or_default() }
        </Modal>
    }
}
