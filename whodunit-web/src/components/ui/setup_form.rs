use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use whodunit_game::{ConfigDraft, DURATION_CHOICES, DraftField, MAX_PLAYERS, MIN_PLAYERS, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub draft: ConfigDraft,
    pub in_flight: bool,
    pub can_regenerate: bool,
    #[prop_or_default]
    pub draft_share_code: Option<AttrValue>,
    pub on_edit: Callback<DraftField>,
    pub on_submit: Callback<()>,
    pub on_regenerate: Callback<()>,
    pub on_share_draft: Callback<()>,
}

fn tone_label(tone: &Tone) -> String {
    match tone {
        Tone::Other(raw) => raw.clone(),
        known => t(&format!("tone.{}", known.as_str())),
    }
}

fn minutes_label(minutes: u16) -> String {
    let count = minutes.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    tr("setup.minutes", Some(&args))
}

/// Tone choices, with a loaded non-preset tone kept selectable.
fn tone_options(current: &Tone) -> Vec<Tone> {
    let mut options = Tone::CHOICES.to_vec();
    if !options.contains(current) {
        options.push(current.clone());
    }
    options
}

fn duration_options(current: u16) -> Vec<u16> {
    let mut options = DURATION_CHOICES.to_vec();
    if !options.contains(&current) {
        options.push(current);
        options.sort_unstable();
    }
    options
}

fn text_input(on_edit: &Callback<DraftField>, field: fn(String) -> DraftField) -> Callback<InputEvent> {
    let cb = on_edit.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            cb.emit(field(input.value()));
        }
    })
}

#[function_component(SetupForm)]
pub fn setup_form(p: &Props) -> Html {
    let on_count = text_input(&p.on_edit, DraftField::PlayerCount);
    let on_names = text_input(&p.on_edit, DraftField::PlayerNames);
    let on_seed = text_input(&p.on_edit, DraftField::Seed);
    let on_tone = {
        let cb = p.on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(DraftField::Tone(Tone::from(sel.value())));
            }
        })
    };
    let on_duration = {
        let cb = p.on_edit.clone();
        Callback::from(move |e: Event| {
            if let Some(minutes) = e
                .target_dyn_into::<web_sys::HtmlSelectElement>()
                .and_then(|sel| sel.value().parse::<u16>().ok())
            {
                cb.emit(DraftField::Duration(minutes));
            }
        })
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let on_regenerate = {
        let cb = p.on_regenerate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_share = {
        let cb = p.on_share_draft.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let draft = &p.draft;
    html! {
        <form id="setup-form" class="panel setup-form" onsubmit={on_submit} aria-labelledby="setup-heading">
            <h2 id="setup-heading">{ t("setup.heading") }</h2>

            <label for="player-count">{ t("setup.player_count") }</label>
            <input
                id="player-count"
                type="number"
                min={MIN_PLAYERS.to_string()}
                max={MAX_PLAYERS.to_string()}
                value={draft.player_count.clone()}
                aria-describedby="player-count-help"
                oninput={on_count}
            />
            <p id="player-count-help" class="muted">{ t("setup.player_count_help") }</p>

            <label for="player-names">{ t("setup.player_names") }</label>
            <input
                id="player-names"
                type="text"
                value={draft.player_names.clone()}
                aria-describedby="player-names-help"
                oninput={on_names}
            />
            <p id="player-names-help" class="muted">{ t("setup.player_names_help") }</p>

            <label for="tone">{ t("setup.tone") }</label>
            <select id="tone" onchange={on_tone}>
                { for tone_options(&draft.tone).iter().map(|tone| html! {
                    <option value={tone.as_str().to_string()} selected={*tone == draft.tone}>
                        { tone_label(tone) }
                    </option>
                }) }
            </select>

            <label for="duration">{ t("setup.duration") }</label>
            <select id="duration" onchange={on_duration}>
                { for duration_options(draft.duration).into_iter().map(|minutes| html! {
                    <option value={minutes.to_string()} selected={minutes == draft.duration}>
                        { minutes_label(minutes) }
                    </option>
                }) }
            </select>

            <label for="seed">{ t("setup.seed") }</label>
            <input
                id="seed"
                type="text"
                inputmode="numeric"
                value={draft.seed.clone()}
                aria-describedby="seed-help"
                oninput={on_seed}
            />
            <p id="seed-help" class="muted">{ t("setup.seed_help") }</p>

            <div class="controls">
                <button id="generate-btn" type="submit" disabled={p.in_flight}>
                    { if p.in_flight { t("setup.generating") } else { t("setup.generate") } }
                </button>
                <button
                    id="regenerate-btn"
                    type="button"
                    disabled={!p.can_regenerate}
                    onclick={on_regenerate}
                >
                    { t("setup.regenerate") }
                </button>
                <button id="share-setup-btn" type="button" onclick={on_share}>
                    { t("setup.share_setup") }
                </button>
            </div>
            if let Some(code) = p.draft_share_code.clone() {
                <p class="setup-code">
                    <span class="muted">{ t("setup.setup_code") }{ ": " }</span>
                    <code id="setup-code">{ code }</code>
                </p>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_tone_stays_selectable() {
        assert_eq!(tone_options(&Tone::Comedy).len(), 3);
        let options = tone_options(&Tone::from("comic"));
        assert_eq!(options.last(), Some(&Tone::from("comic")));
        assert_eq!(tone_label(&Tone::from("comic")), "comic");
        assert_eq!(tone_label(&Tone::Serious), "Serious");
    }

    #[test]
    fn loaded_duration_is_inserted_in_order() {
        assert_eq!(duration_options(60), vec![45, 60, 90]);
        assert_eq!(duration_options(75), vec![45, 60, 75, 90]);
        assert_eq!(minutes_label(45), "45 minutes");
    }
}
