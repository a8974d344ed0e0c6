use crate::components::modal::Modal;
use crate::i18n::t;
use whodunit_game::view::{HostView, SolutionView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub view: Option<HostView>,
    pub on_checkbox: Callback<bool>,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

fn prompt(can_reveal: bool, on_checkbox: &Callback<bool>, on_confirm: &Callback<()>) -> Html {
    let onchange = {
        let cb = on_checkbox.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    let onclick = {
        let cb = on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="host-prompt">
            <p class="warning" id="host-warning">{ t("host.warning") }</p>
            <label class="checkbox">
                <input id="host-confirm-checkbox" type="checkbox" checked={can_reveal} {onchange} />
                { t("host.confirm_checkbox") }
            </label>
            <button id="host-reveal-btn" type="button" disabled={!can_reveal} {onclick}>
                { t("host.reveal") }
            </button>
        </div>
    }
}

fn solution(view: &SolutionView) -> Html {
    let row = |key: &str, value: &str| {
        html! {
            <>
                <dt>{ t(key) }</dt>
                <dd>{ value.to_string() }</dd>
            </>
        }
    };
    html! {
        <dl class="solution">
            { row("host.murderer", &view.murderer) }
            { row("host.motive", &view.motive) }
            { row("host.method", &view.method) }
            { row("host.opportunity", &view.opportunity) }
            { row("host.explanation", &view.reveal_explanation) }
        </dl>
    }
}

#[function_component(HostModal)]
pub fn host_modal(p: &Props) -> Html {
    let body = match &p.view {
        Some(HostView::Prompt { can_reveal }) => prompt(*can_reveal, &p.on_checkbox, &p.on_confirm),
        Some(HostView::Solution(view)) => solution(view),
        None => Html::default(),
    };
    html! {
        <Modal
            open={p.view.is_some()}
            title={t("host.title")}
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from("host-btn"))}
        >
            { body }
        </Modal>
    }
}
