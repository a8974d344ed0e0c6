use crate::a11y::LIVE_REGION_ID;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or_default]
    pub is_error: bool,
}

/// One-line status under the controls, announced politely.
#[function_component(StatusLine)]
pub fn status_line(p: &Props) -> Html {
    let class = classes!("status-line", p.is_error.then_some("status-line--error"));
    html! {
        <p id={LIVE_REGION_ID} {class} role="status" aria-live="polite">
            { p.text.clone().unwrap_or_default() }
        </p>
    }
}
