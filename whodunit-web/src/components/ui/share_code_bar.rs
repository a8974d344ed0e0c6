use crate::i18n;
use once_cell::sync::Lazy;
use regex::Regex;
use yew::prelude::*;

static SHARE_CODE_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\s*[A-Za-z0-9_+/-]{2,}={0,2}\s*$").ok());

/// Whether `code` looks like a share code at all. Decoding decides whether
/// it actually is one.
#[must_use]
pub fn is_share_code_shaped(code: &str) -> bool {
    SHARE_CODE_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(code))
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub onchange: Callback<String>,
    pub onload: Callback<()>,
}

#[function_component(ShareCodeBar)]
pub fn share_code_bar(p: &Props) -> Html {
    let oninput = {
        let cb = p.onchange.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onload = {
        let cb = p.onload.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let shaped = is_share_code_shaped(&p.value);
    let typed = !p.value.trim().is_empty();
    html! {
        <div class="panel share-code-bar">
            <label for="share-code"><strong>{ i18n::t("share.label") }</strong></label>
            <div class="controls">
                <input
                    id="share-code"
                    type="text"
                    class="share-code-input"
                    value={p.value.clone()}
                    {oninput}
                    aria-invalid={(typed && !shaped).then(|| AttrValue::from("true"))}
                    aria-describedby={Some(AttrValue::from("share-code-help"))}
                    placeholder={i18n::t("share.placeholder")}
                    spellcheck="false"
                    autocomplete="off"
                />
                <button id="share-load-btn" type="button" onclick={onload} disabled={!shaped}>
                    { i18n::t("share.load") }
                </button>
            </div>
            <p id="share-code-help" class="muted">{ i18n::t("share.help") }</p>
        </div>
    }
}
