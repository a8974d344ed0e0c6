use crate::a11y::{restore_focus, trap_focus_in};
use crate::i18n::t;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Element to refocus once the dialog closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog shell: backdrop click, the close button and Escape all emit
/// `on_close`. Clicks inside the dialog do not reach the backdrop.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();
    let prev_open = use_mut_ref(|| false);
    let last_return_focus = use_mut_ref(|| None::<AttrValue>);

    let container_id = format!("modal-{}", *modal_id);
    {
        let container_ref = container_ref.clone();
        let container_id = container_id.clone();
        let return_focus = props.return_focus_id.clone();
        use_effect_with(
            (props.open, return_focus),
            move |(is_open, return_focus_id)| {
                let was_open = *prev_open.borrow();
                *prev_open.borrow_mut() = *is_open;
                if *is_open {
                    if return_focus_id.is_some() {
                        *last_return_focus.borrow_mut() = return_focus_id.clone();
                    }
                    if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                        let _ = el.set_attribute("tabindex", "-1");
                        let _ = el.focus();
                    }
                    trap_focus_in(&container_id);
                } else if was_open && let Some(id) = last_return_focus.borrow().as_ref() {
                    restore_focus(id);
                }
                || {}
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                id={container_id}
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onkeydown={on_keydown}
                onclick={stop}
                ref={container_ref}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={t("ui.close")} onclick={on_close}>
                        {"X"}
                    </button>
                </div>
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
