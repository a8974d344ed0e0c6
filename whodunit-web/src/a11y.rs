// Accessibility helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, KeyboardEvent, Node};

/// Id of the status line, which doubles as the polite live region.
pub const LIVE_REGION_ID: &str = "status-live";

const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Critical CSS for focus rings and screen-reader-only text.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #c9a227;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Move focus back to the element with `id`, typically the button that
/// opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Keep Tab and Shift+Tab cycling inside the container with `container_id`.
///
/// The listener lives as long as the container element.
pub fn trap_focus_in(container_id: &str) {
    let Some(container) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return;
    };
    let scope = container.clone();
    let handler = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        if e.key() != "Tab" {
            return;
        }
        let Ok(nodes) = scope.query_selector_all(FOCUSABLE) else {
            return;
        };
        let len = nodes.length();
        if len == 0 {
            return;
        }
        let first = nodes.item(0).and_then(|n| n.dyn_into::<HtmlElement>().ok());
        let last = nodes
            .item(len - 1)
            .and_then(|n| n.dyn_into::<HtmlElement>().ok());
        let active = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.active_element())
            .map(Node::from);
        let (edge, wrap_to) = if e.shift_key() {
            (first, last)
        } else {
            (last, first)
        };
        if let (Some(edge), Some(target), Some(active)) = (edge, wrap_to, active)
            && edge.is_same_node(Some(&active))
        {
            e.prevent_default();
            let _ = target.focus();
        }
    });
    let _ = container.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
    handler.forget();
}
