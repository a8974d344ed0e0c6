//! Application shell: one state value, the browser effect runner, and the
//! router kept in step with the state's mode.

#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod effects;
pub mod routing;
pub mod state;
pub mod view;

pub use state::{Dispatcher, EffectRunner, use_dispatcher};
pub use view::render_app;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let runner = use_memo((), |()| effects::BrowserEffects::new(crate::paths::client_settings()));
    let dispatcher = use_dispatcher(runner as Rc<dyn EffectRunner>);
    bootstrap::use_bootstrap(&dispatcher);

    let navigator = use_navigator();
    let route = use_route::<Route>();
    let (mode, has_game) = {
        let state = dispatcher.state();
        (state.mode(), state.current_game().is_some())
    };

    routing::use_sync_route_with_mode(mode, navigator, route.clone());
    routing::use_sync_mode_with_route(&dispatcher, mode, has_game, route);

    render_app(&dispatcher)
}
