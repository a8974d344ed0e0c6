use crate::app::state::Dispatcher;
use whodunit_game::Action;
use yew::prelude::*;

/// Dispatch [`Action::Boot`] once, after the first render.
#[hook]
pub fn use_bootstrap(dispatcher: &Dispatcher) {
    let dispatcher = dispatcher.clone();
    use_effect_with((), move |()| {
        dispatcher.dispatch(Action::Boot);
    });
}
