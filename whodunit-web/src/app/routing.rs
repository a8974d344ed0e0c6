use crate::app::state::Dispatcher;
use crate::router::Route;
use whodunit_game::{Action, Mode};
#[cfg(target_arch = "wasm32")]
use {yew::prelude::*, yew_router::prelude::Navigator};

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn next_route_for_mode(mode: Mode, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_mode(mode);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Action that brings the state in line with a route the user navigated to
/// (back/forward buttons, a typed URL).
///
/// `/game` only counts when there is a game to show.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn action_for_route(current_mode: Mode, route: Option<&Route>, has_game: bool) -> Option<Action> {
    let wanted = route.and_then(Route::to_mode)?;
    match (current_mode, wanted) {
        (Mode::GameView, Mode::Setup) => Some(Action::BackToSetup),
        (Mode::Setup, Mode::GameView) if has_game => Some(Action::ShowGame),
        _ => None,
    }
}

/// Dispatch whatever `route` asks of a view rendered in `rendered_mode`.
///
/// Judged against the render-time mode, not the live state: effects earlier
/// in the same commit (startup hydration) may already have moved the mode,
/// and the route has not caught up yet.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn follow_route(dispatcher: &Dispatcher, rendered_mode: Mode, has_game: bool, route: Option<&Route>) {
    if let Some(action) = action_for_route(rendered_mode, route, has_game) {
        dispatcher.dispatch(action);
    }
}

/// Push the route for `mode` whenever the mode changes.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_mode(mode: Mode, navigator: Option<Navigator>, active_route: Option<Route>) {
    use_effect_with(mode, move |mode| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_mode(*mode, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

/// Follow browser navigation back into the state machine.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_mode_with_route(
    dispatcher: &Dispatcher,
    rendered_mode: Mode,
    has_game: bool,
    route: Option<Route>,
) {
    let dispatcher = dispatcher.clone();
    use_effect_with(route, move |route| {
        follow_route(&dispatcher, rendered_mode, has_game, route.as_ref());
    });
}
