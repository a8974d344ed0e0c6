//! Owner of the single [`AppState`] value.
//!
//! Components never mutate state. They emit [`Action`]s through the
//! [`Dispatcher`], which applies them, redraws, and hands any resulting
//! [`Effect`]s to an [`EffectRunner`].

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use whodunit_game::{Action, AppState, Effect};
use yew::prelude::*;

/// Executes effects on behalf of the dispatcher.
///
/// Implementations report results back by dispatching further actions.
pub trait EffectRunner {
    fn run(&self, effect: Effect, dispatcher: &Dispatcher);
}

#[derive(Clone)]
pub struct Dispatcher {
    state: Rc<RefCell<AppState>>,
    redraw: Rc<dyn Fn()>,
    runner: Rc<dyn EffectRunner>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Dispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Dispatcher {
    pub fn new(
        state: Rc<RefCell<AppState>>,
        redraw: impl Fn() + 'static,
        runner: Rc<dyn EffectRunner>,
    ) -> Self {
        Self {
            state,
            redraw: Rc::new(redraw),
            runner,
        }
    }

    /// Apply `action`, redraw, then run the effects it produced in order.
    pub fn dispatch(&self, action: Action) {
        let effects = self.state.borrow_mut().apply(action);
        (self.redraw)();
        for effect in effects {
            self.runner.run(effect, self);
        }
    }

    /// Callback that maps its input to an action and dispatches it.
    pub fn callback<T: 'static>(&self, to_action: impl Fn(T) -> Action + 'static) -> Callback<T> {
        let dispatcher = self.clone();
        Callback::from(move |value: T| dispatcher.dispatch(to_action(value)))
    }

    /// Callback dispatching a fixed action.
    pub fn emit(&self, action: Action) -> Callback<()> {
        self.callback(move |()| action.clone())
    }

    #[must_use]
    pub fn state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }
}

/// Hold the application state for the lifetime of the calling component.
#[hook]
pub fn use_dispatcher(runner: Rc<dyn EffectRunner>) -> Dispatcher {
    let state = use_mut_ref(AppState::new);
    let redraw = use_force_update();
    Dispatcher::new(state, move || redraw.force_update(), runner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use whodunit_game::fixtures::{sample_categories, sample_game};
    use whodunit_game::{Hydration, Mode};

    /// Answers every effect immediately with canned data.
    #[derive(Default)]
    struct Scripted {
        seen: RefCell<Vec<Effect>>,
    }

    impl EffectRunner for Scripted {
        fn run(&self, effect: Effect, dispatcher: &Dispatcher) {
            self.seen.borrow_mut().push(effect.clone());
            match effect {
                Effect::FetchCategories => {
                    dispatcher.dispatch(Action::CategoriesLoaded(Ok(sample_categories())));
                }
                Effect::LoadSavedGame => dispatcher.dispatch(Action::Hydrated(Hydration::Empty)),
                Effect::Generate(request) => dispatcher.dispatch(Action::GenerationFinished {
                    request,
                    outcome: Ok(Box::new(sample_game())),
                }),
                Effect::PersistGame(_) | Effect::DownloadExport(_) | Effect::CopyToClipboard(_) => {}
            }
        }
    }

    fn dispatcher(runner: Rc<Scripted>, redraws: Rc<Cell<u32>>) -> Dispatcher {
        Dispatcher::new(
            Rc::new(RefCell::new(AppState::new())),
            move || redraws.set(redraws.get() + 1),
            runner,
        )
    }

    #[test]
    fn boot_loads_catalog_and_redraws_per_action() {
        let runner = Rc::new(Scripted::default());
        let redraws = Rc::new(Cell::new(0));
        let d = dispatcher(runner.clone(), redraws.clone());
        d.dispatch(Action::Boot);
        assert_eq!(d.state().categories().len(), sample_categories().len());
        assert_eq!(redraws.get(), 3);
        assert_eq!(
            *runner.seen.borrow(),
            vec![Effect::FetchCategories, Effect::LoadSavedGame]
        );
    }

    #[test]
    fn submit_runs_generation_then_persist() {
        let runner = Rc::new(Scripted::default());
        let d = dispatcher(runner.clone(), Rc::new(Cell::new(0)));
        d.emit(Action::Submit).emit(());
        assert_eq!(d.state().mode(), Mode::GameView);
        assert!(!d.state().in_flight());
        let seen = runner.seen.borrow();
        assert!(matches!(seen.as_slice(), [Effect::Generate(_), Effect::PersistGame(_)]));
    }

    #[test]
    fn callbacks_map_inputs_to_actions() {
        let d = dispatcher(Rc::new(Scripted::default()), Rc::new(Cell::new(0)));
        d.callback(Action::SelectCategory)
            .emit(String::from("jazz_club"));
        assert_eq!(d.state().selected_category_id(), Some("jazz_club"));
    }
}
