//! Browser execution of state-machine effects.

use whodunit_game::service::parse_generation;
use whodunit_game::{Category, GeneratedGame, ServiceError, parse_categories};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserEffects;

/// Outcome of a request as seen by the runner: a reply, or the transport
/// failure text.
pub type Fetched = Result<(u16, String), String>;

/// Interpret a categories fetch.
///
/// # Errors
/// Transport failures and unusable replies become [`ServiceError`]s.
pub fn categories_outcome(fetched: Fetched) -> Result<Vec<Category>, ServiceError> {
    let (status, body) = fetched.map_err(ServiceError::Transport)?;
    parse_categories(status, &body)
}

/// Interpret a generation request.
///
/// # Errors
/// Transport failures and unusable replies become [`ServiceError`]s.
pub fn generation_outcome(fetched: Fetched) -> Result<Box<GeneratedGame>, ServiceError> {
    let (status, body) = fetched.map_err(ServiceError::Transport)?;
    parse_generation(status, &body).map(Box::new)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Fetched, categories_outcome, generation_outcome};
    use crate::app::state::{Dispatcher, EffectRunner};
    use crate::dom::{self, HttpReply};
    use crate::storage::browser_vault;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::spawn_local;
    use whodunit_game::export::EXPORT_MIME;
    use whodunit_game::{Action, ClientSettings, Effect};

    fn fetched(reply: Result<HttpReply, JsValue>) -> Fetched {
        reply
            .map(|r| (r.status, r.body))
            .map_err(|err| dom::js_error_message(&err))
    }

    /// Runs effects against `fetch`, `localStorage`, the clipboard, and
    /// object-URL downloads.
    #[derive(Debug, Clone)]
    pub struct BrowserEffects {
        settings: ClientSettings,
    }

    impl BrowserEffects {
        #[must_use]
        pub const fn new(settings: ClientSettings) -> Self {
            Self { settings }
        }
    }

    impl EffectRunner for BrowserEffects {
        fn run(&self, effect: Effect, dispatcher: &Dispatcher) {
            match effect {
                Effect::FetchCategories => {
                    let url = self.settings.categories_url();
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        let outcome = categories_outcome(fetched(dom::get_text(&url).await));
                        dispatcher.dispatch(Action::CategoriesLoaded(outcome));
                    });
                }
                Effect::LoadSavedGame => {
                    let hydration = browser_vault(&self.settings.storage_key).hydrate();
                    dispatcher.dispatch(Action::Hydrated(hydration));
                }
                Effect::Generate(request) => {
                    let url = self.settings.generate_url();
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        let outcome = match serde_json::to_string(&request) {
                            Ok(body) => generation_outcome(fetched(dom::post_json(&url, &body).await)),
                            Err(err) => generation_outcome(Err(err.to_string())),
                        };
                        dispatcher.dispatch(Action::GenerationFinished { request, outcome });
                    });
                }
                Effect::PersistGame(game) => {
                    if let Err(err) = browser_vault(&self.settings.storage_key).persist(&game) {
                        log::warn!("could not save game: {err}");
                        dom::console_error(&err.to_string());
                    }
                }
                Effect::DownloadExport(body) => {
                    if let Err(err) =
                        dom::download_text(&self.settings.export_file_name, EXPORT_MIME, &body)
                    {
                        dispatcher.dispatch(Action::EffectFailed(dom::js_error_message(&err)));
                    }
                }
                Effect::CopyToClipboard(text) => {
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        if let Err(err) = dom::write_clipboard(&text).await {
                            dispatcher.dispatch(Action::EffectFailed(format!(
                                "Could not copy to clipboard: {}",
                                dom::js_error_message(&err)
                            )));
                        }
                    });
                }
            }
        }
    }
}
