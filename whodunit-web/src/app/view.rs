use crate::app::state::Dispatcher;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::ui::category_grid::CategoryGrid;
use crate::components::ui::character_modal::CharacterModal;
use crate::components::ui::game_board::GameBoard;
use crate::components::ui::host_modal::HostModal;
use crate::components::ui::setup_form::SetupForm;
use crate::components::ui::share_code_bar::ShareCodeBar;
use crate::components::ui::status_line::StatusLine;
use crate::i18n::t;
use whodunit_game::view::open_character;
use whodunit_game::{Action, AppState, GameSummary, Mode, StatusMessage, host_view};
use yew::prelude::*;

/// Status text in the active language. Messages that carry their own text
/// (validation and service errors) are shown as-is.
#[must_use]
pub fn status_text(status: &StatusMessage) -> String {
    status.key().map_or_else(|| status.to_string(), t)
}

fn render_setup(state: &AppState, d: &Dispatcher) -> Html {
    html! {
        <div id="setup-view">
            <ShareCodeBar
                value={AttrValue::from(state.share_input().to_string())}
                onchange={d.callback(Action::EditShareInput)}
                onload={d.emit(Action::LoadShareCode)}
            />
            <CategoryGrid
                categories={state.categories().to_vec()}
                selected={state.selected_category_id().map(|id| AttrValue::from(id.to_string()))}
                on_select={d.callback(Action::SelectCategory)}
                on_surprise={d.emit(Action::SurpriseMe)}
                on_clear={d.emit(Action::ClearCategory)}
            />
            <SetupForm
                draft={state.draft().clone()}
                in_flight={state.in_flight()}
                can_regenerate={state.can_regenerate()}
                draft_share_code={state.draft_share_code().map(|c| AttrValue::from(c.to_string()))}
                on_edit={d.callback(Action::EditDraft)}
                on_submit={d.emit(Action::Submit)}
                on_regenerate={d.emit(Action::Regenerate)}
                on_share_draft={d.emit(Action::ShareDraft)}
            />
        </div>
    }
}

fn render_game(state: &AppState, d: &Dispatcher) -> Html {
    let Some(game) = state.current_game() else {
        return html! { <p class="empty-game">{ t("game.empty") }</p> };
    };
    html! {
        <>
            <GameBoard
                summary={GameSummary::of(game)}
                can_regenerate={state.can_regenerate()}
                in_flight={state.in_flight()}
                on_open_character={d.callback(Action::OpenCharacter)}
                on_open_host={d.emit(Action::OpenHost)}
                on_export={d.emit(Action::Export)}
                on_copy_share={d.emit(Action::CopyShareCode)}
                on_regenerate={d.emit(Action::Regenerate)}
            />
            <CharacterModal view={open_character(state)} on_close={d.emit(Action::CloseModal)} />
            <HostModal
                view={host_view(state)}
                on_checkbox={d.callback(Action::SetHostCheckbox)}
                on_confirm={d.emit(Action::ConfirmHostReveal)}
                on_close={d.emit(Action::CloseModal)}
            />
        </>
    }
}

/// The whole page for the current state.
#[must_use]
pub fn render_app(dispatcher: &Dispatcher) -> Html {
    let state = dispatcher.state();
    let status = state.status();
    let main = match state.mode() {
        Mode::Setup => render_setup(&state, dispatcher),
        Mode::GameView => render_game(&state, dispatcher),
    };
    html! {
        <div class="app-shell">
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Header
                mode={state.mode()}
                has_game={state.current_game().is_some()}
                on_setup={dispatcher.emit(Action::BackToSetup)}
                on_game={dispatcher.emit(Action::ShowGame)}
            />
            <main id="main" role="main" aria-busy={state.in_flight().to_string()}>
                <StatusLine
                    text={status.map(|s| AttrValue::from(status_text(s)))}
                    is_error={status.is_some_and(StatusMessage::is_error)}
                />
                { main }
            </main>
            <Footer />
        </div>
    }
}
