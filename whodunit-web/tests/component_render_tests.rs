use futures::executor::block_on;
use std::cell::RefCell;
use std::rc::Rc;
use whodunit_game::fixtures::{sample_categories, sample_game};
use whodunit_game::view::{GameSummary, HostView, SolutionView, character_view};
use whodunit_game::{
    Action, AppState, ClueIndex, ConfigDraft, Configuration, Effect, Mode, Tone,
};
use whodunit_web::app::{Dispatcher, EffectRunner, render_app};
use whodunit_web::components::footer::Footer;
use whodunit_web::components::header::Header;
use whodunit_web::components::modal::Modal;
use whodunit_web::components::ui::category_grid::CategoryGrid;
use whodunit_web::components::ui::character_modal::CharacterModal;
use whodunit_web::components::ui::game_board::GameBoard;
use whodunit_web::components::ui::host_modal::HostModal;
use whodunit_web::components::ui::setup_form::SetupForm;
use whodunit_web::components::ui::status_line::StatusLine;
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    whodunit_web::i18n::set_lang("en");
    block_on(LocalServerRenderer::<C>::with_props(props).render())
}

#[test]
fn header_marks_current_mode_and_gates_game_link() {
    let html = render::<Header>(whodunit_web::components::header::Props {
        mode: Mode::Setup,
        has_game: false,
        on_setup: Callback::noop(),
        on_game: Callback::noop(),
    });
    assert!(html.contains("nav-setup"));
    assert!(html.contains(r#"aria-current="page""#));
    assert!(html.contains("disabled"));
    assert!(html.contains("href=\"#main\""));
}

#[test]
fn footer_renders_copy() {
    whodunit_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open = render::<Modal>(whodunit_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::new(vec![html! { <p>{ "Packet body" }</p> }]),
    });
    assert!(open.contains("modal__header"));
    assert!(open.contains("Packet body"));
    assert!(open.contains(r#"aria-modal="true""#));

    let closed = render::<Modal>(whodunit_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    });
    assert!(!closed.contains("modal-backdrop"));
}

#[test]
fn status_line_flags_errors() {
    let html = render::<StatusLine>(whodunit_web::components::ui::status_line::Props {
        text: Some(AttrValue::from("Invalid share code.")),
        is_error: true,
    });
    assert!(html.contains("status-line--error"));
    assert!(html.contains("Invalid share code."));
    assert!(html.contains(r#"role="status""#));
}

#[test]
fn category_grid_highlights_selection() {
    let html = render::<CategoryGrid>(whodunit_web::components::ui::category_grid::Props {
        categories: sample_categories(),
        selected: Some(AttrValue::from("jazz_club")),
        on_select: Callback::noop(),
        on_surprise: Callback::noop(),
        on_clear: Callback::noop(),
    });
    assert!(html.contains(r#"data-category="gilded_gala""#));
    assert!(html.contains("Jazz Club"));
    assert_eq!(html.matches("category-card--selected").count(), 1);
}

#[test]
fn empty_catalog_shows_loading_note() {
    let html = render::<CategoryGrid>(whodunit_web::components::ui::category_grid::Props {
        categories: Vec::new(),
        selected: None,
        on_select: Callback::noop(),
        on_surprise: Callback::noop(),
        on_clear: Callback::noop(),
    });
    assert!(!html.contains("data-category"));
    assert!(html.contains("surprise-btn"));
}

#[test]
fn setup_form_reflects_flight_and_share_code() {
    let html = render::<SetupForm>(whodunit_web::components::ui::setup_form::Props {
        draft: ConfigDraft::default(),
        in_flight: true,
        can_regenerate: false,
        draft_share_code: Some(AttrValue::from("eyJzZWVkIjo0Mn0")),
        on_edit: Callback::noop(),
        on_submit: Callback::noop(),
        on_regenerate: Callback::noop(),
        on_share_draft: Callback::noop(),
    });
    assert!(html.contains("Generating"));
    assert!(html.contains(r#"id="setup-code""#));
    assert!(html.contains("eyJzZWVkIjo0Mn0"));
    assert!(html.contains(r#"value="6""#));
}

#[test]
fn game_board_lists_story_and_characters() {
    let html = render::<GameBoard>(whodunit_web::components::ui::game_board::Props {
        summary: GameSummary::of(&sample_game()),
        can_regenerate: true,
        in_flight: false,
        on_open_character: Callback::noop(),
        on_open_host: Callback::noop(),
        on_export: Callback::noop(),
        on_copy_share: Callback::noop(),
        on_regenerate: Callback::noop(),
    });
    assert!(html.contains("Murder at the Gilded Gala"));
    assert!(html.contains("eyJzZWVkIjo0Mn0"));
    assert!(html.contains("Lord Ashby, Host"));
    assert!(html.contains(r#"id="open-char_4""#));
    assert!(html.contains("4 Characters"));
    assert!(html.contains("Candelabra"));
    assert!(html.contains("15 minutes"));
}

#[test]
fn character_modal_resolves_clues_and_notes_empty_lists() {
    let game = sample_game();
    let index = ClueIndex::build(&game.clues);

    let ann = render::<CharacterModal>(whodunit_web::components::ui::character_modal::Props {
        view: Some(character_view(&game.character_packets[0], &index)),
        on_close: Callback::noop(),
    });
    assert!(ann.contains("Character packet: Ann Marsh"));
    assert!(ann.contains("Torn glove"));
    assert!(ann.contains("Smudged ledger"));

    let di = render::<CharacterModal>(whodunit_web::components::ui::character_modal::Props {
        view: Some(character_view(&game.character_packets[3], &index)),
        on_close: Callback::noop(),
    });
    assert!(di.contains("No clues assigned."));
}

#[test]
fn host_modal_hides_solution_until_confirmed() {
    let prompt = render::<HostModal>(whodunit_web::components::ui::host_modal::Props {
        view: Some(HostView::Prompt { can_reveal: false }),
        on_checkbox: Callback::noop(),
        on_confirm: Callback::noop(),
        on_close: Callback::noop(),
    });
    assert!(prompt.contains("host-confirm-checkbox"));
    assert!(!prompt.contains("Poisoned the champagne."));

    let solution = render::<HostModal>(whodunit_web::components::ui::host_modal::Props {
        view: Some(HostView::Solution(SolutionView {
            murderer: String::from("Bo Vance"),
            motive: String::from("Revenge for a lost inheritance."),
            method: String::from("Poisoned the champagne."),
            opportunity: String::from("Served the final toast."),
            reveal_explanation: String::from("The boots match the garden path."),
        })),
        on_checkbox: Callback::noop(),
        on_confirm: Callback::noop(),
        on_close: Callback::noop(),
    });
    assert!(solution.contains("Bo Vance"));
    assert!(solution.contains("Poisoned the champagne."));
    assert!(!solution.contains("host-reveal-btn"));
}

struct Inert;

impl EffectRunner for Inert {
    fn run(&self, _effect: Effect, _dispatcher: &Dispatcher) {}
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    actions: Vec<Action>,
}

#[function_component(Shell)]
fn shell(p: &ShellProps) -> Html {
    let dispatcher = Dispatcher::new(Rc::new(RefCell::new(AppState::new())), || {}, Rc::new(Inert));
    for action in p.actions.clone() {
        dispatcher.dispatch(action);
    }
    render_app(&dispatcher)
}

fn shell_after(actions: Vec<Action>) -> String {
    render::<Shell>(ShellProps { actions })
}

fn generated() -> Action {
    Action::GenerationFinished {
        request: Configuration {
            player_count: 4,
            player_names: None,
            category_id: String::from("gilded_gala"),
            tone: Tone::Comedy,
            duration: 60,
            seed: Some(42),
        },
        outcome: Ok(Box::new(sample_game())),
    }
}

#[test]
fn fresh_app_shows_setup() {
    let html = shell_after(Vec::new());
    assert!(html.contains(r#"id="setup-form""#));
    assert!(html.contains(r#"id="share-code""#));
    assert!(!html.contains("game-title"));
}

#[test]
fn generated_game_replaces_setup_with_board() {
    let html = shell_after(vec![Action::Submit, generated()]);
    assert!(html.contains("game-title"));
    assert!(html.contains("Game generated successfully."));
    assert!(!html.contains(r#"id="setup-form""#));
}

#[test]
fn invalid_draft_surfaces_validation_text() {
    let html = shell_after(vec![
        Action::EditDraft(whodunit_game::DraftField::PlayerCount(String::from("3"))),
        Action::Submit,
    ]);
    assert!(html.contains("Player count must be between 4 and 20."));
    assert!(html.contains("status-line--error"));
}

#[test]
fn host_reveal_requires_confirmation() {
    let opened = shell_after(vec![generated(), Action::OpenHost]);
    assert!(opened.contains("host-confirm-checkbox"));
    assert!(!opened.contains("Poisoned the champagne."));

    let revealed = shell_after(vec![
        generated(),
        Action::OpenHost,
        Action::SetHostCheckbox(true),
        Action::ConfirmHostReveal,
    ]);
    assert!(revealed.contains("Bo Vance"));
    assert!(revealed.contains("Poisoned the champagne."));
}

#[test]
fn opening_a_character_shows_their_packet() {
    let html = shell_after(vec![generated(), Action::OpenCharacter(String::from("char_2"))]);
    assert!(html.contains("Character packet: Bo Vance"));
    assert!(html.contains("Muddy boots"));
}

#[test]
fn clue_list_keeps_repeated_clue_ids() {
    let line = |id: &str, missing: bool| whodunit_game::view::ClueLine {
        clue_id: id.to_string(),
        title: format!("Title {id}"),
        description: String::from("Wet footprints by the door."),
        missing,
    };
    let html = render::<whodunit_web::components::ui::clue_list::ClueList>(
        whodunit_web::components::ui::clue_list::Props {
            clues: vec![line("clue_1", false), line("clue_1", false), line("clue_9", true)],
        },
    );
    assert_eq!(html.matches(r#"data-clue="clue_1""#).count(), 2);
    assert_eq!(html.matches("clue--missing").count(), 1);
}
