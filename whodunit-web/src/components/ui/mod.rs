pub mod category_grid;
pub mod character_modal;
pub mod clue_list;
pub mod game_board;
pub mod host_modal;
pub mod setup_form;
pub mod share_code_bar;
pub mod status_line;
