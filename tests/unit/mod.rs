//! Unit tests for the counter core, form binding and TUI input handling

mod answers_test;
mod colors_parsing_test;
mod keybind_test;
mod paths_test;
mod question_test;
