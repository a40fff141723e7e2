mod counter_view;
mod question_list;
mod status_bar;
pub mod style;

pub use counter_view::{CounterView, value_text};
pub use question_list::QuestionList;
pub use status_bar::StatusBar;
pub use style::{ColorStyle, Styles, parse_color};
