pub mod colors;
mod convert;
mod counter;
mod list;
mod screen_scaffold;
mod status;
mod styles;

pub use colors::{ColorStyle, parse_color};
pub use counter::CounterStyle;
pub use list::ListStyle;
pub use screen_scaffold::ScreenScaffoldStyle;
pub use status::StatusStyle;
pub use styles::Styles;
