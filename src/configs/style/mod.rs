pub mod colors;
mod counter;
mod list;
mod screen_scaffold;
mod status;
mod styles;

pub use colors::{Colors, DEFAULT_COLOR};
pub use counter::Counter;
pub use list::List;
pub use screen_scaffold::ScreenScaffold;
pub use status::Status;
pub use styles::Borders;
pub use styles::FontWeight;
pub use styles::Styles;
