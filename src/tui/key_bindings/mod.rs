pub mod keybind;
mod parsed_keybindings;

pub use keybind::KeyBind;
pub use parsed_keybindings::ParsedKeyBindings;
