pub mod events;
pub mod intent;
pub mod key_bindings;
pub mod screens;
mod strings;
mod tui_app;
pub mod views;

pub use tui_app::TuiApp;
