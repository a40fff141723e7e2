mod form_screen;
mod status;

pub use form_screen::FormScreen;
pub use status::Status;
