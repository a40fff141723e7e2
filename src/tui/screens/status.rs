use std::fmt::Display;

use crate::tui::strings::StatusStrings;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Modified,
    Saved,
    Error(String),
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Idle => write!(f, "{}", StatusStrings::IDLE),
            Status::Modified => write!(f, "{}", StatusStrings::MODIFIED),
            Status::Saved => write!(f, "{}", StatusStrings::SAVED),
            Status::Error(message) => write!(f, "{}: {}", StatusStrings::ERROR, message),
        }
    }
}
