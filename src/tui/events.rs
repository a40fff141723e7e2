use crossterm::event::KeyEvent;

use crate::tui::key_bindings::ParsedKeyBindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Back,
    PreviousQuestion,
    NextQuestion,
    Increase,
    Decrease,
    Clear,
    Save,
}

pub fn handle_key(key: &KeyEvent, bindings: &ParsedKeyBindings) -> Option<InputEvent> {
    match () {
        _ if bindings.back.matches(key) => Some(InputEvent::Back),
        _ if bindings.select_previous.matches(key) => Some(InputEvent::PreviousQuestion),
        _ if bindings.select_next.matches(key) => Some(InputEvent::NextQuestion),
        _ if bindings.increase.matches(key) => Some(InputEvent::Increase),
        _ if bindings.decrease.matches(key) => Some(InputEvent::Decrease),
        _ if bindings.clear.matches(key) => Some(InputEvent::Clear),
        _ if bindings.save.matches(key) => Some(InputEvent::Save),
        _ => None,
    }
}
