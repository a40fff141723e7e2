use ratatui::{style::Modifier, widgets::Borders};

use crate::configs::style;

impl From<&style::Borders> for Borders {
    fn from(config_borders: &style::Borders) -> Self {
        match config_borders {
            style::Borders::Top => Borders::TOP,
            style::Borders::Left => Borders::LEFT,
            style::Borders::Right => Borders::RIGHT,
            style::Borders::Bottom => Borders::BOTTOM,
            style::Borders::All => Borders::ALL,
        }
    }
}

/// Unions the configured sides, `None` when the list is empty.
pub fn parse_borders(config_borders: &[style::Borders]) -> Option<Borders> {
    config_borders
        .iter()
        .map(Borders::from)
        .reduce(|acc, b| acc | b)
}

pub fn parse_font_weight(font_weight: style::FontWeight) -> Option<Modifier> {
    match font_weight {
        style::FontWeight::Bold => Some(Modifier::BOLD),
        style::FontWeight::Regular => None,
    }
}
