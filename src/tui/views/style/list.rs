use ratatui::{style::Modifier, widgets::Borders};

use crate::{
    configs::style::List,
    tui::views::style::convert::{parse_borders, parse_font_weight},
};

pub struct ListStyle {
    pub highlight_symbol: String,
    pub icon_answered: String,
    pub icon_unanswered: String,
    pub borders: Option<Borders>,
    pub font_weight: Option<Modifier>,
}

impl From<&List> for ListStyle {
    fn from(list_style: &List) -> Self {
        Self {
            highlight_symbol: list_style.highlight_symbol.clone(),
            icon_answered: list_style.icon_answered.clone(),
            icon_unanswered: list_style.icon_unanswered.clone(),
            borders: parse_borders(&list_style.borders),
            font_weight: parse_font_weight(list_style.font_weight),
        }
    }
}
