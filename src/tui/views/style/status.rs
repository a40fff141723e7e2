use ratatui::{style::Modifier, widgets::Borders};

use crate::{
    configs::style::Status,
    tui::views::style::convert::{parse_borders, parse_font_weight},
};

pub struct StatusStyle {
    pub left_split: u16,
    pub right_split: u16,
    pub borders: Option<Borders>,
    pub font_weight: Option<Modifier>,
    pub idle_icon: String,
    pub modified_icon: String,
    pub saved_icon: String,
    pub error_icon: String,
}

impl From<&Status> for StatusStyle {
    fn from(status_style: &Status) -> Self {
        Self {
            left_split: status_style.left_split,
            right_split: status_style.right_split,
            borders: parse_borders(&status_style.borders),
            font_weight: parse_font_weight(status_style.font_weight),
            idle_icon: status_style.idle_icon.clone(),
            modified_icon: status_style.modified_icon.clone(),
            saved_icon: status_style.saved_icon.clone(),
            error_icon: status_style.error_icon.clone(),
        }
    }
}
