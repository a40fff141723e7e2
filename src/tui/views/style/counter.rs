use ratatui::{style::Modifier, widgets::Borders};

use crate::{
    configs::style::Counter,
    tui::views::style::convert::{parse_borders, parse_font_weight},
};

pub struct CounterStyle {
    pub increase_label: String,
    pub decrease_label: String,
    pub empty_placeholder: String,
    pub show_hint: bool,
    pub borders: Option<Borders>,
    pub font_weight: Option<Modifier>,
}

impl From<&Counter> for CounterStyle {
    fn from(counter_style: &Counter) -> Self {
        Self {
            increase_label: counter_style.increase_label.clone(),
            decrease_label: counter_style.decrease_label.clone(),
            empty_placeholder: counter_style.empty_placeholder.clone(),
            show_hint: counter_style.show_hint,
            borders: parse_borders(&counter_style.borders),
            font_weight: parse_font_weight(counter_style.font_weight),
        }
    }
}
