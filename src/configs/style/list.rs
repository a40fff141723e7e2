use crate::configs::style::styles::{Borders, FontWeight};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct List {
    pub highlight_symbol: String,
    pub icon_answered: String,
    pub icon_unanswered: String,
    // bold, regular
    pub font_weight: FontWeight,
    // top, left, right, bottom, all
    pub borders: Vec<Borders>,
}

impl Default for List {
    fn default() -> Self {
        Self {
            highlight_symbol: String::from("→"),
            icon_answered: String::from("▣"),
            icon_unanswered: String::from("□"),
            borders: vec![Borders::All],
            font_weight: FontWeight::Regular,
        }
    }
}
