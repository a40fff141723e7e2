use serde::{Deserialize, Serialize};

use crate::configs::style::{Borders, FontWeight};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Counter {
    pub increase_label: String,
    pub decrease_label: String,
    pub empty_placeholder: String,
    pub show_hint: bool,
    pub font_weight: FontWeight,
    pub borders: Vec<Borders>,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            increase_label: String::from("+"),
            decrease_label: String::from("-"),
            empty_placeholder: String::new(),
            show_hint: true,
            font_weight: FontWeight::Bold,
            borders: vec![Borders::All],
        }
    }
}
