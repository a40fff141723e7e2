use serde::{Deserialize, Serialize};

use crate::configs::style::{Borders, FontWeight};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Status {
    pub left_split: u16,
    pub right_split: u16,
    pub borders: Vec<Borders>,
    pub font_weight: FontWeight,
    pub idle_icon: String,
    pub modified_icon: String,
    pub saved_icon: String,
    pub error_icon: String,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            left_split: 50,
            right_split: 50,
            borders: vec![Borders::All],
            font_weight: FontWeight::Bold,
            idle_icon: String::from("✔"),
            modified_icon: String::from("✎"),
            saved_icon: String::from("✔"),
            error_icon: String::from("⛌"),
        }
    }
}
