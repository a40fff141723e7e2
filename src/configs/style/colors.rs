use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "terminal";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    pub highlights_background: String,
    pub highlights_text: String,
    pub borders: String,
    pub borders_list: String,
    pub borders_counter: String,
    pub borders_status: String,
    pub text: String,
    pub text_list: String,
    pub text_counter: String,
    pub text_hint: String,
    pub text_status: String,
    pub button_enabled: String,
    pub button_disabled: String,
    pub background: String,
    pub background_list: String,
    pub background_counter: String,
    pub background_status: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            highlights_text: DEFAULT_COLOR.to_string(),
            highlights_background: DEFAULT_COLOR.to_string(),
            borders: DEFAULT_COLOR.to_string(),
            text: DEFAULT_COLOR.to_string(),
            background: DEFAULT_COLOR.to_string(),
            button_disabled: String::from("darkgray"),
            borders_list: String::new(),
            borders_counter: String::new(),
            borders_status: String::new(),
            text_list: String::new(),
            text_counter: String::new(),
            text_hint: String::new(),
            text_status: String::new(),
            button_enabled: String::new(),
            background_list: String::new(),
            background_counter: String::new(),
            background_status: String::new(),
        }
    }
}
