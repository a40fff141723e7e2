use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub back: String,
    pub select_previous: String,
    pub select_next: String,
    pub increase: String,
    pub decrease: String,
    pub clear: String,
    pub save: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            back: "<esc>".to_string(),
            select_previous: "<up>".to_string(),
            select_next: "<down>".to_string(),
            increase: "<right>".to_string(),
            decrease: "<left>".to_string(),
            clear: "<backspace>".to_string(),
            save: "<C-s>".to_string(),
        }
    }
}
