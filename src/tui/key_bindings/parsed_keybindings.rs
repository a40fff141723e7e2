use anyhow::{Context, Result, bail};
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use crate::{configs::KeyBindings, tui::key_bindings::KeyBind};

#[derive(Debug, Clone)]
pub struct ParsedKeyBindings {
    pub back: KeyBind,
    pub select_previous: KeyBind,
    pub select_next: KeyBind,
    pub increase: KeyBind,
    pub decrease: KeyBind,
    pub clear: KeyBind,
    pub save: KeyBind,
}

impl ParsedKeyBindings {
    pub fn from(key_bindings: &KeyBindings) -> Result<ParsedKeyBindings> {
        let parsed_keybindings = ParsedKeyBindings {
            back: parse_binding("back", &key_bindings.back)?,
            select_previous: parse_binding("select_previous", &key_bindings.select_previous)?,
            select_next: parse_binding("select_next", &key_bindings.select_next)?,
            increase: parse_binding("increase", &key_bindings.increase)?,
            decrease: parse_binding("decrease", &key_bindings.decrease)?,
            clear: parse_binding("clear", &key_bindings.clear)?,
            save: parse_binding("save", &key_bindings.save)?,
        };

        check_for_duplicates(&parsed_keybindings)?;

        Ok(parsed_keybindings)
    }

    fn named(&self) -> [(&'static str, &KeyBind); 7] {
        [
            ("back", &self.back),
            ("select_previous", &self.select_previous),
            ("select_next", &self.select_next),
            ("increase", &self.increase),
            ("decrease", &self.decrease),
            ("clear", &self.clear),
            ("save", &self.save),
        ]
    }
}

fn parse_binding(action: &str, binding: &str) -> Result<KeyBind> {
    KeyBind::parse(binding)
        .with_context(|| format!("Failed to parse '{}' keybinding '{}'", action, binding))
}

fn check_for_duplicates(parsed: &ParsedKeyBindings) -> Result<()> {
    let mut binding_map: HashMap<(KeyCode, KeyModifiers), Vec<&str>> = HashMap::new();

    for (action, binding) in parsed.named() {
        binding_map
            .entry((binding.code, binding.modifiers))
            .or_default()
            .push(action);
    }

    let mut conflicts: Vec<String> = binding_map
        .values()
        .filter(|actions| actions.len() > 1)
        .map(|actions| {
            let binding = parsed
                .named()
                .into_iter()
                .find(|(action, _)| *action == actions[0])
                .map(|(_, binding)| binding.to_string())
                .unwrap_or_default();
            format!("'{}' is bound to: {}", binding, actions.join(", "))
        })
        .collect();
    conflicts.sort();

    if !conflicts.is_empty() {
        bail!(
            "Duplicate key bindings detected:\n  {}",
            conflicts.join("\n  ")
        );
    }

    Ok(())
}
