use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::{
    configs::{KeyBindings, Styles},
    tui::key_bindings::ParsedKeyBindings,
};
use anyhow::{Context, Result, ensure};

#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_form: Option<PathBuf>,
    pub keybindings: KeyBindings,
    pub styles: Styles,
    pub status_bar: bool,
    pub save_on_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_form: None,
            keybindings: KeyBindings::default(),
            styles: Styles::default(),
            status_bar: true,
            save_on_exit: true,
        }
    }
}

pub fn load_config(config_path: PathBuf) -> Result<Config> {
    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;

    let config: Config =
        toml::from_str(&contents).with_context(|| format!("Failed to parse {:?}", config_path))?;

    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<()> {
    let screen_scaffold_style = &config.styles.screen_scaffold;
    ensure!(
        screen_scaffold_style.left_split + screen_scaffold_style.right_split == 100,
        "Screen scaffold style left and right split must amount to 100"
    );

    let status_style = &config.styles.status;
    ensure!(
        status_style.left_split + status_style.right_split == 100,
        "Status style left and right split must amount to 100"
    );

    let counter_style = &config.styles.counter;
    for (field, label) in [
        ("increase_label", &counter_style.increase_label),
        ("decrease_label", &counter_style.decrease_label),
    ] {
        ensure!(
            label.width() == 1,
            "Counter {} '{}' must occupy a single terminal cell",
            field,
            label
        );
    }

    ParsedKeyBindings::from(&config.keybindings).context("Invalid keybinding configuration")?;

    Ok(())
}
