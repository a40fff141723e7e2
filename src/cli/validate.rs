use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::{
    configs::{expand_path, load_config, validate_config},
    form::load_form,
};

/// Validates a config file and prints a short confirmation
pub fn validate_config_cli(config_path: PathBuf) -> Result<()> {
    let config_path = expand_path(config_path)?;

    let config = load_config(config_path.clone())
        .with_context(|| format!("Config file {:?} could not be loaded", config_path))?;
    validate_config(&config)
        .with_context(|| format!("Config file {:?} is invalid", config_path))?;

    println!("✓ Config file is valid: {}", config_path.display());
    Ok(())
}

/// Validates a form file and prints its title and question count
pub fn validate_form_cli(form_path: PathBuf) -> Result<()> {
    let form_path = expand_path(form_path)?;

    let definition = load_form(&form_path)?;

    println!("✓ Form file is valid: {}", form_path.display());
    println!("  Title: {}", definition.title);
    println!("  Questions: {}", definition.questions.len());
    for question in &definition.questions {
        let marker = if question.read_only { " (read-only)" } else { "" };
        println!("    - {}: {}{}", question.name, question.label, marker);
    }
    Ok(())
}
