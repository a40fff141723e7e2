use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct QuestionDeclaration {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}

impl QuestionDeclaration {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.name.trim().is_empty(),
            "Question name must not be empty"
        );
        ensure!(
            self.name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            "Question name '{}' may only contain ASCII letters, digits, '_' and '-'",
            self.name
        );
        ensure!(
            !self.label.trim().is_empty(),
            "Question '{}' must have a non-empty label",
            self.name
        );
        Ok(())
    }
}

/// A form file: a title and an ordered list of counter questions.
///
/// ```toml
/// title = "Household survey"
///
/// [[questions]]
/// name = "chickens"
/// label = "How many chickens?"
/// hint = "Count adults only"
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormDefinition {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionDeclaration>,
}

impl FormDefinition {
    pub fn parse(contents: &str) -> Result<Self> {
        let definition: FormDefinition = toml::from_str(contents)?;
        Ok(definition)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.title.trim().is_empty(), "Form title must not be empty");
        ensure!(
            !self.questions.is_empty(),
            "Form '{}' must declare at least one question",
            self.title
        );

        let mut seen = HashSet::new();
        for question in &self.questions {
            question.validate()?;
            ensure!(
                seen.insert(question.name.as_str()),
                "Duplicate question name '{}' in form '{}'",
                question.name,
                self.title
            );
        }
        Ok(())
    }
}

pub fn load_form(form_path: &Path) -> Result<FormDefinition> {
    let contents = fs::read_to_string(form_path)
        .with_context(|| format!("Failed to read {:?}", form_path))?;

    let definition = FormDefinition::parse(&contents)
        .with_context(|| format!("Failed to parse {:?}", form_path))?;

    definition
        .validate()
        .with_context(|| format!("Invalid form {:?}", form_path))?;

    Ok(definition)
}
