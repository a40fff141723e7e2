use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// Where a form's answers come from and where they go back to.
pub trait AnswerSource {
    /// The stored answer for `name`, or `None` when unanswered.
    fn answer(&self, name: &str) -> Option<i64>;

    fn set_answer(&mut self, name: &str, answer: Option<i64>);

    /// Whether `set_answer` left changes that `flush` has not persisted yet.
    fn is_dirty(&self) -> bool {
        false
    }

    /// Persists pending answers. No-op for sources without a backing store.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InMemoryAnswers {
    answers: IndexMap<String, Option<i64>>,
}

impl InMemoryAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, name: &str, answer: Option<i64>) -> Self {
        self.answers.insert(name.to_string(), answer);
        self
    }
}

impl AnswerSource for InMemoryAnswers {
    fn answer(&self, name: &str) -> Option<i64> {
        self.answers.get(name).copied().flatten()
    }

    fn set_answer(&mut self, name: &str, answer: Option<i64>) {
        self.answers.insert(name.to_string(), answer);
    }
}

/// Answers stored as a JSON object of `name -> integer | null`.
///
/// Keys that don't belong to the current form are kept untouched on flush.
#[derive(Debug)]
pub struct JsonAnswerFile {
    path: PathBuf,
    answers: IndexMap<String, Value>,
    dirty: bool,
}

impl JsonAnswerFile {
    /// Loads answers from `path`. A missing file is an empty answer set.
    pub fn open(path: PathBuf) -> Result<Self> {
        let answers = if path.exists() {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
            parse_answers(&contents).with_context(|| format!("Failed to parse {:?}", path))?
        } else {
            debug!(path = %path.display(), "answers file not found, starting empty");
            IndexMap::new()
        };

        Ok(Self {
            path,
            answers,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file holds a non-null value for `name`, in range or not.
    pub fn has_stored_value(&self, name: &str) -> bool {
        self.answers.get(name).is_some_and(|value| !value.is_null())
    }
}

impl AnswerSource for JsonAnswerFile {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn answer(&self, name: &str) -> Option<i64> {
        self.answers.get(name).and_then(Value::as_i64)
    }

    fn set_answer(&mut self, name: &str, answer: Option<i64>) {
        let value = answer.map_or(Value::Null, Value::from);
        if self.answers.get(name) != Some(&value) {
            self.answers.insert(name.to_string(), value);
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty && self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = serde_json::to_string_pretty(&self.answers)
            .context("Failed to serialize answers")?;
        fs::write(&self.path, contents + "\n")
            .with_context(|| format!("Failed to write {:?}", self.path))?;

        debug!(path = %self.path.display(), count = self.answers.len(), "answers written");
        self.dirty = false;
        Ok(())
    }
}

fn parse_answers(contents: &str) -> Result<IndexMap<String, Value>> {
    if contents.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    let answers: IndexMap<String, Value> = serde_json::from_str(contents)?;
    for (name, value) in &answers {
        match value {
            Value::Null => {}
            Value::Number(number) if number.is_i64() || number.is_u64() => {}
            // Integers too large for i64 arrive as f64 and bind as absent
            Value::Number(number) if number.as_f64().is_some_and(|f| f.fract() == 0.0) => {}
            other => bail!(
                "Answer '{}' must be an integer or null, found {}",
                name,
                other
            ),
        }
    }
    Ok(answers)
}
