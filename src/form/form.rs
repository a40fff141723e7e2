use crate::form::{AnswerSource, CounterQuestion, FormDefinition};

/// A form definition bound to its answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub title: String,
    questions: Vec<CounterQuestion>,
}

impl Form {
    /// Builds every question and seeds it from `source`.
    pub fn bind(definition: &FormDefinition, source: &dyn AnswerSource) -> Self {
        let questions = definition
            .questions
            .iter()
            .map(|declaration| CounterQuestion::new(declaration, source.answer(&declaration.name)))
            .collect();

        Self {
            title: definition.title.clone(),
            questions,
        }
    }

    pub fn questions(&self) -> &[CounterQuestion] {
        &self.questions
    }

    pub fn question(&self, name: &str) -> Option<&CounterQuestion> {
        self.questions.iter().find(|q| q.name == name)
    }

    pub fn question_mut(&mut self, name: &str) -> Option<&mut CounterQuestion> {
        self.questions.iter_mut().find(|q| q.name == name)
    }

    pub fn question_at_mut(&mut self, idx: usize) -> Option<&mut CounterQuestion> {
        self.questions.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.answer().is_some())
            .count()
    }

    /// Hands every question's current answer back to `source`.
    pub fn write_answers(&self, source: &mut dyn AnswerSource) {
        for question in &self.questions {
            source.set_answer(&question.name, question.answer());
        }
    }
}
