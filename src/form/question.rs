use crate::form::{BoundedCounter, definition::QuestionDeclaration};

/// A single counter question bound to its current answer.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterQuestion {
    pub name: String,
    pub label: String,
    pub hint: Option<String>,
    pub read_only: bool,
    counter: BoundedCounter,
}

impl CounterQuestion {
    pub fn new(declaration: &QuestionDeclaration, answer: Option<i64>) -> Self {
        Self {
            name: declaration.name.clone(),
            label: declaration.label.clone(),
            hint: declaration.hint.clone(),
            read_only: declaration.read_only,
            counter: BoundedCounter::new(answer),
        }
    }

    pub fn counter(&self) -> &BoundedCounter {
        &self.counter
    }

    pub fn answer(&self) -> Option<i64> {
        self.counter.value()
    }

    /// Rebinds the question to an externally supplied answer.
    pub fn set_answer(&mut self, answer: Option<i64>) {
        self.counter.set_value(answer);
    }

    pub fn increase_enabled(&self) -> bool {
        !self.read_only && self.counter.can_increment()
    }

    pub fn decrease_enabled(&self) -> bool {
        !self.read_only && self.counter.can_decrement()
    }

    /// Returns `true` if the answer changed.
    pub fn increase(&mut self) -> bool {
        self.mutate(BoundedCounter::increment)
    }

    /// Returns `true` if the answer changed.
    pub fn decrease(&mut self) -> bool {
        self.mutate(BoundedCounter::decrement)
    }

    /// Returns `true` if the answer changed.
    pub fn clear(&mut self) -> bool {
        self.mutate(BoundedCounter::clear)
    }

    pub fn display_text(&self) -> String {
        self.counter.display_text()
    }

    fn mutate(&mut self, operation: fn(&mut BoundedCounter)) -> bool {
        if self.read_only {
            return false;
        }
        let before = self.counter.value();
        operation(&mut self.counter);
        before != self.counter.value()
    }
}
