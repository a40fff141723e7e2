/// Smallest value a counter can hold.
pub const MIN_VALUE: i64 = 0;
/// Largest value a counter can hold.
pub const MAX_VALUE: i64 = 999_999_999;

/// Position of a counter's value within its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Empty,
    AtMin,
    Mid,
    AtMax,
}

/// An optional integer answer constrained to `[MIN_VALUE, MAX_VALUE]`.
///
/// `None` means "no answer entered", which is distinct from an answer of zero.
/// Increment and decrement saturate at the range boundaries and never fail,
/// so callers can treat `can_increment`/`can_decrement` as UI hints only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundedCounter {
    value: Option<i64>,
}

impl BoundedCounter {
    pub fn new(value: Option<i64>) -> Self {
        let mut counter = Self::default();
        counter.set_value(value);
        counter
    }

    /// Stores `value`, discarding anything outside the supported range.
    ///
    /// Out-of-range input is cleared rather than clamped.
    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value.filter(|v| (MIN_VALUE..=MAX_VALUE).contains(v));
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Increments the value, saturating at `MAX_VALUE`.
    ///
    /// An empty counter starts at `MIN_VALUE`.
    pub fn increment(&mut self) {
        self.value = Some(match self.value {
            Some(value) => value.saturating_add(1).min(MAX_VALUE),
            None => MIN_VALUE,
        });
    }

    /// Decrements the value, saturating at `MIN_VALUE`. Does nothing when empty.
    pub fn decrement(&mut self) {
        if let Some(value) = self.value {
            self.value = Some(value.saturating_sub(1).max(MIN_VALUE));
        }
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn can_increment(&self) -> bool {
        self.value.is_none_or(|value| value < MAX_VALUE)
    }

    pub fn can_decrement(&self) -> bool {
        self.value.is_some_and(|value| value > MIN_VALUE)
    }

    pub fn state(&self) -> CounterState {
        match self.value {
            None => CounterState::Empty,
            Some(MIN_VALUE) => CounterState::AtMin,
            Some(MAX_VALUE) => CounterState::AtMax,
            Some(_) => CounterState::Mid,
        }
    }

    /// Decimal representation of the value, or an empty string when absent.
    pub fn display_text(&self) -> String {
        self.value.map(|value| value.to_string()).unwrap_or_default()
    }
}
