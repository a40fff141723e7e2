pub struct StatusStrings;

impl StatusStrings {
    pub const IDLE: &str = "";
    pub const MODIFIED: &str = "Modified";
    pub const SAVED: &str = "Saved";
    pub const ERROR: &str = "Error";
}

pub struct CounterStrings;

impl CounterStrings {
    pub const TITLE_QUESTIONS: &str = "Questions";
    pub const LABEL_READ_ONLY: &str = "read-only";
}
