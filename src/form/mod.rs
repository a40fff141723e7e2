pub mod answers;
pub mod bounded_counter;
pub mod definition;
#[allow(clippy::module_inception)]
mod form;
pub mod question;

pub use answers::{AnswerSource, InMemoryAnswers, JsonAnswerFile};
pub use bounded_counter::{BoundedCounter, CounterState, MAX_VALUE, MIN_VALUE};
pub use definition::{FormDefinition, QuestionDeclaration, load_form};
pub use form::Form;
pub use question::CounterQuestion;
