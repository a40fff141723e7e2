pub mod answer;
mod args;
pub mod completions;
pub mod validate;

pub use args::{AnswerArgs, Args, Commands};
