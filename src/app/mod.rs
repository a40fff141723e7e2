mod run;

pub use run::run;

use crate::{configs::Config, form::AnswerSource, form::Form};

/// Everything a session needs: settings, the bound form and where its answers live.
pub struct App {
    pub config: Config,
    pub form: Form,
    pub answers: Box<dyn AnswerSource>,
}

impl App {
    pub fn new(config: Config, form: Form, answers: Box<dyn AnswerSource>) -> App {
        Self {
            config,
            form,
            answers,
        }
    }
}
