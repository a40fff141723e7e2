pub mod app;
pub mod cli;
pub mod configs;
pub mod form;
pub mod logging;
pub mod tui;

pub use app::App;
pub use configs::Config;

pub use configs::{find_config_file, load_config, validate_config};
pub use form::{AnswerSource, BoundedCounter, CounterQuestion, Form, FormDefinition};
