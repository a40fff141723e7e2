mod config;
mod key_bindings;
pub mod paths;
pub mod style;

pub use config::{Config, load_config, validate_config};
pub use key_bindings::KeyBindings;
pub use paths::{
    default_answers_path, expand_path, find_config_file, get_default_config_dir,
    get_default_data_dir,
};
pub use style::Styles;
