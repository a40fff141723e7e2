use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Specify a custom config path to use with this instance
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Form file to fill (overrides `default_form` from the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub form: Option<PathBuf>,

    /// Answers file to read and write (defaults to the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Override status bar visibility
    #[arg(long, value_name = "BOOL")]
    pub status_bar: Option<bool>,

    /// Override saving answers when leaving the TUI
    #[arg(long, value_name = "BOOL")]
    pub save_on_exit: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ClapArgs, Debug)]
#[command(group(
    ArgGroup::new("operation")
        .args(["increase", "decrease", "clear", "set"])
        .multiple(false)
))]
pub struct AnswerArgs {
    /// Question name
    #[arg(long, value_name = "NAME")]
    pub question: String,

    /// Press the increase button once
    #[arg(long)]
    pub increase: bool,

    /// Press the decrease button once
    #[arg(long)]
    pub decrease: bool,

    /// Remove the answer
    #[arg(long)]
    pub clear: bool,

    /// Replace the answer; values outside the supported range clear it
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub set: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read or change one answer without launching the TUI
    ///
    /// Prints the resulting value, or an empty line when the question is unanswered.
    Answer(AnswerArgs),

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Validate a form or configuration file
    Validate {
        /// Validate a form file
        #[arg(long = "form-file", value_name = "PATH", conflicts_with = "config_file")]
        form_file: Option<PathBuf>,

        /// Validate configuration file. If no path provided, validates the default config
        #[arg(long = "config-file", value_name = "PATH", num_args = 0..=1, conflicts_with = "form_file")]
        config_file: Option<Vec<PathBuf>>,
    },
}
