use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use std::{io, path::PathBuf};
use tracing::{debug, warn};

use crate::{
    Config,
    app::App,
    cli::{
        Args, Commands,
        answer::answer_cli,
        completions::generate_completions,
        validate::{validate_config_cli, validate_form_cli},
    },
    configs::{
        default_answers_path, expand_path, find_config_file, get_default_config_dir, load_config,
        validate_config,
    },
    form::{Form, JsonAnswerFile, load_form},
    logging::init_logging,
    tui::TuiApp,
};

/// Main entry point for the Tally application.
///
/// Parses the command line, handles the subcommands that need no form
/// (`completions`, `validate`), then binds the form to its answers file and
/// either applies a single `answer` operation or launches the TUI.
///
/// # Errors
///
/// Returns an error if the config or form cannot be loaded or validated, if
/// the answers file is malformed, or if the TUI fails to drive the terminal.
pub fn run() -> Result<()> {
    let cli_args = Args::parse();

    if handle_cli_commands(&cli_args)? {
        return Ok(());
    }

    if let Err(err) = init_logging() {
        // Runs without a log file when the data dir is unusable
        eprintln!("Warning: logging disabled: {:#}", err);
    }

    setup_the_environment_and_run(&cli_args)
}

// Loads config, form and answers, then runs the `answer` subcommand or the TUI.
fn setup_the_environment_and_run(cli_args: &Args) -> Result<()> {
    let config = handle_config(cli_args)?;
    let form_path = resolve_form_path(cli_args, &config)?;
    let answers_path = match &cli_args.answers {
        Some(path) => expand_path(path.clone()).context("Failed to expand answers path")?,
        None => default_answers_path(&form_path)?,
    };
    debug!(form = %form_path.display(), answers = %answers_path.display(), "resolved paths");

    let definition = load_form(&form_path)?;
    let answers = JsonAnswerFile::open(answers_path).context("Failed to load answers")?;
    let form = Form::bind(&definition, &answers);

    for question in form.questions() {
        if question.answer().is_none() && answers.has_stored_value(&question.name) {
            warn!(
                question = %question.name,
                "stored answer outside the supported range was discarded"
            );
        }
    }

    let app = App::new(config, form, Box::new(answers));

    if let Some(Commands::Answer(answer_args)) = &cli_args.command {
        let display_text = answer_cli(app, answer_args)?;
        println!("{}", display_text);
    } else {
        let mut tui_app = TuiApp::new(app).context("Failed to initialize TUI application")?;
        tui_app.run()?;
    }

    Ok(())
}

fn resolve_form_path(cli_args: &Args, config: &Config) -> Result<PathBuf> {
    let Some(form_path) = cli_args.form.clone().or_else(|| config.default_form.clone()) else {
        bail!("No form specified. Pass --form <PATH> or set default_form in the config file");
    };
    expand_path(form_path).context("Failed to expand form path")
}

// Loads and validates the config file using XDG-compliant path resolution,
// then applies CLI overrides for the boolean config fields.
fn handle_config(cli_args: &Args) -> Result<Config> {
    let expanded_config = cli_args
        .config
        .clone()
        .map(expand_path)
        .transpose()
        .context("Failed to expand config path")?;

    let config_path_opt =
        find_config_file(expanded_config).context("Failed to find config file")?;

    let mut config = match config_path_opt {
        Some(path) => load_config(path).context("Failed to load config file")?,
        // No config file is expected for new users
        None => Config::default(),
    };

    if let Some(status_bar) = cli_args.status_bar {
        config.status_bar = status_bar;
    }
    if let Some(save_on_exit) = cli_args.save_on_exit {
        config.save_on_exit = save_on_exit;
    }

    validate_config(&config)?;

    Ok(config)
}

// Returns Ok(true) if a subcommand was handled and the app should exit.
// `answer` needs the full environment and is left to setup_the_environment_and_run.
fn handle_cli_commands(cli_args: &Args) -> Result<bool> {
    let Some(command) = &cli_args.command else {
        return Ok(false);
    };
    match command {
        Commands::Answer(_) => Ok(false),
        Commands::Completions { shell } => {
            generate_completions(*shell, &mut Args::command(), &mut io::stdout());
            Ok(true)
        }
        Commands::Validate {
            form_file,
            config_file,
        } => {
            if let Some(form_path) = form_file {
                validate_form_cli(form_path.clone())?;
            } else if let Some(config_paths) = config_file {
                let config_path = match config_paths.first() {
                    Some(path) => path.clone(),
                    None => match find_config_file(cli_args.config.clone())? {
                        Some(path) => path,
                        None => {
                            let xdg_path = get_default_config_dir()?.join("tally.toml");
                            bail!(
                                "No config file found to validate. Searched:\n  - {:?}\n  - ./tally.toml",
                                xdg_path
                            );
                        }
                    },
                };
                validate_config_cli(config_path)?;
            } else {
                bail!("validate command requires either --form-file or --config-file flag");
            }
            Ok(true)
        }
    }
}
