use clap::Command;
use clap_complete::{Shell, generate};
use std::io::Write;

/// Writes the completion script for `shell` to `out`.
///
/// ```bash
/// tally completions zsh > ~/.zfunc/_tally
/// tally completions fish > ~/.config/fish/completions/tally.fish
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
