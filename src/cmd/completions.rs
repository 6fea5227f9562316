//! Completions command implementation
//!
//! Handles the `velura completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts
///
/// Writes the completion script for `shell` to `out`. The binary passes its
/// own clap command so completions always match the real arguments.
///
/// # Examples
///
/// ```bash
/// # Bash
/// velura completions bash > /etc/bash_completion.d/velura
///
/// # Zsh
/// velura completions zsh > ~/.zfunc/_velura
///
/// # Fish
/// velura completions fish > ~/.config/fish/completions/velura.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction};

    fn command() -> Command {
        Command::new("velura")
            .arg(
                Arg::new("no-emoji")
                    .long("no-emoji")
                    .action(ArgAction::SetTrue)
                    .global(true),
            )
            .subcommand(Command::new("routine"))
            .subcommand(Command::new("quiz"))
    }

    #[test]
    fn test_completions_mention_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut out = Vec::new();
            cmd_completions(shell, &mut command(), &mut out);
            let script = String::from_utf8(out).unwrap();
            assert!(script.contains("routine"), "{shell} script lacks subcommands");
            assert!(script.contains("no-emoji"));
        }
    }
}
