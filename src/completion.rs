//! # Shell Completion Module
//!
//! This module generates shell completion scripts for VibeDeck through
//! clap's completion system.
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! vibedeck completion bash > ~/.local/share/bash-completion/completions/vibedeck
//!
//! # Generate zsh completions
//! vibedeck completion zsh > ~/.config/zsh/completions/_vibedeck
//! ```

use crate::cli::Shell;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(shell_to_completion_shell(&Shell::Bash), CompletionShell::Bash);
        assert_eq!(shell_to_completion_shell(&Shell::Zsh), CompletionShell::Zsh);
        assert_eq!(
            shell_to_completion_shell(&Shell::PowerShell),
            CompletionShell::PowerShell
        );
    }
}
