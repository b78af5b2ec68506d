//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for VibeDeck using Clap
//! derive macros. Every command builds an in-memory library from the
//! configured catalog, runs, and exits; nothing is written back.
//!
//! ## Commands
//!
//! - `list`: Display the whole catalog
//! - `search`: Keyword search over title, artist, genre and vibe
//! - `vibes`: Show vibe buckets, or the members of one
//! - `related`: Show the vibe neighbour of a track
//! - `play`: Simulate a listening session and print every step
//! - `config`: Print the effective configuration
//! - `completion`: Generate shell completions
//!
//! ## Examples
//!
//! ```bash
//! vibedeck search chill
//! vibedeck related "Levitating" "Dua Lipa"
//! vibedeck play --start "Riptide" --steps 8 --queue "Sorai"
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Navigation mode for `play`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum Mode {
    /// Follow vibe links first, then catalog order
    #[default]
    Home,
    /// Catalog order only
    Playlist,
}

/// Main application arguments structure.
///
/// Global options select where the configuration and catalog come from;
/// the subcommand selects what to do with the library.
#[derive(Parser)]
#[command(name = "vibedeck")]
#[command(about = "VibeDeck: a music library that navigates by vibe")]
#[command(version)]
pub struct Args {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, env = "VIBEDECK_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// JSON catalog to load instead of the configured one
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List every track in catalog order
    List {
        /// Print tracks as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Search tracks by keyword
    ///
    /// Case-insensitive substring match against title, artist, genre
    /// and vibe. Results keep catalog order.
    Search {
        /// Keyword to look for
        keyword: String,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show vibe buckets
    ///
    /// Without `--vibe`, prints each vibe tag with its track count.
    /// With it, prints that bucket's tracks in link order.
    Vibes {
        /// Exact vibe tag to expand
        #[arg(long)]
        vibe: Option<String>,
    },

    /// Show the track related to a given one by vibe
    Related {
        /// Track title (case-insensitive)
        #[arg(value_hint = clap::ValueHint::Other)]
        title: String,

        /// Track artist (case-insensitive)
        #[arg(value_hint = clap::ValueHint::Other)]
        artist: String,

        /// Walk backwards instead of forwards
        #[arg(long)]
        prev: bool,
    },

    /// Simulate a listening session
    ///
    /// Starts at `--start` (or the first track), then presses "next"
    /// `--steps` times. Queued titles play first. Prints each track and
    /// finally the history, most recent first.
    Play {
        /// Title of the first track
        #[arg(long, value_hint = clap::ValueHint::Other)]
        start: Option<String>,

        /// Number of "next" presses
        #[arg(long, default_value = "5")]
        steps: usize,

        /// Navigation mode
        #[arg(long, value_enum, default_value_t = Mode::Home)]
        mode: Mode,

        /// Titles to queue before starting
        #[arg(long, num_args = 1.., value_hint = clap::ValueHint::Other)]
        queue: Vec<String>,
    },

    /// Print the effective configuration as JSON
    Config,

    /// Generate shell completions
    ///
    /// Usage: vibedeck completion bash > ~/.local/share/bash-completion/completions/vibedeck
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
