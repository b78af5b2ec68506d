//! # VibeDeck
//!
//! Command-line front end over the in-memory library: list, search,
//! vibe browsing and a simulated listening session.
//!
//! ```bash
//! vibedeck list
//! vibedeck vibes --vibe Chill
//! vibedeck play --start "Levitating" --steps 10
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use vibedeck::cli::{self, Command, Mode};
use vibedeck::completion;
use vibedeck::config::AppConfig;
use vibedeck::library::Library;
use vibedeck::playback::{BrowseMode, PlaybackSession};
use vibedeck::track::Track;

fn load_config(args: &cli::Args) -> Result<AppConfig> {
    match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn find_title<'a>(library: &'a Library, title: &str) -> Result<&'a Track> {
    library
        .find_by_title(title)
        .with_context(|| format!("No track titled `{title}' in the catalog"))
}

fn print_tracks(tracks: &[Track], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(tracks).context("Failed to serialize tracks")?
        );
    } else {
        for (i, track) in tracks.iter().enumerate() {
            println!("{:>3}. {}", i + 1, track);
        }
    }
    Ok(())
}

fn run_session(
    library: &Library,
    start: Option<&str>,
    steps: usize,
    mode: Mode,
    queue: &[String],
) -> Result<()> {
    let mut session = PlaybackSession::from_library(library);
    session.set_mode(match mode {
        Mode::Home => BrowseMode::Home,
        Mode::Playlist => BrowseMode::Playlist,
    });

    for title in queue {
        session.enqueue(find_title(library, title)?.clone());
    }

    let first = match start {
        Some(title) => Some(session.play_selected(find_title(library, title)?.clone())),
        None => session.next(library),
    };
    let Some(first) = first else {
        println!("The catalog is empty");
        return Ok(());
    };
    println!("  > {first}");

    for step in 1..=steps {
        match session.next(library) {
            Some(track) => println!("{step:>3} {track}"),
            None => break,
        }
    }

    println!();
    println!("History (most recent first):");
    print_tracks(&session.peek_history(), false)
}

/// Main entry point for the VibeDeck application.
///
/// Initializes logging, parses command-line arguments, builds the library
/// and routes the command.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug vibedeck play` - Enable debug logging
/// - `RUST_LOG=vibedeck::vibe=debug vibedeck list` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    if let Command::Completion { shell } = &args.command {
        let mut cmd = cli::Args::command();
        completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
        return Ok(());
    }

    let config = load_config(&args)?;
    debug!("Effective config: {config:?}");

    if let Command::Config = &args.command {
        println!(
            "{}",
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?
        );
        return Ok(());
    }

    let library = config.build_library(args.catalog.as_deref())?;

    match &args.command {
        Command::List { json } => {
            print_tracks(&library.get_all(), *json)?;
        }
        Command::Search { keyword, json } => {
            info!("Searching for: {keyword}");
            let found = library.search(keyword);
            if found.is_empty() && !json {
                println!("No tracks match `{keyword}'");
            } else {
                print_tracks(&found, *json)?;
            }
        }
        Command::Vibes { vibe: Some(vibe) } => {
            let members = library.tracks_with_vibe(vibe);
            if members.is_empty() {
                println!("No tracks with vibe `{vibe}'");
            } else {
                print_tracks(&members, false)?;
            }
        }
        Command::Vibes { vibe: None } => {
            for (vibe, count) in library.graph().vibes() {
                println!("{vibe:<12} {count}");
            }
        }
        Command::Related { title, artist, prev } => {
            let track = library
                .find_by_title_artist(title, artist)
                .with_context(|| format!("No track `{title}' by {artist}"))?;
            let related = if *prev {
                library.prev_related(track)
            } else {
                library.next_related(track)
            };
            match related {
                Some(related) => println!("{related}"),
                None => println!("No related track for {track}"),
            }
        }
        Command::Play { start, steps, mode, queue } => {
            info!("Simulating {steps} steps in {mode:?} mode");
            run_session(&library, start.as_deref(), *steps, *mode, queue)?;
        }
        Command::Config | Command::Completion { .. } => {}
    }

    Ok(())
}
