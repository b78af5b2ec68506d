//! # Configuration Module
//!
//! This module handles configuration loading and data directory setup for
//! VibeDeck. Everything has a default, so running without a config file
//! behaves exactly like running with an empty one.
//!
//! ## File Location
//!
//! The config file is JSON, read from the platform config directory unless
//! `--config` points elsewhere:
//! - Linux: `~/.config/vibedeck/config.json`
//! - macOS: `~/Library/Application Support/vibedeck/config.json`
//! - Windows: `%APPDATA%\vibedeck\config.json`
//!
//! ## Example
//!
//! ```json
//! {
//!   "assets_dir": "/srv/vibedeck/assets",
//!   "catalog_path": "/srv/vibedeck/catalog.json",
//!   "rebuild_on_add": true,
//!   "vibe_scores": { "happy": [3, 3], "chill": [2, 1], "sad": [1, 1] }
//! }
//! ```

use crate::algorithm::{DefaultVibeScorer, TableVibeScorer, VibeScore, VibeScorer};
use crate::catalog::{default_catalog, load_catalog};
use crate::library::Library;
use anyhow::{Context, Result};
use log::{debug, warn};
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "vibedeck";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-appropriate data directory for VibeDeck.
///
/// The `vibedeck` subdirectory is created if it does not exist yet.
///
/// # Platform Behavior
///
/// - **Linux**: `~/.local/share/vibedeck`
/// - **macOS**: `~/Library/Application Support/vibedeck`
/// - **Windows**: `%APPDATA%\vibedeck`
///
/// # Errors
///
/// This function will return an error if:
/// - The system data directory cannot be determined
/// - The vibedeck subdirectory cannot be created due to permissions
///
/// # Examples
///
/// ```no_run
/// use vibedeck::config::get_data_dir;
///
/// let data_dir = get_data_dir()?;
/// println!("Assets live under {}", data_dir.join("assets").display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let app_dir = data_dir.join(APP_DIR);
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create VibeDeck data directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir)
}

/// Returns the default config file path, creating its directory.
///
/// The file itself is not created.
///
/// # Errors
///
/// Fails when the system config directory cannot be determined or the
/// vibedeck subdirectory cannot be created.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system config directory. Please ensure your platform supports standard config directories."
        )
    })?;

    let app_dir = config_dir.join(APP_DIR);
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create VibeDeck config directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir.join(CONFIG_FILE))
}

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the built-in catalog's `music/` and `cover/` folders.
    /// Unset means `<data_dir>/vibedeck/assets`, see [`AppConfig::assets_dir()`].
    pub assets_dir: Option<PathBuf>,

    /// JSON catalog seed used instead of the built-in catalog.
    pub catalog_path: Option<PathBuf>,

    /// Relink the vibe graph after every `add`.
    pub rebuild_on_add: bool,

    /// Replaces the built-in score table when present.
    /// Keys are vibe tags, values `[mood, energy]`.
    pub vibe_scores: Option<BTreeMap<String, (i32, i32)>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            catalog_path: None,
            rebuild_on_add: true,
            vibe_scores: None,
        }
    }
}

impl AppConfig {
    /// Load from the default location. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails only when the config directory cannot be resolved.
    pub fn load() -> Result<Self> {
        let path = get_config_path()?;
        Self::load_from(&path)
    }

    /// Load from `path`.
    ///
    /// A missing file yields the defaults. So does a file that cannot be
    /// parsed, after a warning. Relative directories are resolved against
    /// the working directory.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read, or a path cannot be
    /// made absolute.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Ignoring invalid config file {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.absolutized()
    }

    fn absolutized(mut self) -> Result<Self> {
        self.assets_dir = self.assets_dir.as_deref().map(absolutize).transpose()?;
        self.catalog_path = self.catalog_path.as_deref().map(absolutize).transpose()?;
        Ok(self)
    }

    /// The configured assets directory, or the one under the data directory.
    ///
    /// # Errors
    ///
    /// Fails when the assets directory is unset and the data directory
    /// cannot be resolved or created.
    pub fn assets_dir(&self) -> Result<PathBuf> {
        match &self.assets_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(get_data_dir()?.join("assets")),
        }
    }

    /// The scorer described by `vibe_scores`, or the built-in one.
    #[must_use]
    pub fn scorer(&self) -> Box<dyn VibeScorer> {
        match &self.vibe_scores {
            Some(table) => Box::new(TableVibeScorer::new(
                table.iter().map(|(tag, &score)| (tag, VibeScore::from(score))),
            )),
            None => Box::new(DefaultVibeScorer),
        }
    }

    /// Build a library from the configured catalog source and scorer.
    ///
    /// `catalog_override` wins over `catalog_path`; with neither, the
    /// built-in catalog rooted at `assets_dir` is used.
    ///
    /// # Errors
    ///
    /// Fails when a catalog file cannot be read or parsed, or the default
    /// assets directory cannot be resolved.
    pub fn build_library(&self, catalog_override: Option<&Path>) -> Result<Library> {
        let fields = match catalog_override.or(self.catalog_path.as_deref()) {
            Some(path) => load_catalog(path)?,
            None => default_catalog(&self.assets_dir()?),
        };

        let mut library = Library::with_scorer(self.scorer()).with_catalog(fields);
        library.set_rebuild_on_add(self.rebuild_on_add);
        Ok(library)
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(path
        .absolutize()
        .with_context(|| format!("Failed to resolve path {}", path.display()))?
        .into_owned())
}
