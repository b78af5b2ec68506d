//! # Catalog Module
//!
//! Sources for the library's initial track set:
//!
//! - [`default_catalog`] - the built-in demo catalog, with audio and artwork
//!   locators rooted at an assets directory (`music/*.mp3`, `cover/*.jpg`)
//! - [`load_catalog`] - a JSON array of [`TrackFields`]
//!
//! Locators are only joined onto the assets directory, never opened.

use crate::track::TrackFields;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

/// `(title, artist, genre, vibe, asset file stem)`
const DEFAULT_TRACKS: &[(&str, &str, &str, &str, &str)] = &[
    ("Belum Ada Satu Bulan", "Bernadya", "Pop", "Sad", "Belum Ada Satu Bulan - Bernadya - Pop - Sad"),
    ("Best Part", "Daniel Caesar & H.E.R", "R&B", "Chill", "Best Part - Daniel Caesar & H.E.R - R&B - Chill"),
    ("Dunia Tipu-Tipu", "Yura Yunita", "Pop", "Chill", "Dunia Tipu-Tipu - Yura Yunita - Pop - Chill"),
    ("Easy On Me", "Adele", "Ballad", "Emotional", "Easy On Me - Adele - Ballad - Emotional"),
    ("Electric Love", "BØRNS", "Indie Pop", "Energetic", "Electric Love - BØRNS - Indie Pop - Energetic"),
    ("Feeling Good", "Michael Bublé", "Jazz", "Powerful", "Feeling Good - Michael Bublé - Jazz - Powerful"),
    ("Fly Me to the Moon", "Frank Sinatra", "Jazz", "Chill", "Fly Me to the Moon - Frank Sinatra - Jazz - Chill"),
    ("Glimpse of Us", "Joji", "Ballad", "Emotional", "Glimpse of Us - Joji - Ballad - Emotional"),
    ("God's Plan", "Drake", "Hip-Hop", "Chill", "God_s - Plan - Drake - Hip-Hop - Chill"),
    ("Hati-Hati di Jalan", "Tulus", "Pop", "Sad", "Hati-Hati di Jalan - Tulus - Pop - Sad"),
    ("Kill This Love", "BLACKPINK", "K-Pop", "Energetic", "Kill This Love - BLACKPINK - K-Pop - Energetic"),
    ("Levitating", "Dua Lipa", "Pop", "Happy", "Levitating - Dua Lipa - Pop - Happy"),
    ("Love on the Brain", "Rihanna", "R&B", "Emotional", "Love on the Brain - Rihanna - R&B - Emotional"),
    ("Love Scenario", "iKON", "K-Pop", "Chill", "Love Scenario - iKON - K-Pop - Chill"),
    ("Rasa Ini", "Vierra", "Pop", "Sad", "Rasa Ini - Vierra - Pop - Sad"),
    ("Riptide", "Vance Joy", "Indie Folk", "Happy", "Riptide - Vance Joy - Indie Folk - Happy"),
    ("Shape of You", "Ed Sheeran", "Pop", "Happy", "Shape of You - Ed Sheeran - Pop - Happy"),
    ("Sicko Mode", "Travis Scott", "Hip-Hop", "Energetic", "Sicko Mode - Travis Scott - Hip-Hop - Energetic"),
    ("Sorai", "Nadin Amizah", "Pop", "Chill", "Sorai - Nadin Amizah - Pop - Chill"),
    ("The Kill", "Thirty Seconds to Mars", "Rock", "Intense", "The Kill - Thirty Seconds to Mars - Rock - Intense"),
    ("The Night We Met", "Lord Huron", "Indie", "Sad", "The Night We Met - Lord Huron - Indie - Sad"),
    ("Garam dan Madu (Sakit Dadaku)", "Tenxi", "Pop", "Galau", "Garam dan Madu (Sakit Dadaku) - Tenxi - Pop - Galau"),
    ("Alamak", "Rizky Febian", "Pop", "Fun", "Alamak - Rizky Febian - Pop - Fun"),
    ("Tabola Bale", "Silet Open Up", "Lagu Daerah NTT", "Upbeat", "Tabola Bale - Silet Open Up - Lagu Daerah NTT - Upbeat"),
    ("Lesung Pipi", "Raim Laode", "Pop", "Sweet", "Lesung Pipi - Raim Laode - Pop - Sweet"),
    ("Stecu Stecu", "Faris Adam", "Pop", "Upbeat", "Stecu Stecu - Faris Adam - Pop - Upbeat"),
];

/// The built-in catalog with locators under `assets_dir`.
#[must_use]
pub fn default_catalog(assets_dir: &Path) -> Vec<TrackFields> {
    let music_dir = assets_dir.join("music");
    let cover_dir = assets_dir.join("cover");

    DEFAULT_TRACKS
        .iter()
        .map(|&(title, artist, genre, vibe, stem)| {
            TrackFields::new(title, artist, genre, vibe)
                .with_audio(music_dir.join(format!("{stem}.mp3")))
                .with_artwork(cover_dir.join(format!("{stem}.jpg")))
        })
        .collect()
}

/// Read a JSON catalog seed: an array of track objects.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid track array.
pub fn load_catalog(path: &Path) -> Result<Vec<TrackFields>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

    let fields: Vec<TrackFields> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid catalog JSON in {}", path.display()))?;

    info!("Read {} catalog entries from {}", fields.len(), path.display());
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_default_catalog_locators() {
        let catalog = default_catalog(Path::new("/srv/assets"));
        assert_eq!(catalog.len(), 26);

        let first = &catalog[0];
        assert_eq!(first.title, "Belum Ada Satu Bulan");
        assert_eq!(
            first.audio_path,
            Some(PathBuf::from("/srv/assets/music/Belum Ada Satu Bulan - Bernadya - Pop - Sad.mp3"))
        );
        assert_eq!(
            first.artwork_path,
            Some(PathBuf::from("/srv/assets/cover/Belum Ada Satu Bulan - Bernadya - Pop - Sad.jpg"))
        );
    }

    #[test]
    fn test_load_catalog_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Riptide", "artist": "Vance Joy", "genre": "Indie Folk", "vibe": "Happy"}},
                {{"title": "Untagged", "artist": "Nobody", "audio_path": "/music/untagged.flac"}}
            ]"#
        )
        .unwrap();

        let fields = load_catalog(file.path()).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].vibe, "Happy");
        assert_eq!(fields[1].genre, "");
        assert_eq!(fields[1].audio_path, Some(PathBuf::from("/music/untagged.flac")));
    }

    #[test]
    fn test_load_catalog_errors() {
        assert!(load_catalog(Path::new("/definitely/not/here.json")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid catalog JSON"));
    }
}
