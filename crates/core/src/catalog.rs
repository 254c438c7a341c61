//! Catalog validation rules shared by the HTTP and data layers.
//!
//! Provides id parsing, the song sort whitelist, and field checks for new
//! songs. Everything here is pure; callers map [`CoreError`] to responses.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Entity names
   -------------------------------------------------------------------------- */

pub const ENTITY_ARTIST: &str = "Artist";
pub const ENTITY_GENRE: &str = "Genre";
pub const ENTITY_PLAYLIST: &str = "Playlist";

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a song title.
pub const MAX_SONG_TITLE_LEN: usize = 200;

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: i32 = 1000;

/// Latest accepted release year.
pub const MAX_RELEASE_YEAR: i32 = 9999;

/* --------------------------------------------------------------------------
   Identifiers
   -------------------------------------------------------------------------- */

/// Parse a path segment into a positive database id.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!(
            "'{raw}' is not a positive integer id"
        ))),
    }
}

/* --------------------------------------------------------------------------
   Song ordering
   -------------------------------------------------------------------------- */

/// Accepted values of the `sortby` query parameter on the song listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SongSort {
    #[default]
    ReleaseYear,
    SongTitle,
}

/// All valid `sortby` values.
pub const VALID_SONG_SORTS: &[&str] = &["release_year", "song_title"];

impl SongSort {
    /// Resolve an optional `sortby` value, defaulting to release year.
    pub fn from_param(param: Option<&str>) -> Result<Self, CoreError> {
        param.map_or(Ok(Self::default()), |s| s.parse())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReleaseYear => "release_year",
            Self::SongTitle => "song_title",
        }
    }

    /// SQL ordering for the song listing. Ties fall back to insertion order.
    pub fn order_clause(self) -> &'static str {
        match self {
            Self::ReleaseYear => "s.release_year ASC, s.song_id ASC",
            Self::SongTitle => "s.song_title ASC, s.song_id ASC",
        }
    }
}

impl FromStr for SongSort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release_year" => Ok(Self::ReleaseYear),
            "song_title" => Ok(Self::SongTitle),
            other => Err(CoreError::Validation(format!(
                "Invalid sortby '{other}'. Must be one of: {}",
                VALID_SONG_SORTS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for SongSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------------------------------------------------
   New songs
   -------------------------------------------------------------------------- */

/// Validate a song title: non-blank and at most [`MAX_SONG_TITLE_LEN`] chars.
pub fn validate_song_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("song_title must not be blank".into()));
    }
    if trimmed.chars().count() > MAX_SONG_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "song_title exceeds {MAX_SONG_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "release_year {year} outside {MIN_RELEASE_YEAR}..={MAX_RELEASE_YEAR}"
        )))
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
