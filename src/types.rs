//! Data types shared by the matcher, the duration codec and the autocomplete boundary.
//!
//! Tracks are owned by the caller. The core only ever borrows them, and the
//! boundary hands out owned copies once results leave a session lock.

use serde::{Deserialize, Serialize};
use std::fmt;

// ================================================================================================
// TRACK METADATA
// ================================================================================================

/// A playlist a queued track was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistRef {
    /// Display name of the playlist
    pub name: String,
}

/// A playable item sitting in a player queue.
///
/// # Examples
///
/// ```rust
/// use queue_search::Track;
///
/// let track = Track {
///     title: "Paranoid Android".to_string(),
///     author: "Radiohead".to_string(),
///     playlist: None,
///     duration_ms: 387_000,
///     is_stream: false,
/// };
///
/// assert_eq!(format!("{track}"), "Radiohead - Paranoid Android");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// The track title, which is what the matcher searches
    pub title: String,
    /// Uploader or artist name
    pub author: String,
    /// The playlist this track was queued from (if any)
    #[serde(default)]
    pub playlist: Option<PlaylistRef>,
    /// Length of the track in milliseconds
    ///
    /// Live streams carry whatever the player reports here; callers must
    /// check [`Track::is_stream`] before treating it as a finite length.
    pub duration_ms: u64,
    /// Whether this is a live stream with no meaningful duration
    #[serde(default)]
    pub is_stream: bool,
}

impl Track {
    /// Name of the playlist this track came from, if any.
    pub fn playlist_name(&self) -> Option<&str> {
        self.playlist.as_ref().map(|p| p.name.as_str())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.author, self.title)
    }
}

// ================================================================================================
// MATCH RESULTS
// ================================================================================================

/// A track found by [`match_queue`](crate::match_queue), borrowed from the queue.
///
/// `index` is the zero-based position in the queue the track was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueMatch<'a> {
    pub index: usize,
    pub track: &'a Track,
}

impl QueueMatch<'_> {
    /// Detach this match from the queue it borrows.
    pub fn to_indexed(&self) -> IndexedTrack {
        IndexedTrack {
            index: self.index,
            track: self.track.clone(),
        }
    }
}

/// Owned form of a [`QueueMatch`], returned by the autocomplete boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedTrack {
    /// Zero-based queue position
    pub index: usize,
    pub track: Track,
}

impl fmt::Display for IndexedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index + 1, self.track.title)
    }
}

// ================================================================================================
// DURATIONS
// ================================================================================================

/// A suggested seek point: a formatted label and the percentage it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekOffset {
    /// Rendered as `"<compact time> | <percent>%"`
    pub label: String,
    pub percent: u64,
}

/// Unit words used when rendering durations.
///
/// Plurals are built by appending [`DurationLabels::plural_suffix`] to the
/// singular word, so only languages with suffix plurals are supported.
///
/// The defaults are Portuguese, matching the bot's user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationLabels {
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
    /// Word placed before the last unit of a verbose duration
    pub conjunction: String,
    pub plural_suffix: String,
}

impl Default for DurationLabels {
    fn default() -> Self {
        Self {
            day: "dia".to_string(),
            hour: "hora".to_string(),
            minute: "minuto".to_string(),
            second: "segundo".to_string(),
            conjunction: "e".to_string(),
            plural_suffix: "s".to_string(),
        }
    }
}

impl DurationLabels {
    /// Render `"<value> <unit>"`, pluralized when `value > 1`.
    pub fn phrase(&self, value: u64, unit: &str) -> String {
        if value > 1 {
            format!("{value} {unit}{}", self.plural_suffix)
        } else {
            format!("{value} {unit}")
        }
    }
}
