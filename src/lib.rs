//! Queue search and duration helpers for music bot autocomplete.
//!
//! The pure core is split into [`matcher`] (token-bag partial matching over a
//! track queue) and [`duration`] (compact/verbose rendering, clock parsing and
//! seek offsets). [`autocomplete`] wires both to injected collaborators.

pub mod autocomplete;
pub mod duration;
pub mod error;
pub mod matcher;
pub mod settings;
pub mod text;
pub mod types;

pub use autocomplete::{
    Autocomplete, AutocompleteRequest, FavoriteStore, SessionProvider, SuggestionSource,
};
pub use duration::{
    format_compact, format_verbose, parse_clock_to_seconds, percentage, seek_offsets,
    DurationCodec,
};
pub use error::QueueSearchError;
pub use matcher::{match_queue, WordBag};
pub use settings::Settings;
pub use types::{DurationLabels, IndexedTrack, PlaylistRef, QueueMatch, SeekOffset, Track};

#[cfg(feature = "mock")]
pub use autocomplete::{MockFavoriteStore, MockSessionProvider, MockSuggestionSource};

pub type Result<T> = std::result::Result<T, QueueSearchError>;
