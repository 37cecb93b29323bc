pub mod duration;
pub mod queue;

use clap::{Subcommand, ValueEnum};
use queue_search::{Settings, Track};
use std::path::Path;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ChoiceKind {
    /// Titles containing the query
    Titles,
    /// Playlist names containing the query
    Playlists,
    /// Authors containing the query
    Authors,
    /// Seek points for the first queued track (query must be empty)
    Seek,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find queued tracks whose titles match every query word
    ///
    /// Each query word must be part of a different word of the title.
    ///
    /// Usage examples:
    /// # First match only
    /// queue-search match queue.json "never gonna"
    ///
    /// # All matches, as JSON lines
    /// queue-search match queue.json gonna --all --json
    Match {
        /// JSON file holding an array of tracks
        queue_file: String,

        /// Query words
        #[arg(required = true)]
        query: Vec<String>,

        /// Return every match instead of the first one
        #[arg(long)]
        all: bool,

        /// Print matches as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Show the autocomplete choices a queue would produce
    ///
    /// Usage examples:
    /// queue-search choices queue.json authors "rick"
    /// queue-search choices queue.json seek
    Choices {
        /// JSON file holding an array of tracks
        queue_file: String,

        #[arg(value_enum)]
        kind: ChoiceKind,

        /// Text typed so far
        #[arg(default_value = "")]
        query: String,
    },

    /// Format milliseconds as a clock or in words
    ///
    /// Usage examples:
    /// queue-search format 90061000
    /// queue-search format 3723000 --words
    Format {
        milliseconds: u64,

        /// Spell out the units
        #[arg(long)]
        words: bool,
    },

    /// Parse a [[H:]M:]S clock string into seconds
    Parse { clock: String },

    /// List seek points for a track length in milliseconds
    Seek { milliseconds: u64 },
}

/// Execute the appropriate command handler based on the parsed command
pub fn execute_command(
    command: Commands,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Match {
            queue_file,
            query,
            all,
            json,
        } => {
            let tracks = load_queue(Path::new(&queue_file))?;
            queue::handle_match_command(&tracks, &query.join(" "), all, json, settings)
        }

        Commands::Choices {
            queue_file,
            kind,
            query,
        } => {
            let tracks = load_queue(Path::new(&queue_file))?;
            queue::handle_choices_command(tracks, kind, &query, settings)
        }

        Commands::Format {
            milliseconds,
            words,
        } => {
            duration::handle_format_command(milliseconds, words, settings);
            Ok(())
        }

        Commands::Parse { clock } => duration::handle_parse_command(&clock),

        Commands::Seek { milliseconds } => {
            duration::handle_seek_command(milliseconds, settings);
            Ok(())
        }
    }
}

/// Read a queue file: a JSON array of tracks.
pub fn load_queue(path: &Path) -> queue_search::Result<Vec<Track>> {
    let raw = std::fs::read_to_string(path)?;
    let tracks: Vec<Track> = serde_json::from_str(&raw)?;
    log::debug!("Loaded {} tracks from {}", tracks.len(), path.display());
    Ok(tracks)
}
