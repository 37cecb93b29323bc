use super::ChoiceKind;
use async_trait::async_trait;
use queue_search::{
    format_compact, match_queue, Autocomplete, AutocompleteRequest, FavoriteStore, Result,
    SessionProvider, Settings, SuggestionSource, Track,
};
use std::sync::Arc;

const SESSION_ID: u64 = 0;

/// A single session backed by a queue loaded from disk.
///
/// The first queued track stands in for the one currently playing.
struct FileSession {
    tracks: Vec<Track>,
}

impl SessionProvider for FileSession {
    fn queue(&self, session_id: u64) -> Option<Vec<Track>> {
        (session_id == SESSION_ID).then(|| self.tracks.clone())
    }

    fn current_track(&self, session_id: u64) -> Option<Track> {
        if session_id != SESSION_ID {
            return None;
        }
        self.tracks.first().cloned()
    }
}

/// No web lookups and no saved links from the command line.
struct Offline;

#[async_trait]
impl SuggestionSource for Offline {
    async fn search(&self, _text: &str, _max_entries: usize) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl FavoriteStore for Offline {
    async fn user_favorites(&self, _user_id: u64) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn guild_pins(&self, _session_id: u64) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Lines printed by the match command and the number of matches left out by the cap.
fn match_lines(
    tracks: &[Track],
    query: &str,
    all: bool,
    json: bool,
    max_results: usize,
) -> std::result::Result<(Vec<String>, usize), Box<dyn std::error::Error>> {
    if query.trim().is_empty() {
        return Err("Query must contain at least one word".into());
    }

    let hits = match_queue(tracks, query, all);
    let hidden = hits.len().saturating_sub(max_results);

    let mut lines = Vec::new();
    for hit in hits.iter().take(max_results) {
        if json {
            lines.push(serde_json::to_string(&hit.to_indexed())?);
        } else {
            let length = if hit.track.is_stream {
                "live".to_string()
            } else {
                format_compact(hit.track.duration_ms)
            };
            lines.push(format!(
                "{}. {} - {} [{length}]",
                hit.index + 1,
                hit.track.author,
                hit.track.title
            ));
        }
    }

    Ok((lines, hidden))
}

/// Handle the match command: token search over the queue file
pub fn handle_match_command(
    tracks: &[Track],
    query: &str,
    all: bool,
    json: bool,
    settings: &Settings,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (lines, hidden) = match_lines(tracks, query, all, json, settings.max_results)?;
    if lines.is_empty() {
        eprintln!("❌ No tracks found matching '{query}'");
        return Ok(());
    }

    for line in lines {
        println!("{line}");
    }

    if hidden > 0 {
        eprintln!(
            "… {hidden} more match{} not shown",
            if hidden == 1 { "" } else { "es" }
        );
    }

    Ok(())
}

/// Run one autocomplete handler against a queue loaded from disk.
fn choices(
    tracks: Vec<Track>,
    kind: ChoiceKind,
    query: &str,
    settings: &Settings,
) -> Option<Vec<String>> {
    let autocomplete = Autocomplete::with_settings(
        Arc::new(FileSession { tracks }),
        Arc::new(Offline),
        Arc::new(Offline),
        settings.clone(),
    );
    let request = AutocompleteRequest {
        session_id: SESSION_ID,
        user_id: 0,
        in_voice: true,
    };

    match kind {
        ChoiceKind::Titles => autocomplete.queue_titles(&request, query),
        ChoiceKind::Playlists => autocomplete.queue_playlists(&request, query),
        ChoiceKind::Authors => autocomplete.queue_authors(&request, query),
        ChoiceKind::Seek => autocomplete.seek_suggestions(&request, query),
    }
}

/// Handle the choices command: run an autocomplete handler against the queue file
pub fn handle_choices_command(
    tracks: Vec<Track>,
    kind: ChoiceKind,
    query: &str,
    settings: &Settings,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match choices(tracks, kind, query, settings) {
        Some(choices) => {
            for choice in choices {
                println!("{choice}");
            }
        }
        None => eprintln!("No choices offered for {kind:?} with query '{query}'"),
    }

    Ok(())
}
