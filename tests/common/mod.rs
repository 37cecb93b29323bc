#![allow(dead_code)]

use async_trait::async_trait;
use queue_search::{
    FavoriteStore, PlaylistRef, QueueSearchError, Result, SessionProvider, SuggestionSource,
    Track,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn track(title: &str) -> Track {
    Track {
        title: title.to_string(),
        author: "Test Artist".to_string(),
        playlist: None,
        duration_ms: 200_000,
        is_stream: false,
    }
}

pub fn track_by(title: &str, author: &str, playlist: Option<&str>) -> Track {
    Track {
        title: title.to_string(),
        author: author.to_string(),
        playlist: playlist.map(|name| PlaylistRef {
            name: name.to_string(),
        }),
        duration_ms: 200_000,
        is_stream: false,
    }
}

/// Sessions keyed by id, each holding a queue and an optional current track.
#[derive(Default)]
pub struct FakeSessions {
    pub sessions: HashMap<u64, (Vec<Track>, Option<Track>)>,
}

impl FakeSessions {
    pub fn with_queue(session_id: u64, queue: Vec<Track>) -> Self {
        let current = queue.first().cloned();
        let mut sessions = HashMap::new();
        sessions.insert(session_id, (queue, current));
        Self { sessions }
    }
}

impl SessionProvider for FakeSessions {
    fn queue(&self, session_id: u64) -> Option<Vec<Track>> {
        self.sessions.get(&session_id).map(|(queue, _)| queue.clone())
    }

    fn current_track(&self, session_id: u64) -> Option<Track> {
        self.sessions
            .get(&session_id)
            .and_then(|(_, current)| current.clone())
    }
}

/// Returns canned suggestions and records every lookup.
#[derive(Default)]
pub struct FakeSuggestions {
    pub results: Vec<String>,
    pub fail: bool,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl FakeSuggestions {
    pub fn returning(results: &[&str]) -> Self {
        Self {
            results: results.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionSource for FakeSuggestions {
    async fn search(&self, text: &str, max_entries: usize) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), max_entries));
        if self.fail {
            return Err(QueueSearchError::Suggestion("service unavailable".to_string()));
        }
        Ok(self.results.clone())
    }
}

#[derive(Default)]
pub struct FakeFavorites {
    pub favorites: Vec<String>,
    pub pins: Vec<String>,
}

impl FakeFavorites {
    pub fn new(favorites: &[&str], pins: &[&str]) -> Self {
        Self {
            favorites: favorites.iter().map(|s| s.to_string()).collect(),
            pins: pins.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl FavoriteStore for FakeFavorites {
    async fn user_favorites(&self, _user_id: u64) -> Result<Vec<String>> {
        Ok(self.favorites.clone())
    }

    async fn guild_pins(&self, _session_id: u64) -> Result<Vec<String>> {
        Ok(self.pins.clone())
    }
}
