//! Autocomplete choices for the music bot's slash commands.
//!
//! Everything live (the session registry, the web suggestion endpoint, the
//! favourites database) is reached through the capability traits below, so
//! this layer only filters, caps and formats what they return.
//!
//! Methods return `None` when no choices should be offered at all (no
//! session, caller not in a voice channel) and an empty list when the
//! lookup ran but found nothing.

use crate::duration::DurationCodec;
use crate::matcher::match_queue;
use crate::settings::Settings;
use crate::text::{is_url, truncate_chars};
use crate::types::{IndexedTrack, Track};
use crate::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// Prefix put in front of favourites offered by [`Autocomplete::favorite_add_suggestions`].
pub const FAVORITE_PREFIX: &str = "> fav: ";

/// Access to the per-guild player sessions.
///
/// Implementations return snapshots; the matcher never holds a session lock.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SessionProvider: Send + Sync {
    /// The queued tracks of a session, or `None` when no player is active.
    fn queue(&self, session_id: u64) -> Option<Vec<Track>>;

    /// The track currently playing in a session.
    fn current_track(&self, session_id: u64) -> Option<Track>;
}

/// External search-suggestion service (e.g. a video site's autocomplete endpoint).
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Up to `max_entries` suggestions for `text`.
    async fn search(&self, text: &str, max_entries: usize) -> Result<Vec<String>>;
}

/// Saved links: per-user favourites and per-guild pins.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn user_favorites(&self, user_id: u64) -> Result<Vec<String>>;

    async fn guild_pins(&self, session_id: u64) -> Result<Vec<String>>;
}

/// Who is asking for choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocompleteRequest {
    /// The guild whose player session is consulted
    pub session_id: u64,
    pub user_id: u64,
    /// Whether the user is connected to a voice channel
    pub in_voice: bool,
}

/// Autocomplete handlers wired to their collaborators.
///
/// # Examples
///
/// ```rust,no_run
/// use queue_search::{Autocomplete, AutocompleteRequest};
/// # use queue_search::{FavoriteStore, SessionProvider, SuggestionSource};
/// # use std::sync::Arc;
/// # fn deps() -> (Arc<dyn SessionProvider>, Arc<dyn SuggestionSource>, Arc<dyn FavoriteStore>) { unimplemented!() }
///
/// let (sessions, suggestions, favorites) = deps();
/// let autocomplete = Autocomplete::new(sessions, suggestions, favorites);
///
/// let request = AutocompleteRequest { session_id: 1, user_id: 2, in_voice: true };
/// if let Some(hits) = autocomplete.find_in_queue(&request, "never gonna", false) {
///     for hit in hits {
///         println!("{hit}");
///     }
/// }
/// ```
#[derive(Clone)]
pub struct Autocomplete {
    sessions: Arc<dyn SessionProvider>,
    suggestions: Arc<dyn SuggestionSource>,
    favorites: Arc<dyn FavoriteStore>,
    settings: Settings,
    codec: DurationCodec,
}

impl Autocomplete {
    pub fn new(
        sessions: Arc<dyn SessionProvider>,
        suggestions: Arc<dyn SuggestionSource>,
        favorites: Arc<dyn FavoriteStore>,
    ) -> Self {
        Self::with_settings(sessions, suggestions, favorites, Settings::default())
    }

    pub fn with_settings(
        sessions: Arc<dyn SessionProvider>,
        suggestions: Arc<dyn SuggestionSource>,
        favorites: Arc<dyn FavoriteStore>,
        settings: Settings,
    ) -> Self {
        let codec = DurationCodec::new(settings.labels.clone());
        Self {
            sessions,
            suggestions,
            favorites,
            settings,
            codec,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn session_queue(&self, request: &AutocompleteRequest) -> Option<Vec<Track>> {
        if !request.in_voice {
            return None;
        }
        self.sessions.queue(request.session_id)
    }

    /// Queued titles containing `query`, truncated for display.
    pub fn queue_titles(&self, request: &AutocompleteRequest, query: &str) -> Option<Vec<String>> {
        let queue = self.session_queue(request)?;
        let needle = query.to_lowercase();

        Some(
            queue
                .iter()
                .filter(|track| track.title.to_lowercase().contains(&needle))
                .map(|track| truncate_chars(&track.title, self.settings.label_limit).to_string())
                .take(self.settings.max_results)
                .collect(),
        )
    }

    /// Distinct playlist names in the queue containing `query`.
    pub fn queue_playlists(
        &self,
        request: &AutocompleteRequest,
        query: &str,
    ) -> Option<Vec<String>> {
        let queue = self.session_queue(request)?;
        let needle = query.to_lowercase();

        let names = queue
            .iter()
            .filter_map(Track::playlist_name)
            .filter(|name| name.to_lowercase().contains(&needle));
        Some(distinct(names, self.settings.max_results))
    }

    /// Distinct authors in the queue containing `query`. Nothing is offered for an empty query.
    pub fn queue_authors(&self, request: &AutocompleteRequest, query: &str) -> Option<Vec<String>> {
        if query.is_empty() {
            return None;
        }
        let queue = self.session_queue(request)?;
        let needle = query.to_lowercase();

        let authors = queue
            .iter()
            .map(|track| track.author.as_str())
            .filter(|author| author.to_lowercase().contains(&needle));
        Some(distinct(authors, self.settings.max_results))
    }

    /// Queue positions whose titles match `query` word by word.
    ///
    /// Unlike [`match_queue`], an empty query finds nothing here.
    pub fn find_in_queue(
        &self,
        request: &AutocompleteRequest,
        query: &str,
        match_all: bool,
    ) -> Option<Vec<IndexedTrack>> {
        let queue = self.session_queue(request)?;
        if query.trim().is_empty() {
            return Some(Vec::new());
        }

        Some(
            match_queue(&queue, query, match_all)
                .iter()
                .take(self.settings.max_results)
                .map(|hit| hit.to_indexed())
                .collect(),
        )
    }

    /// Seek point labels for the current track, offered only before the user types.
    pub fn seek_suggestions(
        &self,
        request: &AutocompleteRequest,
        query: &str,
    ) -> Option<Vec<String>> {
        if !query.is_empty() {
            return None;
        }

        let current = self.sessions.current_track(request.session_id)?;
        if current.is_stream {
            return None;
        }

        let offsets = self.codec.seek_offsets_with(
            current.duration_ms,
            self.settings.long_track_ms,
            self.settings.seek_points,
        );
        Some(offsets.into_iter().map(|offset| offset.label).collect())
    }

    /// Web suggestions for `query`; a URL is passed back untouched.
    ///
    /// ```rust
    /// use async_trait::async_trait;
    /// use queue_search::{Autocomplete, FavoriteStore, Result, SessionProvider, SuggestionSource, Track};
    /// use std::sync::Arc;
    ///
    /// struct Canned;
    ///
    /// impl SessionProvider for Canned {
    ///     fn queue(&self, _: u64) -> Option<Vec<Track>> { None }
    ///     fn current_track(&self, _: u64) -> Option<Track> { None }
    /// }
    ///
    /// #[async_trait]
    /// impl SuggestionSource for Canned {
    ///     async fn search(&self, text: &str, _: usize) -> Result<Vec<String>> {
    ///         Ok(vec![format!("{text} live"), format!("{text} remix")])
    ///     }
    /// }
    ///
    /// #[async_trait]
    /// impl FavoriteStore for Canned {
    ///     async fn user_favorites(&self, _: u64) -> Result<Vec<String>> { Ok(Vec::new()) }
    ///     async fn guild_pins(&self, _: u64) -> Result<Vec<String>> { Ok(Vec::new()) }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let canned = Arc::new(Canned);
    /// let autocomplete = Autocomplete::new(canned.clone(), canned.clone(), canned);
    ///
    /// let choices = autocomplete.web_suggestions("daft punk", 1).await?;
    /// assert_eq!(choices, vec!["daft punk live"]);
    ///
    /// let url = "https://youtu.be/abc";
    /// assert_eq!(autocomplete.web_suggestions(url, 5).await?, vec![url]);
    /// # Ok::<(), queue_search::QueueSearchError>(())
    /// # });
    /// ```
    pub async fn web_suggestions(&self, query: &str, max_entries: usize) -> Result<Vec<String>> {
        if is_url(query) {
            return Ok(vec![query.to_string()]);
        }

        let mut found = self
            .suggestions
            .search(query, max_entries)
            .await
            .map_err(|e| {
                log::warn!("Suggestion lookup for {query:?} failed: {e}");
                e
            })?;
        found.truncate(max_entries);
        Ok(found)
    }

    /// Web suggestions for users in a voice channel with a non-empty query.
    pub async fn search_suggestions(
        &self,
        request: &AutocompleteRequest,
        query: &str,
    ) -> Result<Vec<String>> {
        if query.is_empty() || !request.in_voice {
            return Ok(Vec::new());
        }
        self.web_suggestions(query, self.settings.max_results).await
    }

    /// The user's favourites containing `query` (all of them for an empty query).
    pub async fn favorites(
        &self,
        request: &AutocompleteRequest,
        query: &str,
        prefix: &str,
    ) -> Result<Vec<String>> {
        let names = self.favorites.user_favorites(request.user_id).await?;
        Ok(self.prefixed_matches(names, query, prefix))
    }

    /// The guild's pinned links containing `query` (all of them for an empty query).
    pub async fn pins(
        &self,
        request: &AutocompleteRequest,
        query: &str,
        prefix: &str,
    ) -> Result<Vec<String>> {
        let names = self.favorites.guild_pins(request.session_id).await?;
        Ok(self.prefixed_matches(names, query, prefix))
    }

    /// Choices for adding a favourite: web suggestions first, then matching favourites.
    ///
    /// Users outside a voice channel just get their own text back.
    pub async fn favorite_add_suggestions(
        &self,
        request: &AutocompleteRequest,
        query: &str,
    ) -> Result<Vec<String>> {
        if !request.in_voice {
            return Ok(vec![query.to_string()]);
        }

        let favorites = self.favorites(request, query, FAVORITE_PREFIX).await?;
        let max = self.settings.max_results;
        if query.is_empty() || favorites.len() >= max {
            return Ok(favorites);
        }

        let mut choices = self.web_suggestions(query, max - favorites.len()).await?;
        choices.extend(favorites);
        Ok(choices)
    }

    fn prefixed_matches(&self, names: Vec<String>, query: &str, prefix: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        names
            .into_iter()
            .filter(|name| query.is_empty() || name.to_lowercase().contains(&needle))
            .map(|name| format!("{prefix}{name}"))
            .take(self.settings.max_results)
            .collect()
    }
}

/// First `cap` distinct values, in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .take(cap)
        .map(str::to_string)
        .collect()
}
