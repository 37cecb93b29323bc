//! Token-bag partial matching over an ordered track queue.
//!
//! A query matches a track when every lower-cased query token is a substring
//! of a *distinct* word of the lower-cased title. Title words are held in a
//! [`WordBag`]: once a word satisfies a token it is consumed and cannot
//! satisfy another one.

use crate::types::{QueueMatch, Track};

/// A removable multiset of words taken from a piece of text.
///
/// Words keep the order they appear in, so lookups always return the first
/// still-available candidate. Consuming a word marks its slot as taken; the
/// remaining slots never move.
#[derive(Debug, Clone)]
pub struct WordBag<'a> {
    slots: Vec<Option<&'a str>>,
}

impl<'a> WordBag<'a> {
    /// Split `text` on whitespace into a bag. No case folding is done here.
    pub fn new(text: &'a str) -> Self {
        Self {
            slots: text.split_whitespace().map(Some).collect(),
        }
    }

    /// Number of words not yet consumed.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the first available word containing `token` and return it.
    pub fn take_containing(&mut self, token: &str) -> Option<&'a str> {
        self.slots
            .iter_mut()
            .find(|slot| matches!(**slot, Some(word) if word.contains(token)))
            .and_then(Option::take)
    }
}

/// Lower-case `query` and split it into tokens, keeping order and duplicates.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Check whether every token claims its own word of `title`.
///
/// `tokens` must already be lower-cased (see [`tokenize`]). An empty token
/// list matches any title.
pub fn title_matches<S: AsRef<str>>(title: &str, tokens: &[S]) -> bool {
    let lowered = title.to_lowercase();
    let mut bag = WordBag::new(&lowered);

    let mut found = 0;
    for token in tokens {
        if bag.take_containing(token.as_ref()).is_some() {
            found += 1;
        }
    }

    found == tokens.len()
}

/// Find the tracks of `queue` whose titles match `query`.
///
/// Results keep queue order and carry each track's position. With
/// `match_all == false` the scan stops at the first hit. No cap is applied
/// here; the autocomplete layer truncates what it surfaces.
///
/// An empty or whitespace-only query matches every track, so callers that
/// want "no suggestions" for an empty query must check before calling.
///
/// # Examples
///
/// ```rust
/// use queue_search::{match_queue, Track};
///
/// let track = |title: &str| Track {
///     title: title.to_string(),
///     author: "Artist".to_string(),
///     playlist: None,
///     duration_ms: 200_000,
///     is_stream: false,
/// };
/// let queue = vec![track("Intro"), track("Back Track"), track("Other Track")];
///
/// let hits = match_queue(&queue, "ra bac", true);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].index, 1);
/// ```
pub fn match_queue<'a>(queue: &'a [Track], query: &str, match_all: bool) -> Vec<QueueMatch<'a>> {
    let tokens = tokenize(query);
    let mut matches = Vec::new();

    for (index, track) in queue.iter().enumerate() {
        if !title_matches(&track.title, &tokens) {
            continue;
        }

        matches.push(QueueMatch { index, track });
        if !match_all {
            break;
        }
    }

    log::debug!(
        "Query {:?} ({} tokens) matched {} of {} queued tracks",
        query,
        tokens.len(),
        matches.len(),
        queue.len()
    );

    matches
}
