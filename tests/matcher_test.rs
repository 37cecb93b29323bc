mod common;

use common::track;
use queue_search::matcher::{tokenize, WordBag};
use queue_search::{match_queue, Track};

fn queue(titles: &[&str]) -> Vec<Track> {
    titles.iter().map(|title| track(title)).collect()
}

fn indices(queue: &[Track], query: &str, match_all: bool) -> Vec<usize> {
    match_queue(queue, query, match_all)
        .iter()
        .map(|hit| hit.index)
        .collect()
}

#[test]
fn test_partial_tokens_match_inside_words() {
    let queue = queue(&["Intro", "My Track", "Drama"]);
    assert_eq!(indices(&queue, "ra", true), vec![1, 2]);
    assert_eq!(indices(&queue, "ra my", true), vec![1]);
}

#[test]
fn test_matching_is_case_insensitive() {
    let queue = queue(&["Never Gonna Give You Up"]);
    assert_eq!(indices(&queue, "NEVER gonna", true), vec![0]);
    assert_eq!(indices(&queue, "  give   UP ", true), vec![0]);
}

#[test]
fn test_first_match_only_without_match_all() {
    let queue = queue(&["Song A", "Song B", "Song C"]);
    let hits = match_queue(&queue, "song", false);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].track.title, "Song A");
}

#[test]
fn test_exact_title_returns_first_in_queue_order() {
    let queue = queue(&["Other", "Blue Monday", "Blue Monday"]);
    let hits = match_queue(&queue, "blue monday", false);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);
}

#[test]
fn test_results_keep_queue_order_and_positions() {
    let queue = queue(&["b song", "x", "a song", "song c"]);
    assert_eq!(indices(&queue, "song", true), vec![0, 2, 3]);
}

#[test]
fn test_duplicate_tokens_need_distinct_words() {
    let queue = queue(&["Love Song", "Love Love Me Do", "Lovely Lover"]);
    assert_eq!(indices(&queue, "love love", true), vec![1, 2]);
    assert_eq!(indices(&queue, "love love love", true), Vec::<usize>::new());
}

#[test]
fn test_one_word_cannot_satisfy_two_tokens() {
    let queue = queue(&["Tracks"]);
    assert!(match_queue(&queue, "tra cks", true).is_empty());
    assert_eq!(indices(&queue, "tracks", true), vec![0]);
}

#[test]
fn test_first_available_word_is_consumed() {
    // "a" claims "ab" before "a" is considered, leaving nothing for "ab".
    let queue = queue(&["ab a", "a ab"]);
    assert_eq!(indices(&queue, "a ab", true), vec![1]);
}

#[test]
fn test_empty_query_matches_everything() {
    let queue = queue(&["One", "Two", "Three"]);
    assert_eq!(indices(&queue, "", true), vec![0, 1, 2]);
    assert_eq!(indices(&queue, "   ", true), vec![0, 1, 2]);
    assert_eq!(indices(&queue, "", false), vec![0]);
}

#[test]
fn test_empty_queue_yields_nothing() {
    assert!(match_queue(&[], "anything", true).is_empty());
}

#[test]
fn test_no_false_positives() {
    let queue = queue(&[
        "Bohemian Rhapsody",
        "Rhapsody in Blue",
        "Blue in Green",
        "Green Onions",
        "Another One Bites the Dust",
    ]);

    for query in ["rhap", "in blue", "on", "one ones", "the bites", "ee n"] {
        let tokens = tokenize(query);
        for hit in match_queue(&queue, query, true) {
            let lowered = hit.track.title.to_lowercase();
            let mut bag = WordBag::new(&lowered);
            for token in &tokens {
                assert!(
                    bag.take_containing(token).is_some(),
                    "{:?} matched {:?} without a free word for {:?}",
                    query,
                    hit.track.title,
                    token
                );
            }
        }
    }
}

#[test]
fn test_match_does_not_touch_queue() {
    let queue = queue(&["Alpha", "Beta"]);
    let before = queue.clone();
    let _ = match_queue(&queue, "alpha", true);
    assert_eq!(queue, before);
}

#[test]
fn test_to_indexed_detaches_from_queue() {
    let queue = queue(&["Alpha", "Beta"]);
    let owned = match_queue(&queue, "beta", true)[0].to_indexed();
    drop(queue);
    assert_eq!(owned.index, 1);
    assert_eq!(owned.track.title, "Beta");
    assert_eq!(format!("{owned}"), "2. Beta");
}
