//! Rendering and parsing of track durations.
//!
//! Durations come in as milliseconds. They render either as a compact clock
//! (`"3:05:09"`, `"1 dia, 02:00"`) or as verbose words
//! (`"2 horas, 1 minuto e 3 segundos"`). Clock strings typed by users parse
//! back into seconds.

use crate::types::{DurationLabels, SeekOffset};
use crate::{QueueSearchError, Result};

const MS_PER_SECOND: u64 = 1_000;

/// Tracks at least this long get 5% seek steps instead of 10%.
pub const LONG_TRACK_MS: u64 = 90_000;

/// Number of seek points offered for a track.
pub const SEEK_POINTS: u64 = 20;

/// Clock units from the rightmost segment of a clock string, with their length in seconds.
const CLOCK_UNITS: [(&str, i64); 3] = [("seconds", 1), ("minutes", 60), ("hours", 3_600)];

/// A duration split into calendar-free units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Parts {
    fn from_millis(ms: u64) -> Self {
        let total_seconds = ms / MS_PER_SECOND;
        let (total_minutes, seconds) = (total_seconds / 60, total_seconds % 60);
        let (total_hours, minutes) = (total_minutes / 60, total_minutes % 60);
        let (days, hours) = (total_hours / 24, total_hours % 24);

        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

/// Duration formatter carrying the unit words it renders with.
///
/// The free functions in this module use [`DurationLabels::default`].
///
/// # Examples
///
/// ```rust
/// use queue_search::{DurationCodec, DurationLabels};
///
/// let english = DurationCodec::new(DurationLabels {
///     day: "day".to_string(),
///     hour: "hour".to_string(),
///     minute: "minute".to_string(),
///     second: "second".to_string(),
///     conjunction: "and".to_string(),
///     plural_suffix: "s".to_string(),
/// });
///
/// assert_eq!(english.format_verbose(3_723_000), "1 hour, 2 minutes and 3 seconds");
/// assert_eq!(english.format_compact(172_800_000), "2 days");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationCodec {
    labels: DurationLabels,
}

impl DurationCodec {
    pub fn new(labels: DurationLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &DurationLabels {
        &self.labels
    }

    /// Render `ms` as `MM:SS`, `H:MM:SS`, or with a leading day count.
    ///
    /// Hours are not zero-padded. The clock part is left out after the day
    /// count when it would read exactly `"00:00"`.
    pub fn format_compact(&self, ms: u64) -> String {
        let parts = Parts::from_millis(ms);

        let mut clock = format!("{:02}:{:02}", parts.minutes, parts.seconds);
        if parts.hours > 0 {
            clock = format!("{}:{clock}", parts.hours);
        }

        if parts.days == 0 {
            return clock;
        }

        let days = self.labels.phrase(parts.days, &self.labels.day);
        if clock == "00:00" {
            days
        } else {
            format!("{days}, {clock}")
        }
    }

    /// Render `ms` as words, listing the non-zero units from days down to seconds.
    ///
    /// Anything under one second renders as one second so there is always
    /// something to show.
    pub fn format_verbose(&self, ms: u64) -> String {
        let parts = Parts::from_millis(ms);
        let labels = &self.labels;

        let mut phrases: Vec<String> = [
            (parts.days, &labels.day),
            (parts.hours, &labels.hour),
            (parts.minutes, &labels.minute),
            (parts.seconds, &labels.second),
        ]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| labels.phrase(value, unit))
        .collect();

        let Some(last) = phrases.pop() else {
            return labels.phrase(1, &labels.second);
        };

        if phrases.is_empty() {
            last
        } else {
            format!("{} {} {last}", phrases.join(", "), labels.conjunction)
        }
    }

    /// Seek points for a finite track of `duration_ms`.
    ///
    /// Tracks of at least [`LONG_TRACK_MS`] step by `n * 0.5 * 10` percent,
    /// shorter ones by `n * 1 * 10` percent, for `n` in `0..20`. Short tracks
    /// therefore get points past 100%.
    pub fn seek_offsets(&self, duration_ms: u64) -> Vec<SeekOffset> {
        self.seek_offsets_with(duration_ms, LONG_TRACK_MS, SEEK_POINTS)
    }

    /// [`DurationCodec::seek_offsets`] with an explicit long-track threshold and point count.
    pub fn seek_offsets_with(
        &self,
        duration_ms: u64,
        long_track_ms: u64,
        points: u64,
    ) -> Vec<SeekOffset> {
        // Step multipliers are kept in tenths: 0.5 * 10 and 1 * 10.
        let step = if duration_ms >= long_track_ms { 5 } else { 10 };

        log::debug!("Building {points} seek points for {duration_ms}ms with a {step}% step");

        (0..points)
            .map(|n| {
                let percent = n * step;
                let part = percentage(percent, duration_ms);
                SeekOffset {
                    label: format!("{} | {percent}%", self.format_compact(part)),
                    percent,
                }
            })
            .collect()
    }
}

/// [`DurationCodec::format_compact`] with the default labels.
///
/// ```rust
/// assert_eq!(queue_search::format_compact(90_061_000), "1 dia, 1:01:01");
/// assert_eq!(queue_search::format_compact(135_000), "02:15");
/// ```
pub fn format_compact(ms: u64) -> String {
    DurationCodec::default().format_compact(ms)
}

/// [`DurationCodec::format_verbose`] with the default labels.
///
/// ```rust
/// assert_eq!(queue_search::format_verbose(0), "1 segundo");
/// assert_eq!(queue_search::format_verbose(125_000), "2 minutos e 5 segundos");
/// ```
pub fn format_verbose(ms: u64) -> String {
    DurationCodec::default().format_verbose(ms)
}

/// [`DurationCodec::seek_offsets`] with the default labels.
pub fn seek_offsets(duration_ms: u64) -> Vec<SeekOffset> {
    DurationCodec::default().seek_offsets(duration_ms)
}

/// `part` percent of `whole`, rounded down.
pub fn percentage(part: u64, whole: u64) -> u64 {
    let value = u128::from(part) * u128::from(whole) / 100;
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// Parse a `[[H:]M:]S` clock string into total seconds.
///
/// The rightmost segment is seconds, then minutes, then hours. Each segment
/// is read as an integer literal: surrounding whitespace and a leading sign
/// are accepted, so `"-1:30"` gives `-30`.
///
/// # Errors
///
/// Returns [`QueueSearchError::InvalidFormat`] when a segment is not an
/// integer (including empty segments) or when there are more than three
/// segments.
///
/// ```rust
/// use queue_search::{parse_clock_to_seconds, QueueSearchError};
///
/// assert_eq!(parse_clock_to_seconds("1:02:03").unwrap(), 3_723);
/// assert!(matches!(
///     parse_clock_to_seconds("1:2:3:4"),
///     Err(QueueSearchError::InvalidFormat(_))
/// ));
/// ```
pub fn parse_clock_to_seconds(text: &str) -> Result<i64> {
    let segments: Vec<&str> = text.split(':').collect();
    if segments.len() > CLOCK_UNITS.len() {
        log::warn!("Rejected clock string {text:?}: {} segments", segments.len());
        return Err(QueueSearchError::InvalidFormat(text.to_string()));
    }

    let mut total: i64 = 0;
    for (segment, (unit, seconds_per_unit)) in segments.iter().rev().zip(CLOCK_UNITS) {
        let value: i64 = segment.trim().parse().map_err(|_| {
            log::warn!("Rejected clock string {text:?}: bad {unit} segment {segment:?}");
            QueueSearchError::InvalidFormat(text.to_string())
        })?;

        total = value
            .checked_mul(seconds_per_unit)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(|| QueueSearchError::InvalidFormat(text.to_string()))?;
    }

    Ok(total)
}
