use queue_search::Track;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Tracks written the way a player dump would, without the optional fields.
const QUEUE_JSON: &str = r#"[
    {"title": "Never Gonna Give You Up", "author": "Rick Astley", "duration_ms": 213000},
    {"title": "Gonna Fly Now", "author": "Bill Conti", "duration_ms": 60000},
    {"title": "Gonna Be Live", "author": "Lofi Radio", "duration_ms": 0,
     "playlist": {"name": "Radio"}, "is_stream": true}
]"#;

fn write_queue(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("queue.json");
    std::fs::write(&path, QUEUE_JSON).unwrap();
    path
}

/// Run the binary with settings isolated from the user's config file and environment.
fn run(dir: &TempDir, args: &[&str], env: &[(&str, &str)]) -> Output {
    let missing = dir.path().join("missing.toml");
    let mut command = Command::new(env!("CARGO_BIN_EXE_queue-search"));
    command
        .arg("--config")
        .arg(&missing)
        .args(args)
        .env_remove("QUEUE_SEARCH__MAX_RESULTS")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_queue_file_optional_fields_default() {
    let tracks: Vec<Track> = serde_json::from_str(QUEUE_JSON).unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].playlist, None);
    assert!(!tracks[0].is_stream);
    assert_eq!(tracks[2].playlist_name(), Some("Radio"));
    assert!(tracks[2].is_stream);
}

#[test]
fn test_match_prints_first_hit_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let queue = write_queue(&dir);

    let output = run(&dir, &["match", path_arg(&queue), "fly", "gon"], &[]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["2. Bill Conti - Gonna Fly Now [01:00]"]
    );
}

#[test]
fn test_match_all_respects_max_results() {
    let dir = tempfile::tempdir().unwrap();
    let queue = write_queue(&dir);

    let output = run(
        &dir,
        &["match", path_arg(&queue), "gonna", "--all"],
        &[("QUEUE_SEARCH__MAX_RESULTS", "2")],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "1. Rick Astley - Never Gonna Give You Up [03:33]",
            "2. Bill Conti - Gonna Fly Now [01:00]",
        ]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 more match not shown"), "stderr: {stderr}");
}

#[test]
fn test_match_rejects_blank_query() {
    let dir = tempfile::tempdir().unwrap();
    let queue = write_queue(&dir);

    let output = run(&dir, &["match", path_arg(&queue), "   "], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least one word"));
}

#[test]
fn test_match_reports_unreadable_queue() {
    let dir = tempfile::tempdir().unwrap();
    let queue = dir.path().join("queue.json");
    std::fs::write(&queue, "{not json").unwrap();

    let output = run(&dir, &["match", path_arg(&queue), "gonna"], &[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_choices_seek_uses_first_track() {
    let dir = tempfile::tempdir().unwrap();
    let queue = write_queue(&dir);

    let output = run(&dir, &["choices", path_arg(&queue), "seek"], &[]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "00:00 | 0%");
    assert_eq!(lines[2], "00:21 | 10%");
}

#[test]
fn test_choices_authors_need_query() {
    let dir = tempfile::tempdir().unwrap();
    let queue = write_queue(&dir);

    let output = run(&dir, &["choices", path_arg(&queue), "authors", "rick"], &[]);
    assert_eq!(stdout_lines(&output), vec!["Rick Astley"]);

    let output = run(&dir, &["choices", path_arg(&queue), "authors"], &[]);
    assert!(output.status.success());
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No choices offered"));
}

#[test]
fn test_duration_commands() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(&dir, &["format", "90061000"], &[]);
    assert_eq!(stdout_lines(&output), vec!["1 dia, 1:01:01"]);

    let output = run(&dir, &["format", "3723000", "--words"], &[]);
    assert_eq!(
        stdout_lines(&output),
        vec!["1 hora, 2 minutos e 3 segundos"]
    );

    let output = run(&dir, &["parse", "1:02:03"], &[]);
    assert_eq!(stdout_lines(&output), vec!["3723"]);

    let output = run(&dir, &["parse", "1:2:3:4"], &[]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&dir, &["seek", "60000"], &[]);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[19], "01:54 | 190%");
}
