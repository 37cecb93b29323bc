use queue_search::{parse_clock_to_seconds, DurationCodec, Settings};

pub fn handle_format_command(milliseconds: u64, words: bool, settings: &Settings) {
    let codec = DurationCodec::new(settings.labels.clone());
    if words {
        println!("{}", codec.format_verbose(milliseconds));
    } else {
        println!("{}", codec.format_compact(milliseconds));
    }
}

pub fn handle_parse_command(clock: &str) -> Result<(), Box<dyn std::error::Error>> {
    let seconds = parse_clock_to_seconds(clock)?;
    println!("{seconds}");
    Ok(())
}

pub fn handle_seek_command(milliseconds: u64, settings: &Settings) {
    let codec = DurationCodec::new(settings.labels.clone());
    let offsets =
        codec.seek_offsets_with(milliseconds, settings.long_track_ms, settings.seek_points);
    for offset in offsets {
        println!("{}", offset.label);
    }
}
