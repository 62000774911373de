//! Utilities for creating `rodio` sinks from files on disk.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{Decoder, Sink, Source};
use thiserror::Error;

use super::thread::Output;

#[derive(Debug, Error)]
pub(super) enum SinkError {
    #[error("failed to open file: {0}")]
    Open(#[from] std::io::Error),
    #[error("failed to decode: {0}")]
    Decode(#[from] DecoderError),
    #[error("no audio output device")]
    NoDevice,
}

/// Decoded media ready to be appended to a sink.
pub(super) struct Opened {
    pub sink: Sink,
    pub duration: Option<Duration>,
}

/// Map a file extension to the container hint symphonia expects.
pub(super) fn format_hint(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let hint = match ext.as_str() {
        "adif" | "adts" => "aac",
        "m4a" | "m4b" | "mp4" => "audio/mp4",
        "oga" | "opus" => "audio/ogg",
        "wave" => "wav",
        other => other,
    };
    Some(hint.to_string())
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, SinkError> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seekable(true);
    if let Some(hint) = format_hint(path) {
        builder = builder.with_hint(&hint);
    }
    Ok(builder.build()?)
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    output: &Output,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<Opened, SinkError> {
    let source = decode(path)?;
    let duration = source.total_duration();
    // `skip_duration` is our fallback seeking primitive; even Duration::ZERO is fine.
    let source = source.skip_duration(start_at);

    let sink = output.connect().ok_or(SinkError::NoDevice)?;
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(Opened { sink, duration })
}
