//! Pronunciation playback seam.

use std::io;

use crate::types::LookupResult;

/// Plays an audio resource given its URL.
pub trait AudioPlayer {
    fn play(&self, url: &str) -> io::Result<()>;
}

/// Play the result's pronunciation. Returns `Ok(false)` without touching the
/// player when the result carries no audio URL.
pub fn play_pronunciation<P: AudioPlayer + ?Sized>(
    player: &P,
    result: &LookupResult,
) -> io::Result<bool> {
    if result.audio_url.is_empty() {
        return Ok(false);
    }
    player.play(&result.audio_url)?;
    Ok(true)
}
