//! Top-level pattern data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::header::{PATTERN_HEADER_LEN, PREAMBLE_LEN};
use crate::track::Track;

/// A drum machine pattern: hardware version, tempo and an ordered set of tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Version string of the hardware that saved the pattern (at most 32 bytes).
    pub version: String,
    /// Tempo in beats per minute.
    pub bpm: f32,
    /// Tracks in file order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Create a new pattern.
    pub fn new(version: impl Into<String>, bpm: f32, tracks: Vec<Track>) -> Self {
        Self {
            version: version.into(),
            bpm,
            tracks,
        }
    }

    /// Payload size declared in the file header for this pattern.
    pub fn payload_size(&self) -> u64 {
        let tracks: usize = self.tracks.iter().map(Track::encoded_len).sum();
        (PATTERN_HEADER_LEN + tracks) as u64
    }

    /// Total length of the encoded file.
    pub fn encoded_len(&self) -> u64 {
        PREAMBLE_LEN as u64 + self.payload_size()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.bpm)?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::Steps;

    #[test]
    fn test_payload_size_without_tracks() {
        let pattern = Pattern::new("0.708-alpha", 999.0, vec![]);
        assert_eq!(pattern.payload_size(), 36);
        assert_eq!(pattern.encoded_len(), 50);
    }

    #[test]
    fn test_payload_size_sums_tracks() {
        let pattern = Pattern::new(
            "0.808-alpha",
            120.0,
            vec![
                Track::new(0, "kick", Steps::EMPTY),
                Track::new(1, "snare", Steps::EMPTY),
            ],
        );
        assert_eq!(pattern.payload_size(), 36 + 25 + 26);
    }

    #[test]
    fn test_display_uses_shortest_tempo() {
        let pattern = Pattern::new(
            "0.909",
            98.4,
            vec![Track::new(5, "cowbell", Steps::from_bits(0x0400))],
        );
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.909\nTempo: 98.4\n(5) cowbell\t|----|----|--x-|----|\n"
        );
    }

    #[test]
    fn test_display_integral_tempo() {
        let pattern = Pattern::new("0.808-alpha", 120.0, vec![]);
        assert_eq!(
            pattern.to_string(),
            "Saved with HW Version: 0.808-alpha\nTempo: 120\n"
        );
    }
}
