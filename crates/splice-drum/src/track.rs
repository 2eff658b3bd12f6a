//! A single named drum lane.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::header::track_len;
use crate::steps::Steps;

/// One named, 16-step lane of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Caller-assigned identifier; not required to be unique.
    pub id: i32,
    /// Track name (at most 255 bytes when encoded).
    pub name: String,
    /// Trigger flags.
    pub steps: Steps,
}

impl Track {
    /// Create a new track.
    pub fn new(id: i32, name: impl Into<String>, steps: Steps) -> Self {
        Self {
            id,
            name: name.into(),
            steps,
        }
    }

    /// Bytes this track occupies in the payload.
    pub fn encoded_len(&self) -> usize {
        track_len(self.name.len())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.id, self.name, self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_display() {
        let track = Track::new(40, "kick", Steps::from_bits(0x1111));
        assert_eq!(track.to_string(), "(40) kick\t|x---|x---|x---|x---|");
    }

    #[test]
    fn test_encoded_len_counts_name_bytes() {
        assert_eq!(Track::new(0, "snare", Steps::EMPTY).encoded_len(), 26);
        // Multi-byte UTF-8 counts in bytes, not chars.
        assert_eq!(Track::new(0, "é", Steps::EMPTY).encoded_len(), 23);
    }
}
