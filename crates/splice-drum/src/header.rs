//! SPLICE file layout constants.
//!
//! ```text
//! offset  size  field
//!      0     6  magic "SPLICE"
//!      6     8  payload size (i64, big-endian)
//!     14    32  version (zero-padded)
//!     46     4  bpm (f32, little-endian)
//!     50     -  tracks, repeated until the payload is exhausted
//! ```
//!
//! With the exception of the payload size, every multi-byte field is
//! little-endian.

/// Length of the magic identifier.
pub const MAGIC_LEN: usize = 6;

/// File magic identifier.
pub const MAGIC: &[u8; MAGIC_LEN] = b"SPLICE";

/// Length of the payload size field.
pub const PAYLOAD_SIZE_LEN: usize = 8;

/// Bytes preceding the payload: magic plus payload size.
pub const PREAMBLE_LEN: usize = MAGIC_LEN + PAYLOAD_SIZE_LEN;

/// Width of the fixed version field.
pub const VERSION_LEN: usize = 32;

/// Width of the bpm field.
pub const BPM_LEN: usize = 4;

/// Payload bytes occupied by version and bpm, before any track.
pub const PATTERN_HEADER_LEN: usize = VERSION_LEN + BPM_LEN;

/// Full fixed header (preamble, version, bpm): 50 bytes.
pub const FIXED_HEADER_LEN: usize = PREAMBLE_LEN + PATTERN_HEADER_LEN;

/// Steps per track.
pub const STEP_COUNT: usize = 16;

/// Maximum encoded track name length (stored in one byte).
pub const MAX_TRACK_NAME_LEN: usize = u8::MAX as usize;

/// Per-track bytes excluding the name: id (4) + name length (1) + steps (16).
pub const TRACK_OVERHEAD: usize = 4 + 1 + STEP_COUNT;

/// Step byte written for an active step.
pub const STEP_ACTIVE: u8 = 0x01;

/// Step byte written for an inactive step.
pub const STEP_INACTIVE: u8 = 0x00;

/// Payload size of a track with the given name length.
pub fn track_len(name_len: usize) -> usize {
    TRACK_OVERHEAD + name_len
}
