//! SPLICE encoder.
//!
//! Output is canonical: active steps are always written as `0x01`, and the
//! version is padded with trailing zero bytes. The whole pattern is validated
//! before anything reaches the writer.

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::error::EncodeError;
use crate::header::{
    MAGIC, MAX_TRACK_NAME_LEN, STEP_ACTIVE, STEP_COUNT, STEP_INACTIVE, VERSION_LEN,
};
use crate::pattern::Pattern;
use crate::steps::Steps;
use crate::track::Track;

/// Check that `pattern` fits the format's field widths.
pub fn validate(pattern: &Pattern) -> Result<(), EncodeError> {
    let version_len = pattern.version.len();
    if version_len > VERSION_LEN {
        return Err(EncodeError::VersionTooLong { len: version_len });
    }
    if let Some(nul) = pattern.version.find('\0') {
        tracing::warn!(
            "Version {:?} contains a null byte at {}; it will decode as {:?}",
            pattern.version,
            nul,
            &pattern.version[..nul]
        );
    }

    for (index, track) in pattern.tracks.iter().enumerate() {
        let len = track.name.len();
        if len > MAX_TRACK_NAME_LEN {
            return Err(EncodeError::TrackNameTooLong { index, len });
        }
    }

    Ok(())
}

/// Encode `pattern` to `writer`.
///
/// On error, bytes already handed to `writer` do not form a valid file.
pub fn encode<W: Write>(writer: &mut W, pattern: &Pattern) -> Result<(), EncodeError> {
    validate(pattern)?;

    let payload_size = pattern.payload_size();
    tracing::debug!(
        "Encoding {} tracks, payload size {}",
        pattern.tracks.len(),
        payload_size
    );

    // Magic
    writer.write_all(MAGIC)?;

    // Payload size is the only big-endian field
    writer.write_i64::<BigEndian>(payload_size as i64)?;

    // Version (32 bytes, zero-padded)
    let mut version = [0u8; VERSION_LEN];
    let bytes = pattern.version.as_bytes();
    version[..bytes.len()].copy_from_slice(bytes);
    writer.write_all(&version)?;

    writer.write_f32::<LittleEndian>(pattern.bpm)?;

    for track in &pattern.tracks {
        write_track(writer, track)?;
    }

    Ok(())
}

/// Encode `pattern` into a new byte vector.
pub fn to_bytes(pattern: &Pattern) -> Result<Vec<u8>, EncodeError> {
    let mut buffer = Vec::with_capacity(pattern.encoded_len() as usize);
    encode(&mut buffer, pattern)?;
    Ok(buffer)
}

/// BLAKE3 hash of the canonical encoding of `pattern`.
pub fn content_hash(pattern: &Pattern) -> Result<String, EncodeError> {
    let bytes = to_bytes(pattern)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

fn write_track<W: Write>(writer: &mut W, track: &Track) -> Result<(), EncodeError> {
    writer.write_i32::<LittleEndian>(track.id)?;
    // Length already validated against MAX_TRACK_NAME_LEN
    writer.write_u8(track.name.len() as u8)?;
    writer.write_all(track.name.as_bytes())?;
    writer.write_all(&steps_to_wire(track.steps))?;
    Ok(())
}

fn steps_to_wire(steps: Steps) -> [u8; STEP_COUNT] {
    let mut wire = [STEP_INACTIVE; STEP_COUNT];
    for (byte, active) in wire.iter_mut().zip(steps.iter()) {
        if active {
            *byte = STEP_ACTIVE;
        }
    }
    wire
}
