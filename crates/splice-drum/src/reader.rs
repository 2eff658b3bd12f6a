//! SPLICE decoder.
//!
//! Reads the preamble, bounds every further read to the declared payload
//! size, then reads tracks until that bound is exhausted. Step bytes are read
//! leniently: any nonzero byte counts as an active step.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

use crate::error::{DecodeError, Field, HeaderFault};
use crate::header::{MAGIC, MAGIC_LEN, STEP_COUNT, VERSION_LEN};
use crate::pattern::Pattern;
use crate::steps::Steps;
use crate::track::Track;

/// What to do with bytes that follow the declared payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingData {
    /// Stop at the payload boundary and leave the rest of the stream unread.
    #[default]
    Ignore,
    /// Fail with [`DecodeError::TrailingData`] if any byte follows the payload.
    Reject,
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    #[serde(default)]
    pub trailing: TrailingData,
}

impl DecodeOptions {
    /// Options that reject data after the payload.
    pub fn strict() -> Self {
        Self {
            trailing: TrailingData::Reject,
        }
    }
}

/// Decode a pattern from `reader` with default options.
pub fn decode<R: Read>(reader: &mut R) -> Result<Pattern, DecodeError> {
    decode_with(reader, &DecodeOptions::default())
}

/// Decode a pattern from a byte slice with default options.
pub fn from_bytes(data: &[u8]) -> Result<Pattern, DecodeError> {
    let mut cursor = data;
    decode(&mut cursor)
}

/// Decode a pattern from `reader`.
///
/// Under [`TrailingData::Ignore`] the reader is left positioned right after
/// the payload. The reader is never closed.
pub fn decode_with<R: Read>(
    reader: &mut R,
    options: &DecodeOptions,
) -> Result<Pattern, DecodeError> {
    let payload_size = read_preamble(reader)?;
    tracing::debug!("SPLICE preamble: payload size {}", payload_size);

    let mut payload = reader.by_ref().take(payload_size);

    let mut version = [0u8; VERSION_LEN];
    payload
        .read_exact(&mut version)
        .map_err(|e| DecodeError::from_read(e, Field::Version, None))?;
    let version = version_text(&version);

    let bpm = payload
        .read_f32::<LittleEndian>()
        .map_err(|e| DecodeError::from_read(e, Field::Bpm, None))?;
    tracing::debug!("Pattern version {:?}, bpm {}", version, bpm);

    let mut tracks = Vec::new();
    while payload.limit() > 0 {
        let track = read_track(&mut payload, tracks.len())?;
        tracing::trace!("Track {}: {}", tracks.len(), track);
        tracks.push(track);
    }

    if options.trailing == TrailingData::Reject && has_more(reader)? {
        return Err(DecodeError::TrailingData);
    }

    Ok(Pattern {
        version,
        bpm,
        tracks,
    })
}

/// Read the magic and the big-endian payload size.
fn read_preamble<R: Read>(reader: &mut R) -> Result<u64, DecodeError> {
    let mut magic = [0u8; MAGIC_LEN];
    reader
        .read_exact(&mut magic)
        .map_err(|e| DecodeError::from_read(e, Field::Magic, None))?;
    if &magic != MAGIC {
        return Err(DecodeError::InvalidHeader(HeaderFault::BadMagic(magic)));
    }

    let size = reader
        .read_i64::<BigEndian>()
        .map_err(|e| DecodeError::from_read(e, Field::PayloadSize, None))?;
    u64::try_from(size)
        .map_err(|_| DecodeError::InvalidHeader(HeaderFault::NegativePayloadSize(size)))
}

fn read_track<R: Read>(reader: &mut R, index: usize) -> Result<Track, DecodeError> {
    let at = |field: Field| move |e: io::Error| DecodeError::from_read(e, field, Some(index));

    let id = reader.read_i32::<LittleEndian>().map_err(at(Field::TrackId))?;
    let name_len = reader.read_u8().map_err(at(Field::TrackNameLength))?;

    let mut name = vec![0u8; usize::from(name_len)];
    reader.read_exact(&mut name).map_err(at(Field::TrackName))?;

    let mut wire = [0u8; STEP_COUNT];
    reader.read_exact(&mut wire).map_err(at(Field::TrackSteps))?;

    Ok(Track {
        id,
        name: String::from_utf8_lossy(&name).into_owned(),
        steps: steps_from_wire(&wire),
    })
}

/// Version text ends at the first null byte, or fills all 32 bytes.
fn version_text(field: &[u8; VERSION_LEN]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

fn steps_from_wire(wire: &[u8; STEP_COUNT]) -> Steps {
    wire.iter()
        .enumerate()
        .fold(Steps::EMPTY, |steps, (pos, &b)| steps.with(pos, b != 0))
}

/// Probe for one more byte after the payload.
fn has_more<R: Read>(reader: &mut R) -> Result<bool, DecodeError> {
    let mut probe = [0u8; 1];
    loop {
        match reader.read(&mut probe) {
            Ok(n) => return Ok(n > 0),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(DecodeError::ReadFailure(e)),
        }
    }
}
